mod construction;
