mod option;
mod time;
