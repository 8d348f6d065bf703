pub mod classify_image;
