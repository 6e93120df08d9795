pub mod image_io;

pub use image_io::{load_gray, save_image, save_png};
