pub mod calendar;
pub mod date;
pub mod image;
pub mod text;

pub use date::{DisplayZone, LongDate};
pub use image::ImageResolver;
