mod color;

pub use color::{Color, ColorRGBExp32};
