pub mod color;
pub mod validation;

pub use color::is_valid_hex_color;
