pub mod errors;
pub mod fade;

pub use fade::{adjust_opacity, fade_alpha, save_image, DEFAULT_OPACITY};
