pub mod error;
pub mod generator;
pub mod image_url;
pub mod prompt;

pub use error::{FALLBACK_ERROR_MESSAGE, GenerationError};
pub use generator::{DEFAULT_PAGE_DELAY, GenerationOptions, generate_story};
pub use image_url::{BACKGROUND_IMAGE_URL, ImageUrlBuilder, build_image_url};
pub use prompt::{DEFAULT_PAGE_COUNT, build_prompt, split_pages};
