use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_ENDPOINT: &str = "https://image.pollinations.ai/prompt/";
pub const DEFAULT_IMAGE_STYLE: &str = "cartoon,colorful,children's book illustration";
pub const DEFAULT_IMAGE_WIDTH: u32 = 800;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 600;

/// Decoration behind the app shell, unrelated to any story.
pub const BACKGROUND_IMAGE_URL: &str = "https://image.pollinations.ai/prompt/cartoon%20anime%20style%20sunset%20over%20nature%20with%20beautful%20warm%20colors";

/// Builds illustration request URLs for page text.
///
/// Nothing is fetched here; the URL is handed to whatever renders the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUrlBuilder {
    pub base_url: String,
    pub style: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_ENDPOINT.to_string(),
            style: DEFAULT_IMAGE_STYLE.to_string(),
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

impl ImageUrlBuilder {
    pub fn build(&self, text: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!(
            "{}/{}?style={}&width={}&height={}",
            base,
            urlencoding::encode(text),
            urlencoding::encode(&self.style),
            self.width,
            self.height
        )
    }
}

/// Illustration URL for `text` using the default endpoint, style and size.
pub fn build_image_url(text: &str) -> String {
    ImageUrlBuilder::default().build(text)
}
