pub mod client;
pub mod config;
pub mod logging;
pub mod models;
pub mod navigator;
pub mod reader;
pub mod session;
pub mod speech;
pub mod story;

pub use client::{GeminiClient, TextGenerator};
pub use config::Config;
pub use models::{LoadingProgress, Page, Story};
pub use navigator::StoryNavigator;
pub use session::{AppState, Session};
pub use speech::{SpeechError, SpeechInput, UnavailableSpeech};
pub use story::{
    GenerationError, GenerationOptions, ImageUrlBuilder, build_image_url, generate_story,
};

#[cfg(feature = "gui")]
pub mod gui;
