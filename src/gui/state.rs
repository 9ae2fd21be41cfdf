use iced::widget::image;

use crate::client::GeminiClient;
use crate::session::Session;
use crate::speech::{SpeechInput, UnavailableSpeech};
use crate::story::GenerationOptions;

/// Everything the screens share. The session decides which screen is live.
pub struct GuiState {
    pub session: Session,
    pub generator: GeminiClient,
    pub options: GenerationOptions,
    pub speech: Box<dyn SpeechInput>,
    /// Used for illustrations, not for the text service.
    pub http: reqwest::Client,
    pub background: Option<image::Handle>,
}

impl GuiState {
    pub fn new(generator: GeminiClient, options: GenerationOptions) -> Self {
        Self {
            session: Session::new(),
            generator,
            options,
            speech: Box::new(UnavailableSpeech),
            http: reqwest::Client::new(),
            background: None,
        }
    }
}
