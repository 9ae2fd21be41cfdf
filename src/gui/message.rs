use iced::widget::image;

use crate::gui::screens::{
    ScreenMessage, outline_form::OutlineFormScreen, story_display::StoryDisplayScreen,
};
use crate::models::{LoadingProgress, Story};
use crate::story::GenerationError;

#[derive(Debug, Clone)]
pub enum Message {
    OutlineForm(ScreenMessage<OutlineFormScreen>),
    StoryDisplay(ScreenMessage<StoryDisplayScreen>),
    Submit(String),
    Generation(GenerationEvent),
    NewStory,
    BackgroundLoaded(Result<image::Handle, String>),
}

/// Streamed out of a running generation: any number of progress events,
/// then exactly one `Finished`.
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    Progress(LoadingProgress),
    Finished(Result<Story, GenerationError>),
}
