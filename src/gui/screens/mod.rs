pub mod loading_page;
pub mod outline_form;
pub mod story_display;

use std::convert::Infallible;
use std::fmt;

use iced::{Element, Task};
use tracing::info;

use crate::gui::{GuiState, Message, message::GenerationEvent, tasks};

pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

impl<S: Screen> Clone for ScreenMessage<S> {
    fn clone(&self) -> Self {
        match self {
            Self::ScreenMessage(msg) => Self::ScreenMessage(msg.clone()),
            Self::ParentMessage(msg) => Self::ParentMessage(msg.clone()),
        }
    }
}

impl<S: Screen> fmt::Debug for ScreenMessage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScreenMessage(msg) => f.debug_tuple("ScreenMessage").field(msg).finish(),
            Self::ParentMessage(msg) => f.debug_tuple("ParentMessage").field(msg).finish(),
        }
    }
}

pub trait Screen: Sized {
    type Message: fmt::Debug + Clone + Send + 'static;
    type ParentMessage: fmt::Debug + Clone + Send + 'static;
    fn view<'a>(&'a self, state: &'a GuiState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut GuiState)
    -> Task<ScreenMessage<Self>>;
}

pub enum ScreenData {
    OutlineForm(outline_form::OutlineFormScreen),
    Loading(loading_page::LoadingPageScreen),
    StoryDisplay(story_display::StoryDisplayScreen),
}

impl Default for ScreenData {
    fn default() -> Self {
        ScreenData::OutlineForm(outline_form::OutlineFormScreen::new())
    }
}

fn never<T>(message: ScreenMessage<loading_page::LoadingPageScreen>) -> T {
    match message {
        ScreenMessage::ScreenMessage(never) | ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a GuiState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::OutlineForm(screen) => screen.view(state).map(Message::OutlineForm),
            ScreenData::Loading(screen) => screen.view(state).map(never),
            ScreenData::StoryDisplay(screen) => screen.view(state).map(Message::StoryDisplay),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(&mut self, message: Self::Message, state: &mut GuiState) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Submit(outline)) => {
                if !state.session.begin() {
                    return Task::none();
                }
                info!(outline_len = outline.len(), "Outline submitted");
                *x = ScreenData::Loading(loading_page::LoadingPageScreen::new(outline.clone()));
                let events =
                    tasks::generate(state.generator.clone(), state.options.clone(), outline);
                Task::run(events, |event| {
                    ScreenMessage::ScreenMessage(Message::Generation(event))
                })
            }
            (_, Message::Generation(GenerationEvent::Progress(progress))) => {
                state.session.report_progress(progress);
                Task::none()
            }
            (x, Message::Generation(GenerationEvent::Finished(result))) => {
                state.session.complete(result);
                if let Some(story) = state.session.story().cloned() {
                    let (screen, task) =
                        story_display::StoryDisplayScreen::new(story, state.http.clone());
                    *x = ScreenData::StoryDisplay(screen);
                    task.map(Message::StoryDisplay).map(ScreenMessage::ScreenMessage)
                } else {
                    // Give the outline back so it can be retried or edited.
                    let outline = match x {
                        ScreenData::Loading(loading) => loading.outline().to_string(),
                        _ => String::new(),
                    };
                    *x = ScreenData::OutlineForm(outline_form::OutlineFormScreen::with_text(&outline));
                    Task::none()
                }
            }
            (x, Message::NewStory) => {
                state.session.reset();
                *x = ScreenData::default();
                Task::none()
            }
            (ScreenData::OutlineForm(page), Message::OutlineForm(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::OutlineForm)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(outline_form::ParentMessage::Submit(outline)) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::Submit(outline)))
                }
            },
            (ScreenData::StoryDisplay(page), Message::StoryDisplay(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::StoryDisplay)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(story_display::ParentMessage::NewStory) => {
                    Task::done(ScreenMessage::ScreenMessage(Message::NewStory))
                }
            },
            _ => Task::none(),
        }
    }
}
