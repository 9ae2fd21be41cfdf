use async_stream::stream;
use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_editor},
};
use tokio::sync::mpsc;
use tracing::warn;

use crate::gui::{
    GuiState,
    screens::{Screen, ScreenMessage},
};

const PLACEHOLDER: &str = "Type or speak your story outline here...";

pub struct OutlineFormScreen {
    content: text_editor::Content,
    listening: bool,
    /// Shown under the editor, e.g. when dictation is unavailable.
    notice: Option<String>,
}

#[derive(Debug, Clone)]
pub enum OutlineFormMessage {
    Edit(text_editor::Action),
    ToggleDictation,
    Transcript(String),
    DictationEnded,
    Submit,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Submit(String),
}

impl OutlineFormScreen {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(outline: &str) -> Self {
        Self {
            content: text_editor::Content::with_text(outline),
            listening: false,
            notice: None,
        }
    }

    fn outline(&self) -> String {
        self.content.text()
    }
}

impl Default for OutlineFormScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for OutlineFormScreen {
    type Message = OutlineFormMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a GuiState) -> Element<'a, ScreenMessage<Self>> {
        let loading = state.session.is_loading();
        let can_submit = !loading && !self.outline().trim().is_empty();

        let editor = text_editor(&self.content)
            .placeholder(PLACEHOLDER)
            .on_action(|action| ScreenMessage::ScreenMessage(OutlineFormMessage::Edit(action)))
            .height(Length::Fixed(160.0));

        let listening = self.listening;
        let label = match (state.speech.is_available(), listening) {
            (false, _) => "Dictation unavailable",
            (true, true) => "Stop dictation",
            (true, false) => "Dictate",
        };
        let dictate = button(text(label))
            .style(move |theme, status| {
                if listening {
                    button::danger(theme, status)
                } else {
                    button::secondary(theme, status)
                }
            })
            .on_press(ScreenMessage::ScreenMessage(
                OutlineFormMessage::ToggleDictation,
            ));

        let submit = button(text(if loading {
            "Generating Story..."
        } else {
            "Generate Story"
        }))
        .padding([8.0, 16.0])
        .on_press_maybe(can_submit.then_some(ScreenMessage::ScreenMessage(
            OutlineFormMessage::Submit,
        )));

        let mut content = column![
            text("Story Outline").size(14),
            editor,
            row![container(dictate).align_right(Length::Fill)],
        ]
        .spacing(10);

        if let Some(notice) = &self.notice {
            content = content.push(text(notice.as_str()).size(14).style(text::danger));
        }

        content
            .push(container(submit).center_x(Length::Fill))
            .align_x(Center)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut GuiState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            OutlineFormMessage::Edit(action) => {
                self.content.perform(action);
                Task::none()
            }
            OutlineFormMessage::ToggleDictation => {
                let (sender, mut receiver) = mpsc::unbounded_channel();
                let on_result = Box::new(move |transcript: String| {
                    let _ = sender.send(transcript);
                });

                match state.speech.toggle(on_result) {
                    Ok(true) => {
                        self.listening = true;
                        self.notice = None;
                        let transcripts = stream! {
                            while let Some(transcript) = receiver.recv().await {
                                yield transcript;
                            }
                        };
                        Task::run(transcripts, |transcript| {
                            ScreenMessage::ScreenMessage(OutlineFormMessage::Transcript(transcript))
                        })
                        .chain(Task::done(ScreenMessage::ScreenMessage(
                            OutlineFormMessage::DictationEnded,
                        )))
                    }
                    Ok(false) => {
                        self.listening = false;
                        Task::none()
                    }
                    Err(err) => {
                        warn!(error = %err, "Dictation unavailable");
                        self.listening = false;
                        self.notice = Some(err.to_string());
                        Task::none()
                    }
                }
            }
            OutlineFormMessage::Transcript(transcript) => {
                self.content = text_editor::Content::with_text(&transcript);
                Task::none()
            }
            OutlineFormMessage::DictationEnded => {
                self.listening = state.speech.is_listening();
                Task::none()
            }
            OutlineFormMessage::Submit => {
                let outline = self.outline();
                if outline.trim().is_empty() || state.session.is_loading() {
                    return Task::none();
                }
                if self.listening {
                    state.speech.stop();
                    self.listening = false;
                }
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Submit(outline)))
            }
        }
    }
}
