use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{column, container, progress_bar, text},
};

use crate::gui::{
    GuiState,
    screens::{Screen, ScreenMessage},
};

/// Shown while a story is generated. Progress comes from the session.
#[derive(Debug, Clone)]
pub struct LoadingPageScreen {
    outline: String,
}

impl LoadingPageScreen {
    pub fn new(outline: String) -> Self {
        Self { outline }
    }

    pub fn outline(&self) -> &str {
        &self.outline
    }
}

impl Screen for LoadingPageScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a GuiState) -> Element<'a, ScreenMessage<Self>> {
        let progress = state.session.progress();

        let content = column![
            text("Writing your story...").size(20),
            progress_bar(0.0..=1.0, progress.fraction()),
            text(format!("Loading {} of {}", progress.current, progress.total)),
        ]
        .spacing(16)
        .align_x(Center);

        container(content)
            .padding(16)
            .center_x(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut GuiState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
