use std::sync::Arc;

use iced::{
    ContentFit, Element, Length, Task,
    widget::{button, column, container, image, row, stack, text},
};
use tracing::warn;

use crate::gui::{
    GuiState,
    screens::{Screen, ScreenMessage},
    tasks,
};
use crate::models::Story;
use crate::navigator::StoryNavigator;

const ILLUSTRATION_HEIGHT: f32 = 256.0;

#[derive(Debug, Clone)]
enum Illustration {
    Loading,
    Loaded(image::Handle),
    Failed,
}

pub struct StoryDisplayScreen {
    navigator: StoryNavigator,
    illustration: Illustration,
    http: reqwest::Client,
}

#[derive(Debug, Clone)]
pub enum StoryDisplayMessage {
    Next,
    Previous,
    IllustrationLoaded {
        page: usize,
        result: Result<image::Handle, String>,
    },
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    NewStory,
}

impl StoryDisplayScreen {
    /// Opens on the first page and starts loading its illustration.
    pub fn new(story: Arc<Story>, http: reqwest::Client) -> (Self, Task<ScreenMessage<Self>>) {
        let screen = Self {
            navigator: StoryNavigator::new(story),
            illustration: Illustration::Loading,
            http,
        };
        let task = screen.load_illustration();
        (screen, task)
    }

    fn load_illustration(&self) -> Task<ScreenMessage<Self>> {
        let page = self.navigator.index();
        let url = self.navigator.current_page().image_url().to_string();
        Task::perform(tasks::fetch_image(self.http.clone(), url), move |result| {
            ScreenMessage::ScreenMessage(StoryDisplayMessage::IllustrationLoaded { page, result })
        })
    }

    fn turned(&mut self, moved: bool) -> Task<ScreenMessage<Self>> {
        if !moved {
            return Task::none();
        }
        self.illustration = Illustration::Loading;
        self.load_illustration()
    }

    fn illustration_view(&self) -> Element<'_, ScreenMessage<Self>> {
        match &self.illustration {
            Illustration::Loaded(handle) => image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(ILLUSTRATION_HEIGHT))
                .content_fit(ContentFit::Cover)
                .into(),
            Illustration::Loading => placeholder("Drawing the picture..."),
            Illustration::Failed => placeholder("The illustration could not be loaded."),
        }
    }
}

fn placeholder(label: &str) -> Element<'_, ScreenMessage<StoryDisplayScreen>> {
    container(text(label))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(ILLUSTRATION_HEIGHT))
        .style(container::rounded_box)
        .into()
}

impl Screen for StoryDisplayScreen {
    type Message = StoryDisplayMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a GuiState) -> Element<'a, ScreenMessage<Self>> {
        let page = self.navigator.current_page();

        let badge = container(text(self.navigator.label()).size(14))
            .padding([4.0, 8.0])
            .style(container::rounded_box);
        let illustration = stack![
            self.illustration_view(),
            container(badge)
                .padding(8)
                .align_right(Length::Fill)
                .align_bottom(Length::Fixed(ILLUSTRATION_HEIGHT)),
        ];

        let previous = button(text("< Previous")).on_press_maybe(
            (!self.navigator.is_first())
                .then_some(ScreenMessage::ScreenMessage(StoryDisplayMessage::Previous)),
        );
        let next = button(text("Next >")).on_press_maybe(
            (!self.navigator.is_last())
                .then_some(ScreenMessage::ScreenMessage(StoryDisplayMessage::Next)),
        );
        let new_story = button(text("Create New Story"))
            .style(button::secondary)
            .on_press(ScreenMessage::ParentMessage(ParentMessage::NewStory));

        column![
            illustration,
            text(page.text()).size(18),
            row![previous, container(next).align_right(Length::Fill)],
            container(new_story).center_x(Length::Fill),
        ]
        .spacing(16)
        .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut GuiState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            StoryDisplayMessage::Next => {
                let moved = self.navigator.next();
                self.turned(moved)
            }
            StoryDisplayMessage::Previous => {
                let moved = self.navigator.previous();
                self.turned(moved)
            }
            // A late result for a page that is no longer shown is dropped.
            StoryDisplayMessage::IllustrationLoaded { page, result } => {
                if page == self.navigator.index() {
                    self.illustration = match result {
                        Ok(handle) => Illustration::Loaded(handle),
                        Err(e) => {
                            warn!(page, error = %e, "Failed to load illustration");
                            Illustration::Failed
                        }
                    };
                }
                Task::none()
            }
        }
    }
}
