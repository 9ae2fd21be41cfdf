use iced::{Element, Task, Theme};
use tracing::{info, warn};

use crate::client::GeminiClient;
use crate::config::Config;
use crate::gui::{
    GuiState, Message,
    screens::{Screen, ScreenData, ScreenMessage},
    tasks,
    widgets::layout,
};
use crate::story::GenerationOptions;

pub struct StorybookApp {
    screen: ScreenData,
    state: GuiState,
}

fn into_root(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

impl StorybookApp {
    pub fn new(
        generator: GeminiClient,
        options: GenerationOptions,
        background_url: String,
    ) -> (Self, Task<Message>) {
        let state = GuiState::new(generator, options);
        let background = Task::perform(
            tasks::fetch_image(state.http.clone(), background_url),
            Message::BackgroundLoaded,
        );

        (
            Self {
                screen: ScreenData::default(),
                state,
            },
            background,
        )
    }

    pub fn title(&self) -> String {
        "A Story from Today".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BackgroundLoaded(Ok(handle)) => {
                self.state.background = Some(handle);
                Task::none()
            }
            Message::BackgroundLoaded(Err(e)) => {
                warn!(error = %e, "Background illustration unavailable");
                Task::none()
            }
            message => self.screen.update(message, &mut self.state).map(into_root),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        layout(
            self.state.background.as_ref(),
            self.state.session.error(),
            self.screen.view(&self.state).map(into_root),
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Launch the desktop storybook. Blocks until the window is closed.
pub fn run(config: Config) -> anyhow::Result<()> {
    let generator = GeminiClient::from_config(&config)?;
    if !generator.has_api_key() {
        warn!("No API key configured; story generation will fail until one is set");
    }
    let options = config.generation_options();
    let background_url = config.background_url.clone();

    info!(model = generator.model(), "Starting storybook");

    iced::application(
        move || StorybookApp::new(generator.clone(), options.clone(), background_url.clone()),
        StorybookApp::update,
        StorybookApp::view,
    )
    .title(StorybookApp::title)
    .theme(StorybookApp::theme)
    .window_size((900.0, 760.0))
    .run()
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
