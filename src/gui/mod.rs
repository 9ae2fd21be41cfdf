mod app;
mod message;
mod screens;
mod state;
mod tasks;
mod widgets;

pub use app::{StorybookApp, run};
pub use message::{GenerationEvent, Message};
pub use state::GuiState;
