#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from storybook for tests
pub use storybook::{
    AppState, GenerationError, GenerationOptions, LoadingProgress, Page, Session, Story,
    StoryNavigator,
};
