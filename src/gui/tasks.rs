//! Async work started from the GUI.

use async_stream::stream;
use futures_util::Stream;
use iced::widget::image;
use tokio::sync::mpsc;
use tracing::debug;

use crate::client::GeminiClient;
use crate::gui::message::GenerationEvent;
use crate::story::{GenerationError, GenerationOptions, generate_story};

/// Run one generation, yielding its progress and then its outcome.
pub fn generate(
    generator: GeminiClient,
    options: GenerationOptions,
    outline: String,
) -> impl Stream<Item = GenerationEvent> + Send + 'static {
    stream! {
        let (sender, mut receiver) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            generate_story(&generator, &outline, &options, move |progress| {
                let _ = sender.send(progress);
            })
            .await
        });

        // Ends once the generation drops its progress callback.
        while let Some(progress) = receiver.recv().await {
            yield GenerationEvent::Progress(progress);
        }

        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(GenerationError::Service(format!("generation task failed: {e}"))),
        };
        yield GenerationEvent::Finished(result);
    }
}

/// Download an illustration for display.
pub async fn fetch_image(http: reqwest::Client, url: String) -> Result<image::Handle, String> {
    debug!(%url, "Fetching illustration");
    let response = http
        .get(&url)
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| e.to_string())?;
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(image::Handle::from_bytes(bytes.to_vec()))
}
