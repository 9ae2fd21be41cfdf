//! Dictation input.
//!
//! Speech recognition is a host capability. The application only sees this
//! trait; hosts without dictation get [`UnavailableSpeech`] and users type
//! their outline instead.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("Speech recognition is not supported on this platform.")]
    Unsupported,
}

/// Receives the full transcript recognised so far.
pub type TranscriptCallback = Box<dyn FnMut(String) + Send>;

pub trait SpeechInput: Send {
    fn is_available(&self) -> bool;

    fn is_listening(&self) -> bool;

    fn start(&mut self, on_result: TranscriptCallback) -> Result<(), SpeechError>;

    fn stop(&mut self);

    /// Stop when listening, start otherwise. Returns whether it is now listening.
    fn toggle(&mut self, on_result: TranscriptCallback) -> Result<bool, SpeechError> {
        if self.is_listening() {
            self.stop();
            Ok(false)
        } else {
            self.start(on_result)?;
            Ok(true)
        }
    }
}

/// Used where the host offers no speech recognition.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableSpeech;

impl SpeechInput for UnavailableSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn is_listening(&self) -> bool {
        false
    }

    fn start(&mut self, _on_result: TranscriptCallback) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Replays canned transcripts as soon as it starts.
    #[derive(Default)]
    struct Replay {
        transcripts: Vec<String>,
        listening: bool,
    }

    impl SpeechInput for Replay {
        fn is_available(&self) -> bool {
            true
        }

        fn is_listening(&self) -> bool {
            self.listening
        }

        fn start(&mut self, mut on_result: TranscriptCallback) -> Result<(), SpeechError> {
            self.listening = true;
            for transcript in &self.transcripts {
                on_result(transcript.clone());
            }
            Ok(())
        }

        fn stop(&mut self) {
            self.listening = false;
        }
    }

    #[test]
    fn test_unavailable_speech() {
        let mut speech = UnavailableSpeech;
        assert!(!speech.is_available());
        let err = speech.toggle(Box::new(|_| {})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Speech recognition is not supported on this platform."
        );
        assert!(!speech.is_listening());
    }

    #[test]
    fn test_toggle_replaces_transcript() {
        let outline = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&outline);
        let mut speech = Replay {
            transcripts: vec!["a dragon".into(), "a dragon who bakes".into()],
            listening: false,
        };

        let listening = speech
            .toggle(Box::new(move |text| *sink.lock().unwrap() = text))
            .unwrap();
        assert!(listening);
        assert_eq!(*outline.lock().unwrap(), "a dragon who bakes");

        assert!(!speech.toggle(Box::new(|_| {})).unwrap());
    }
}
