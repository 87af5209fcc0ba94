//! Encode view state

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::api::{EncodedImage, StegoClient};
use crate::image_file::{ImageFile, ImageFileError};
use crate::method::StegoMethod;
use crate::preview::SelectedImage;
use crate::state::submission::{Outcome, Settled};
use crate::state::StateEvent;

/// Download name used when the original file name is unknown
const FALLBACK_FILE_NAME: &str = "image.png";

/// Encode view state
#[derive(Default)]
pub struct EncodeState {
    /// Method the next submission will use
    pub method: StegoMethod,
    /// Secret message, edited freely
    pub message: String,
    /// Selected image and its preview
    selected: Option<SelectedImage>,
    /// Current or last request
    outcome: Outcome<EncodedImage>,
    /// Validation error raised before any request
    notice: Option<String>,
}

impl EncodeState {
    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.outcome.is_pending()
    }

    /// Encoded payload from the last successful request
    pub fn result(&self) -> Option<&EncodedImage> {
        self.outcome.success()
    }

    /// Error text to show: a validation notice, else the request failure
    pub fn error(&self) -> Option<&str> {
        self.notice.as_deref().or_else(|| self.outcome.failure())
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.selected.is_some() && !self.message.trim().is_empty()
    }

    /// Whether there is anything for reset to clear
    pub fn has_input(&self) -> bool {
        self.selected.is_some() || !self.message.is_empty()
    }

    /// Apply a file selection.
    ///
    /// A rejected file only raises a notice; the current selection, preview
    /// and result stay as they were.
    pub fn select(&mut self, ctx: &egui::Context, loaded: Result<ImageFile, ImageFileError>) {
        let file = match loaded {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Rejected encode input: {}", e);
                self.notice = Some(e.to_string());
                return;
            }
        };

        tracing::debug!("Selected {} for encoding ({} bytes)", file.upload_name(), file.len());
        // Replacing the selection drops the old preview texture
        self.selected = Some(SelectedImage::new(ctx, file));
        self.notice = None;
        if !self.outcome.is_pending() {
            self.outcome = Outcome::Idle;
        }
    }

    /// Read a file from disk and select it
    pub fn select_path(&mut self, ctx: &egui::Context, path: &Path) {
        self.select(ctx, ImageFile::from_path(path));
    }

    /// Submit the selected image and message to the service.
    ///
    /// Does nothing while a request is already in flight. Validation failures
    /// set a notice and never reach the network.
    pub fn submit(&mut self, client: &StegoClient) -> Option<StateEvent> {
        if self.outcome.is_pending() {
            return None;
        }

        let Some(selected) = &self.selected else {
            self.notice = Some("Please select an image".to_string());
            return None;
        };

        if self.message.trim().is_empty() {
            self.notice = Some("Please enter a message to encode".to_string());
            return None;
        }

        self.notice = None;

        let client = client.clone();
        let file = selected.file.clone();
        let message = self.message.clone();
        let method = self.method;

        self.outcome
            .start(async move { client.encode(&file, &message, method).await });

        Some(StateEvent::StatusMessage(format!(
            "Encoding with {}...",
            method.label()
        )))
    }

    /// Poll the in-flight request
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        match self.outcome.poll(ctx) {
            Some(Settled::Succeeded) => {
                let size = self.result().map(|r| r.len()).unwrap_or(0);
                events.push(StateEvent::StatusMessage(
                    "Message encoded successfully".to_string(),
                ));
                events.push(StateEvent::LogInfo(format!(
                    "Encoded image ready ({} bytes)",
                    size
                )));
            }
            Some(Settled::Failed(msg)) => {
                events.push(StateEvent::LogError(format!("Encoding failed: {}", msg)));
                events.push(StateEvent::StatusMessage(format!("Error: {}", msg)));
            }
            None => {}
        }

        events
    }

    /// File name offered when saving the encoded image
    pub fn download_filename(&self) -> String {
        download_filename(self.selected.as_ref().and_then(|s| s.file.name()))
    }

    /// Write the encoded image to `path`
    pub fn save_result(&self, path: &Path) -> std::io::Result<PathBuf> {
        let Some(result) = self.result() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No encoded image to save",
            ));
        };
        std::fs::write(path, &result.bytes)?;
        tracing::info!("Saved encoded image to {:?}", path);
        Ok(path.to_path_buf())
    }

    /// Clear the form back to its initial state, keeping the chosen method
    pub fn reset(&mut self) {
        *self = Self {
            method: self.method,
            ..Self::default()
        };
    }
}

/// `encoded_` + the original file name, or `encoded_image.png` if unknown
pub fn download_filename(original: Option<&str>) -> String {
    format!("encoded_{}", original.unwrap_or(FALLBACK_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_file::tiny_png;

    fn png(name: Option<&str>) -> Result<ImageFile, ImageFileError> {
        ImageFile::from_bytes(name.map(str::to_string), tiny_png())
    }

    fn offline_client() -> StegoClient {
        StegoClient::new("http://127.0.0.1:9").unwrap()
    }

    #[test]
    fn test_submit_without_file_is_blocked() {
        let mut state = EncodeState::default();
        state.message = "secret".to_string();

        assert!(state.submit(&offline_client()).is_none());
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("Please select an image"));
    }

    #[test]
    fn test_submit_with_blank_message_is_blocked() {
        let ctx = egui::Context::default();
        let mut state = EncodeState::default();
        state.select(&ctx, png(Some("cat.png")));
        state.message = "  \n\t ".to_string();

        assert!(!state.can_submit());
        assert!(state.submit(&offline_client()).is_none());
        assert!(!state.is_submitting());
        assert_eq!(state.error(), Some("Please enter a message to encode"));
    }

    #[test]
    fn test_rejected_file_keeps_selection() {
        let ctx = egui::Context::default();
        let mut state = EncodeState::default();
        state.select(&ctx, png(Some("cat.png")));

        state.select(
            &ctx,
            ImageFile::from_bytes(Some("notes.txt".to_string()), b"plain".to_vec()),
        );

        assert_eq!(state.error(), Some("Please select a valid image file"));
        let selected = state.selected().unwrap();
        assert_eq!(selected.file.name(), Some("cat.png"));
        assert!(selected.preview.is_some());
    }

    #[test]
    fn test_new_selection_clears_notice_and_releases_preview() {
        let ctx = egui::Context::default();
        let mut state = EncodeState::default();
        state.select(&ctx, png(Some("first.png")));
        let after_first = crate::preview::live_textures(&ctx);

        state.submit(&offline_client()); // blank message -> notice
        assert!(state.error().is_some());

        state.select(&ctx, png(Some("second.png")));
        assert!(state.error().is_none());
        assert_eq!(state.selected().unwrap().file.name(), Some("second.png"));
        assert_eq!(crate::preview::live_textures(&ctx), after_first);
    }

    #[test]
    fn test_reset_keeps_method_only() {
        let ctx = egui::Context::default();
        let before = crate::preview::live_textures(&ctx);
        let mut state = EncodeState::default();
        state.method = StegoMethod::Pattern;
        state.message = "hi".to_string();
        state.select(&ctx, png(Some("cat.png")));

        state.reset();

        assert_eq!(state.method, StegoMethod::Pattern);
        assert!(state.message.is_empty());
        assert!(state.selected().is_none());
        assert!(state.error().is_none());
        assert!(!state.has_input());
        assert_eq!(crate::preview::live_textures(&ctx), before);
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(download_filename(Some("cat.png")), "encoded_cat.png");
        assert_eq!(download_filename(None), "encoded_image.png");

        let ctx = egui::Context::default();
        let mut state = EncodeState::default();
        state.select(&ctx, png(None));
        assert_eq!(state.download_filename(), "encoded_image.png");
    }

    #[test]
    fn test_save_without_result_fails() {
        let dir = tempfile::tempdir().unwrap();
        let state = EncodeState::default();
        assert!(state.save_result(&dir.path().join("out.png")).is_err());
    }
}
