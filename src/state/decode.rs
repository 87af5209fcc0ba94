//! Decode view state

use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::api::StegoClient;
use crate::image_file::{ImageFile, ImageFileError};
use crate::method::StegoMethod;
use crate::preview::SelectedImage;
use crate::state::submission::{Outcome, Settled};
use crate::state::StateEvent;

/// How long the "Copied!" indicator stays on
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Decode view state
#[derive(Default)]
pub struct DecodeState {
    /// Method the next submission will use
    pub method: StegoMethod,
    selected: Option<SelectedImage>,
    outcome: Outcome<String>,
    notice: Option<String>,
    /// When the extracted message was last copied
    copied_at: Option<Instant>,
}

impl DecodeState {
    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.outcome.is_pending()
    }

    /// Extracted message from the last successful request
    pub fn message(&self) -> Option<&str> {
        self.outcome.success().map(String::as_str)
    }

    pub fn error(&self) -> Option<&str> {
        self.notice.as_deref().or_else(|| self.outcome.failure())
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.selected.is_some()
    }

    /// Apply a file selection; a rejected file only raises a notice
    pub fn select(&mut self, ctx: &egui::Context, loaded: Result<ImageFile, ImageFileError>) {
        let file = match loaded {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Rejected decode input: {}", e);
                self.notice = Some(e.to_string());
                return;
            }
        };

        tracing::debug!("Selected {} for decoding ({} bytes)", file.upload_name(), file.len());
        self.selected = Some(SelectedImage::new(ctx, file));
        self.notice = None;
        self.copied_at = None;
        if !self.outcome.is_pending() {
            self.outcome = Outcome::Idle;
        }
    }

    pub fn select_path(&mut self, ctx: &egui::Context, path: &Path) {
        self.select(ctx, ImageFile::from_path(path));
    }

    /// Ask the service for the message hidden in the selected image.
    ///
    /// Does nothing while a request is already in flight.
    pub fn submit(&mut self, client: &StegoClient) -> Option<StateEvent> {
        if self.outcome.is_pending() {
            return None;
        }

        let Some(selected) = &self.selected else {
            self.notice = Some("Please select an encoded image".to_string());
            return None;
        };

        self.notice = None;
        self.copied_at = None;

        let client = client.clone();
        let file = selected.file.clone();
        let method = self.method;

        self.outcome
            .start(async move { client.decode(&file, method).await });

        Some(StateEvent::StatusMessage(format!(
            "Decoding with {}...",
            method.label()
        )))
    }

    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<StateEvent> {
        let mut events = Vec::new();

        match self.outcome.poll(ctx) {
            Some(Settled::Succeeded) => {
                let chars = self.message().map(|m| m.chars().count()).unwrap_or(0);
                if chars == 0 {
                    events.push(StateEvent::StatusMessage(
                        "No hidden message found".to_string(),
                    ));
                } else {
                    events.push(StateEvent::StatusMessage(
                        "Message decoded successfully".to_string(),
                    ));
                }
                events.push(StateEvent::LogInfo(format!("Decoded message ({} chars)", chars)));
            }
            Some(Settled::Failed(msg)) => {
                events.push(StateEvent::LogError(format!("Decoding failed: {}", msg)));
                events.push(StateEvent::StatusMessage(format!("Error: {}", msg)));
            }
            None => {}
        }

        events
    }

    /// Copy the extracted message to the clipboard
    pub fn copy(&mut self, ctx: &egui::Context) -> Option<StateEvent> {
        let text = self.message().filter(|m| !m.is_empty())?.to_string();
        ctx.copy_text(text);
        self.copied_at = Some(Instant::now());
        Some(StateEvent::StatusMessage(
            "Message copied to clipboard".to_string(),
        ))
    }

    /// Whether the "Copied!" indicator is on at `now`; clears it once expired
    pub fn copied(&mut self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) < COPY_FEEDBACK => true,
            Some(_) => {
                self.copied_at = None;
                false
            }
            None => false,
        }
    }

    /// Time left before the indicator turns off, for repaint scheduling
    pub fn copied_remaining(&self, now: Instant) -> Option<Duration> {
        self.copied_at
            .map(|at| COPY_FEEDBACK.saturating_sub(now.saturating_duration_since(at)))
    }

    pub fn reset(&mut self) {
        *self = Self {
            method: self.method,
            ..Self::default()
        };
    }
}
