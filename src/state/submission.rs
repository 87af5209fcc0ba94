//! Lifecycle of a single request made by a view

use eframe::egui;
use tokio::task::JoinHandle;

use crate::api::ApiError;
use crate::task::{poll_task, PollResult};

/// Where a view's request currently stands.
///
/// Exactly one of these holds at a time, so a view can never show a
/// result and a failure together.
pub enum Outcome<T> {
    /// Nothing submitted since the last selection or reset
    Idle,
    /// A request is in flight
    Pending(JoinHandle<Result<T, ApiError>>),
    /// The service returned a result
    Succeeded(T),
    /// The request failed; holds the text shown to the user
    Failed(String),
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Outcome::Idle
    }
}

/// How a pending request settled during a poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Succeeded,
    Failed(String),
}

impl<T: Send + 'static> Outcome<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Outcome::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Outcome::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Start a request, replacing whatever outcome was shown before
    pub fn start<F>(&mut self, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        *self = Outcome::Pending(tokio::spawn(request));
    }

    /// Advance a pending request if its task has finished.
    ///
    /// Returns `Some` only on the poll that observes completion.
    pub fn poll(&mut self, ctx: &egui::Context) -> Option<Settled> {
        let Outcome::Pending(handle) = self else {
            return None;
        };

        match poll_task(handle) {
            PollResult::Pending => {
                ctx.request_repaint();
                None
            }
            PollResult::Complete(Ok(Ok(value))) => {
                *self = Outcome::Succeeded(value);
                Some(Settled::Succeeded)
            }
            PollResult::Complete(Ok(Err(e))) => {
                let msg = e.to_string();
                *self = Outcome::Failed(msg.clone());
                Some(Settled::Failed(msg))
            }
            PollResult::Complete(Err(e)) => {
                let msg = format!("Request task failed: {}", e);
                *self = Outcome::Failed(msg.clone());
                Some(Settled::Failed(msg))
            }
        }
    }
}
