//! Application state modules
//!
//! Each view owns its state struct; `StegoApp` holds one of each and drives
//! their poll methods every frame.

mod decode;
mod encode;
mod navigation;
mod submission;
mod ui;

pub use decode::{DecodeState, COPY_FEEDBACK};
pub use encode::{download_filename, EncodeState};
pub use navigation::{Navigation, Page};
pub use submission::{Outcome, Settled};
pub use ui::UiState;

/// Events that state methods return.
/// These communicate results back to StegoApp without direct mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
