//! Desktop and command-line client for an image steganography service.
//!
//! The service does the steganography; this crate collects an image and a
//! message, sends them over multipart HTTP, and presents what comes back.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod image_file;
pub mod method;
pub mod preview;
pub mod state;
pub mod task;
pub mod ui;
pub mod util;
