//! egui rendering, one module per page plus shared pieces

pub mod components;
mod decode_page;
mod encode_page;
mod home_page;
pub mod theme;

pub use decode_page::render_decode_page;
pub use encode_page::render_encode_page;
pub use home_page::render_home_page;
