//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use std::io::Cursor;
use std::sync::Once;

use stego_toolkit::api::StegoClient;
use stego_toolkit::image_file::ImageFile;

pub use mock_service::{CapturedRequest, MockResponse, MockService};

static NO_PROXY: Once = Once::new();

/// Keep requests to the mock service off any configured proxy.
pub fn bypass_proxy() {
    NO_PROXY.call_once(|| {
        // SAFETY: set once before any client is built in this test binary
        unsafe {
            std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
        }
    });
}

pub fn client_for(service: &MockService) -> StegoClient {
    bypass_proxy();
    StegoClient::new(service.base_url()).expect("client")
}

/// A small valid PNG.
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 40, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn png_file(name: &str) -> ImageFile {
    ImageFile::from_bytes(Some(name.to_string()), png_bytes()).unwrap()
}
