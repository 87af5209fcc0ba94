//! Preview textures for selected images.
//!
//! A [`PreviewHandle`] owns the GPU texture showing a selected image. egui
//! frees a texture once its last handle is dropped, so the views release a
//! preview simply by dropping the [`SelectedImage`] that holds it: on a new
//! selection, on reset, and when the view is torn down.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};

use crate::image_file::ImageFile;

/// Largest edge of a preview texture, in pixels
const MAX_PREVIEW_EDGE: u32 = 1024;

/// A live preview texture
pub struct PreviewHandle {
    texture: TextureHandle,
    /// Dimensions of the source image before downscaling
    source_size: [u32; 2],
}

impl PreviewHandle {
    /// Decode `file` and upload it as a texture.
    ///
    /// Returns `None` when the image cannot be decoded locally; the file can
    /// still be sent to the service.
    pub fn load(ctx: &egui::Context, file: &ImageFile) -> Option<Self> {
        let decoded = match image::load_from_memory(file.bytes()) {
            Ok(img) => img,
            Err(e) => {
                tracing::debug!("No preview for {}: {}", file.upload_name(), e);
                return None;
            }
        };

        let source_size = [decoded.width(), decoded.height()];
        let scaled = if source_size[0] > MAX_PREVIEW_EDGE || source_size[1] > MAX_PREVIEW_EDGE {
            decoded.thumbnail(MAX_PREVIEW_EDGE, MAX_PREVIEW_EDGE)
        } else {
            decoded
        };

        let rgba = scaled.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture(
            format!("preview:{}", file.upload_name()),
            color_image,
            TextureOptions::LINEAR,
        );

        Some(Self {
            texture,
            source_size,
        })
    }

    pub fn texture(&self) -> &TextureHandle {
        &self.texture
    }

    pub fn source_size(&self) -> [u32; 2] {
        self.source_size
    }
}

/// A validated image together with its preview, if one could be made
pub struct SelectedImage {
    pub file: ImageFile,
    pub preview: Option<PreviewHandle>,
}

impl SelectedImage {
    pub fn new(ctx: &egui::Context, file: ImageFile) -> Self {
        let preview = PreviewHandle::load(ctx, &file);
        Self { file, preview }
    }
}

/// Number of textures currently allocated in `ctx`
pub fn live_textures(ctx: &egui::Context) -> usize {
    ctx.tex_manager().read().num_allocated()
}
