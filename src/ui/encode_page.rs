//! Encode page UI rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::StegoApp;
use crate::state::Page;
use crate::ui::components::{
    pick_image_file, pick_save_path, render_back_button, render_error, render_file_picker,
    render_method_picker, render_preview, render_section_frame, render_success,
};
use crate::util::{char_count_label, format_size};

/// Render the encode page
pub fn render_encode_page(app: &mut StegoApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let ctx = ui.ctx().clone();

    if render_back_button(ui, &theme) {
        app.navigate(Page::Home);
        return;
    }

    ui.add_space(8.0);
    ui.label(
        RichText::new("Encode Message")
            .size(24.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.label(RichText::new("Hide a secret message inside an image").color(theme.text_secondary));
    ui.add_space(12.0);

    let submitting = app.encode.is_submitting();

    render_section_frame(ui, &theme, "Method", |ui| {
        render_method_picker(ui, &theme, "encode_method", &mut app.encode.method, !submitting);
    });

    ui.add_space(12.0);

    let mut browse = false;
    render_section_frame(ui, &theme, "Image", |ui| {
        browse = render_file_picker(ui, &theme, app.encode.selected(), !submitting);
        if let Some(preview) = app.encode.selected().and_then(|s| s.preview.as_ref()) {
            ui.add_space(8.0);
            render_preview(ui, &theme, preview);
        }
    });
    if browse {
        if let Some(path) = pick_image_file("Select image") {
            app.encode.select_path(&ctx, &path);
        }
    }

    ui.add_space(12.0);

    render_section_frame(ui, &theme, "Secret Message", |ui| {
        ui.add_enabled(
            !submitting,
            egui::TextEdit::multiline(&mut app.encode.message)
                .hint_text("Enter your secret message...")
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.label(
            RichText::new(char_count_label(&app.encode.message))
                .size(11.0)
                .color(theme.text_muted),
        );
    });

    ui.add_space(12.0);

    if let Some(error) = app.encode.error() {
        render_error(ui, &theme, error);
        ui.add_space(8.0);
    }

    let mut submit = false;
    let mut reset = false;
    ui.horizontal(|ui| {
        let label = if submitting {
            RichText::new("Encoding...")
        } else {
            RichText::new("Encode Message").strong()
        };
        let button = egui::Button::new(label.color(theme.text_primary))
            .fill(theme.accent_muted)
            .min_size(Vec2::new(160.0, 34.0));
        submit = ui.add_enabled(app.encode.can_submit(), button).clicked();
        if submitting {
            ui.spinner();
        }

        if app.encode.has_input() && !submitting && ui.button("Reset").clicked() {
            reset = true;
        }
    });

    if submit {
        if let Some(event) = app.encode.submit(&app.client) {
            app.handle_events(vec![event]);
        }
    }
    if reset {
        app.encode.reset();
        app.status_message = "Encode form cleared".to_string();
    }

    let Some(result) = app.encode.result() else {
        return;
    };

    ui.add_space(12.0);
    render_success(ui, &theme, "Message encoded successfully!");
    ui.add_space(8.0);

    let size = format_size(result.len() as u64);
    let file_name = app.encode.download_filename();
    let mut download = false;
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{} ({})", file_name, size)).color(theme.text_secondary));
        download = ui.button("Download Encoded Image").clicked();
    });

    if download {
        if let Some(path) = pick_save_path(&file_name) {
            match app.encode.save_result(&path) {
                Ok(saved) => {
                    app.status_message = format!("Saved {}", saved.display());
                }
                Err(e) => {
                    tracing::error!("Failed to save encoded image: {}", e);
                    app.status_message = format!("Error: failed to save image: {}", e);
                }
            }
        }
    }
}
