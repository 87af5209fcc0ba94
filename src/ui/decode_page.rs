//! Decode page UI rendering

use std::time::Instant;

use eframe::egui::{self, RichText, Vec2};

use crate::app::StegoApp;
use crate::state::Page;
use crate::ui::components::{
    pick_image_file, render_back_button, render_error, render_file_picker, render_method_picker,
    render_preview, render_section_frame, render_success,
};
use crate::util::char_count_label;

/// Render the decode page
pub fn render_decode_page(app: &mut StegoApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();
    let ctx = ui.ctx().clone();

    if render_back_button(ui, &theme) {
        app.navigate(Page::Home);
        return;
    }

    ui.add_space(8.0);
    ui.label(
        RichText::new("Decode Message")
            .size(24.0)
            .strong()
            .color(theme.text_primary),
    );
    ui.label(
        RichText::new("Extract a hidden message from an encoded image")
            .color(theme.text_secondary),
    );
    ui.add_space(12.0);

    let submitting = app.decode.is_submitting();

    render_section_frame(ui, &theme, "Method", |ui| {
        render_method_picker(ui, &theme, "decode_method", &mut app.decode.method, !submitting);
        ui.label(
            RichText::new("Use the same method that was used to encode the image")
                .size(12.0)
                .italics()
                .color(theme.accent_alt),
        );
    });

    ui.add_space(12.0);

    let mut browse = false;
    render_section_frame(ui, &theme, "Encoded Image", |ui| {
        browse = render_file_picker(ui, &theme, app.decode.selected(), !submitting);
        if let Some(preview) = app.decode.selected().and_then(|s| s.preview.as_ref()) {
            ui.add_space(8.0);
            render_preview(ui, &theme, preview);
        }
    });
    if browse {
        if let Some(path) = pick_image_file("Select encoded image") {
            app.decode.select_path(&ctx, &path);
        }
    }

    ui.add_space(12.0);

    if let Some(error) = app.decode.error() {
        render_error(ui, &theme, error);
        ui.add_space(8.0);
    }

    let mut submit = false;
    let mut reset = false;
    ui.horizontal(|ui| {
        let label = if submitting {
            RichText::new("Decoding...")
        } else {
            RichText::new("Decode Message").strong()
        };
        let button = egui::Button::new(label.color(theme.text_primary))
            .fill(theme.accent_muted)
            .min_size(Vec2::new(160.0, 34.0));
        submit = ui.add_enabled(app.decode.can_submit(), button).clicked();
        if submitting {
            ui.spinner();
        }

        if app.decode.selected().is_some() && !submitting && ui.button("Reset").clicked() {
            reset = true;
        }
    });

    if submit {
        if let Some(event) = app.decode.submit(&app.client) {
            app.handle_events(vec![event]);
        }
    }
    if reset {
        app.decode.reset();
        app.status_message = "Decode form cleared".to_string();
    }

    let Some(message) = app.decode.message().map(str::to_string) else {
        return;
    };

    ui.add_space(12.0);
    render_success(ui, &theme, "Message decoded successfully!");
    ui.add_space(8.0);

    let now = Instant::now();
    let copied = app.decode.copied(now);
    if let Some(remaining) = app.decode.copied_remaining(now) {
        ctx.request_repaint_after(remaining);
    }

    let mut copy = false;
    render_section_frame(ui, &theme, "Extracted Message", |ui| {
        let mut shown = message.as_str();
        ui.add(
            egui::TextEdit::multiline(&mut shown)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(char_count_label(&message))
                    .size(11.0)
                    .color(theme.text_muted),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if copied { "Copied!" } else { "Copy" };
                copy = ui
                    .add_enabled(!message.is_empty(), egui::Button::new(label))
                    .clicked();
            });
        });
    });

    if copy {
        if let Some(event) = app.decode.copy(&ctx) {
            app.handle_events(vec![event]);
        }
    }
}
