//! Shared UI components

use std::path::PathBuf;

use eframe::egui::{self, RichText, Vec2};

use crate::app::StegoApp;
use crate::method::StegoMethod;
use crate::preview::{PreviewHandle, SelectedImage};
use crate::ui::theme::Theme;
use crate::util::format_size;

/// Image types offered by the file dialogs
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp"];

/// Render a titled frame around a block of page content
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(theme.bg_medium)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(8)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(15.0).strong().color(theme.text_primary));
            ui.add_space(8.0);
            add_contents(ui)
        })
        .inner
}

/// Back-to-home button; returns true when clicked
pub fn render_back_button(ui: &mut egui::Ui, theme: &Theme) -> bool {
    let button = egui::Button::new(RichText::new("< Back to Home").color(theme.text_secondary))
        .fill(egui::Color32::TRANSPARENT)
        .min_size(Vec2::new(120.0, 28.0));
    ui.add(button).clicked()
}

/// Red banner for validation notices and request failures
pub fn render_error(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    egui::Frame::new()
        .fill(theme.error.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, theme.error))
        .corner_radius(6)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(theme.error));
        });
}

/// Green banner shown after a successful request
pub fn render_success(ui: &mut egui::Ui, theme: &Theme, message: &str) {
    egui::Frame::new()
        .fill(theme.success.gamma_multiply(0.15))
        .stroke(egui::Stroke::new(1.0, theme.success))
        .corner_radius(6)
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(message).color(theme.success).strong());
        });
}

/// Method dropdown with the selected method's description underneath
pub fn render_method_picker(
    ui: &mut egui::Ui,
    theme: &Theme,
    id: &str,
    method: &mut StegoMethod,
    enabled: bool,
) {
    ui.add_enabled_ui(enabled, |ui| {
        egui::ComboBox::from_id_salt(id)
            .selected_text(method.label())
            .width(260.0)
            .show_ui(ui, |ui| {
                for m in StegoMethod::all() {
                    ui.selectable_value(method, *m, m.label());
                }
            });
    });
    ui.label(
        RichText::new(method.description())
            .size(12.0)
            .color(theme.text_muted),
    );
}

/// Drop zone plus Browse button.
///
/// Returns true when Browse was clicked. Dropped files are collected by
/// the app, which routes them to the active view.
pub fn render_file_picker(
    ui: &mut egui::Ui,
    theme: &Theme,
    selected: Option<&SelectedImage>,
    enabled: bool,
) -> bool {
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let border = if hovering { theme.accent } else { theme.border };

    let mut browse = false;
    egui::Frame::new()
        .fill(theme.bg_dark)
        .stroke(egui::Stroke::new(if hovering { 2.0 } else { 1.0 }, border))
        .corner_radius(8)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                match selected {
                    Some(sel) => {
                        let name = sel.file.name().unwrap_or("(unnamed image)");
                        ui.label(RichText::new(name).color(theme.text_primary).strong());
                        ui.label(
                            RichText::new(format!(
                                "{} | {}",
                                sel.file.mime(),
                                format_size(sel.file.len() as u64)
                            ))
                            .size(12.0)
                            .color(theme.text_muted),
                        );
                    }
                    None => {
                        ui.label(
                            RichText::new("Drop an image here or browse for one")
                                .color(theme.text_secondary),
                        );
                        ui.label(
                            RichText::new("PNG, JPEG or BMP")
                                .size(12.0)
                                .color(theme.text_muted),
                        );
                    }
                }
                ui.add_space(6.0);
                let label = if selected.is_some() { "Change..." } else { "Browse..." };
                browse = ui.add_enabled(enabled, egui::Button::new(label)).clicked();
            });
        });
    browse
}

/// Show a preview texture scaled to fit
pub fn render_preview(ui: &mut egui::Ui, theme: &Theme, preview: &PreviewHandle) {
    let [w, h] = preview.source_size();
    ui.vertical_centered(|ui| {
        ui.add(
            egui::Image::new(preview.texture())
                .max_height(280.0)
                .max_width(ui.available_width()),
        );
        ui.label(
            RichText::new(format!("{} x {} px", w, h))
                .size(11.0)
                .color(theme.text_muted),
        );
    });
}

/// Native open dialog filtered to images
pub fn pick_image_file(title: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Native save dialog preset to `file_name`
pub fn pick_save_path(file_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save encoded image")
        .set_file_name(file_name)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .save_file()
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut StegoApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();
    let docs_url = app.client.docs_url();
    let mut open = true;

    egui::Window::new("About Stego Toolkit")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([320.0, 240.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(
                    RichText::new("Stego Toolkit")
                        .size(24.0)
                        .strong()
                        .color(theme.accent),
                );
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Hide and extract messages in images")
                        .color(theme.text_secondary),
                );
                ui.label(
                    RichText::new(format!("Service: {}", app.client.base_url()))
                        .size(12.0)
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                if ui.link("Service API docs").clicked() {
                    if let Err(e) = open::that(&docs_url) {
                        tracing::warn!("Failed to open {}: {}", docs_url, e);
                    }
                }

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }
                ui.add_space(8.0);
            });
        });

    if !open {
        app.ui.show_about_dialog = false;
    }
}
