//! Landing page

use eframe::egui::{self, Color32, RichText, Sense};

use crate::method::StegoMethod;
use crate::state::Page;
use crate::ui::theme::Theme;

/// Render the home page; returns the view the user picked, if any
pub fn render_home_page(ui: &mut egui::Ui, theme: &Theme) -> Option<Page> {
    let mut picked = None;

    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(
            RichText::new("Image Steganography Toolkit")
                .size(28.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(6.0);
        ui.label(
            RichText::new(
                "Hide secret messages inside images using steganographic techniques.",
            )
            .color(theme.text_secondary),
        );
    });

    ui.add_space(24.0);

    let card_width = ((ui.available_width() - 16.0) / 2.0).max(200.0);
    ui.horizontal(|ui| {
        if render_card(
            ui,
            theme,
            card_width,
            theme.accent,
            "Encode Message",
            "Hide your secret message inside an image using one of the steganographic methods",
        ) {
            picked = Some(Page::Encode);
        }
        ui.add_space(16.0);
        if render_card(
            ui,
            theme,
            card_width,
            theme.accent_alt,
            "Decode Message",
            "Extract hidden messages from encoded images using the matching decoding method",
        ) {
            picked = Some(Page::Decode);
        }
    });

    ui.add_space(24.0);

    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(8)
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new("Available Methods")
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.add_space(8.0);

            egui::Grid::new("methods_grid")
                .num_columns(2)
                .spacing([24.0, 10.0])
                .show(ui, |ui| {
                    for method in StegoMethod::all() {
                        ui.label(RichText::new(method.label()).strong().color(theme.accent));
                        ui.label(RichText::new(method.description()).color(theme.text_secondary));
                        ui.end_row();
                    }
                });
        });

    picked
}

/// A clickable card; returns true when clicked
fn render_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    width: f32,
    accent: Color32,
    title: &str,
    blurb: &str,
) -> bool {
    let response = egui::Frame::new()
        .fill(theme.bg_medium)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .corner_radius(10)
        .inner_margin(egui::Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(width - 40.0);
            ui.set_min_height(110.0);
            ui.label(RichText::new(title).size(20.0).strong().color(accent));
            ui.add_space(8.0);
            ui.label(RichText::new(blurb).color(theme.text_secondary));
            ui.add_space(8.0);
            ui.label(RichText::new("Get started >").color(accent));
        })
        .response
        .interact(Sense::click());

    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            10,
            egui::Stroke::new(2.0, accent),
            egui::StrokeKind::Inside,
        );
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response.clicked()
}
