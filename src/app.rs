use eframe::egui;

use crate::api::StegoClient;
use crate::config::Config;
use crate::image_file::ImageFile;
use crate::state::{DecodeState, EncodeState, Page, StateEvent, UiState};
use crate::ui::components::render_about_dialog;
use crate::ui::theme::ThemePreset;
use crate::ui::{render_decode_page, render_encode_page, render_home_page};

/// Main application state
pub struct StegoApp {
    /// Application configuration
    pub(crate) config: Config,
    /// Client for the steganography service
    pub(crate) client: StegoClient,
    /// Status message for the status bar
    pub(crate) status_message: String,

    /// Page, theme and dialog state
    pub(crate) ui: UiState,
    pub(crate) encode: EncodeState,
    pub(crate) decode: DecodeState,
}

impl StegoApp {
    /// Create a new application instance; `api_url` is the `--api-url` flag
    pub fn new(_cc: &eframe::CreationContext<'_>, api_url: Option<&str>) -> anyhow::Result<Self> {
        let config = Config::load().unwrap_or_else(|e| {
            tracing::error!("Failed to load configuration: {}", e);
            Config::default()
        });
        Self::from_config(config, api_url)
    }

    /// Build the app from a loaded config, honoring the URL override
    pub fn from_config(config: Config, api_url: Option<&str>) -> anyhow::Result<Self> {
        let client = StegoClient::new(config.resolve_base_url(api_url))?;
        tracing::info!("Using steganography service at {}", client.base_url());

        Ok(Self::with_client(config, client))
    }

    /// Build the app around an existing client
    pub fn with_client(config: Config, client: StegoClient) -> Self {
        let ui = UiState::new(config.appearance.theme);
        Self {
            config,
            client,
            status_message: "Ready".to_string(),
            ui,
            encode: EncodeState::default(),
            decode: DecodeState::default(),
        }
    }

    pub fn current_page(&self) -> Page {
        self.ui.navigation.current()
    }

    /// Switch pages, resetting the view being left
    pub fn navigate(&mut self, to: Page) {
        let Some(left) = self.ui.navigation.navigate(to) else {
            return;
        };

        // Dropping the old state detaches any request it had in flight
        match left {
            Page::Encode => self.encode = EncodeState::default(),
            Page::Decode => self.decode = DecodeState::default(),
            Page::Home => {}
        }
        self.status_message = to.title().to_string();
    }

    /// Process events returned by state methods
    pub(crate) fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::LogError(msg) => tracing::error!("{}", msg),
                StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
            }
        }
    }

    /// Switch and persist the theme
    fn set_theme(&mut self, preset: ThemePreset) {
        if self.ui.theme_preset == preset {
            return;
        }
        self.ui.set_theme(preset);
        self.config.appearance.theme = preset;
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save configuration: {}", e);
            self.status_message = format!("Error: failed to save settings: {}", e);
        }
    }

    /// Hand files dropped on the window to the active view
    fn route_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // Only the first file counts; each view holds a single image
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        let loaded = match (&file.bytes, &file.path) {
            (Some(bytes), _) => {
                let name = (!file.name.is_empty()).then(|| file.name.clone());
                ImageFile::from_bytes(name, bytes.to_vec())
            }
            (None, Some(path)) => ImageFile::from_path(path),
            (None, None) => return,
        };

        match self.current_page() {
            Page::Encode if !self.encode.is_submitting() => self.encode.select(ctx, loaded),
            Page::Decode if !self.decode.is_submitting() => self.decode.select(ctx, loaded),
            page => tracing::debug!("Ignored dropped file on {}", page.title()),
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.label("Theme");
                    for preset in ThemePreset::all() {
                        let selected = self.ui.theme_preset == *preset;
                        if ui.radio(selected, preset.name()).clicked() {
                            self.set_theme(*preset);
                            ui.close();
                        }
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("API Docs").clicked() {
                        let url = self.client.docs_url();
                        if let Err(e) = open::that(&url) {
                            tracing::warn!("Failed to open {}: {}", url, e);
                            self.status_message = format!("Error: could not open {}", url);
                        }
                        ui.close();
                    }
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                        ui.close();
                    }
                });
            });
        });
    }

    fn render_status_bar(&self, ctx: &egui::Context) {
        let theme = &self.ui.current_theme;
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&self.status_message).color(theme.text_secondary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.client.base_url())
                            .size(11.0)
                            .color(theme.text_muted),
                    );
                });
            });
        });
    }
}

impl eframe::App for StegoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        // Poll async tasks
        let events = self.encode.poll(ctx);
        self.handle_events(events);
        let events = self.decode.poll(ctx);
        self.handle_events(events);

        self.route_dropped_files(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.current_page() {
                    Page::Home => {
                        if let Some(page) = render_home_page(ui, &self.ui.current_theme) {
                            self.navigate(page);
                        }
                    }
                    Page::Encode => render_encode_page(self, ui),
                    Page::Decode => render_decode_page(self, ui),
                });
        });

        render_about_dialog(self, ctx);
    }
}
