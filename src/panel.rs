//! Interactive panel: a name filter, a Plot button, a Quit button and the map

use crate::boundary::Boundary;
use crate::pipeline::Dataset;
use crate::render::{render_to_rgb, MapView};
use eframe::egui;
use tracing::{info, warn};

/// Window state. One map texture at most is alive at any time.
pub struct MapPanel {
    dataset: Dataset,
    boundary: Boundary,
    seed: u64,
    size: (u32, u32),
    substring: String,
    texture: Option<egui::TextureHandle>,
    error: Option<String>,
}

impl MapPanel {
    pub fn new(dataset: Dataset, boundary: Boundary, substring: impl Into<String>, seed: u64, size: (u32, u32)) -> Self {
        Self {
            dataset,
            boundary,
            seed,
            size,
            substring: substring.into(),
            texture: None,
            error: None,
        }
    }

    /// Re-filter with the current text and replace the displayed map
    fn redraw(&mut self, ctx: &egui::Context) {
        // release the previous map before drawing the next one
        self.texture = None;
        self.error = None;

        let layer = self.dataset.points(&self.substring);
        let view = MapView {
            boundary: &self.boundary,
            layer: &layer,
            schema: self.dataset.schema(),
            substring: &self.substring,
            seed: self.seed,
        };
        match render_to_rgb(self.size, &view) {
            Ok(pixels) => {
                let (width, height) = self.size;
                let image = egui::ColorImage::from_rgb([width as usize, height as usize], &pixels);
                self.texture = Some(ctx.load_texture("map", image, egui::TextureOptions::LINEAR));
                info!(substring = %self.substring, points = layer.len(), "panel redrawn");
            }
            Err(e) => {
                warn!(error = %e, "panel redraw failed");
                self.error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for MapPanel {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut plot = false;
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("name contains");
                ui.text_edit_singleline(&mut self.substring);
                plot = ui.button("Plot").clicked();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
        if plot {
            self.redraw(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            }
            if let Some(texture) = &self.texture {
                ui.add(egui::Image::new((texture.id(), texture.size_vec2())).shrink_to_fit());
            }
        });
    }
}

/// Open the panel and block until it is closed
pub fn run_panel(panel: MapPanel) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1000.0, 1000.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Settlement map",
        native_options,
        Box::new(|_cc| Ok(Box::new(panel))),
    )
}
