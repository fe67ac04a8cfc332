//! GUI application for placing landmarks on a photograph and scoring them.
//!
//! Run with: cargo run --features gui --bin facial-harmony-gui

use eframe::egui;
use facial_harmony::logging::{init_tracing, LogConfig};
use facial_harmony::{
    evaluate, EvaluationReport, ImageSize, LandmarkSet, Point, DEFAULT_CSV_FILE_NAME,
};
use std::path::PathBuf;
use tracing::{info, warn};

const MARKER_RADIUS: f32 = 5.0;

fn main() -> eframe::Result<()> {
    init_tracing(&LogConfig::default());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1024.0, 768.0]),
        ..Default::default()
    };

    eframe::run_native(
        "facial-harmony - Análisis de armonía facial",
        options,
        Box::new(|cc| Ok(Box::new(HarmonyApp::new(cc)))),
    )
}

struct HarmonyApp {
    // Image state
    texture: Option<egui::TextureHandle>,
    image_path: Option<PathBuf>,

    // Landmarks for the current image; dimensions fixed when the image loads
    landmarks: Option<LandmarkSet>,

    // Results
    report: Option<EvaluationReport>,
    status: String,
}

impl HarmonyApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            texture: None,
            image_path: None,
            landmarks: None,
            report: None,
            status: "Abre una imagen para comenzar".to_string(),
        }
    }

    fn load_image(&mut self, ctx: &egui::Context, path: PathBuf) {
        let img = match image::open(&path) {
            Ok(img) => img,
            Err(e) => {
                self.status = format!("No se pudo cargar la imagen: {}", e);
                return;
            }
        };

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let size = match ImageSize::new(width, height) {
            Ok(size) => size,
            Err(e) => {
                self.status = e.to_string();
                return;
            }
        };

        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([width as usize, height as usize], rgba.as_raw());
        self.texture = Some(ctx.load_texture("photo", color_image, Default::default()));
        self.landmarks = Some(LandmarkSet::new(size));
        self.report = None;
        self.status = format!("Cargada: {}", path.display());
        info!(path = %path.display(), width, height, "Image loaded");
        self.image_path = Some(path);
    }

    fn place_point(&mut self, normalized: Point) {
        let Some(ref mut set) = self.landmarks else {
            return;
        };
        match set.record(normalized) {
            Ok(landmark) => {
                info!(landmark = landmark.index(), x = normalized.x, y = normalized.y, "Landmark placed");
                self.report = None;
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    fn undo(&mut self) {
        if let Some(ref mut set) = self.landmarks {
            set.pop();
            self.report = None;
        }
    }

    fn reset(&mut self) {
        if let Some(ref mut set) = self.landmarks {
            set.clear();
        }
        self.report = None;
    }

    fn calculate(&mut self) {
        let Some(ref set) = self.landmarks else {
            return;
        };
        match evaluate(set) {
            Ok(report) => {
                self.status = format!("Puntaje de armonía: {:.2}", report.aggregate_score());
                self.report = Some(report);
            }
            Err(e) => {
                warn!(error = %e, "Evaluation failed");
                self.status = e.to_string();
                self.report = None;
            }
        }
    }

    fn download_csv(&mut self) {
        let Some(ref report) = self.report else {
            return;
        };
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name(DEFAULT_CSV_FILE_NAME)
            .save_file()
        else {
            return;
        };
        self.status = match report.save_csv(&path) {
            Ok(()) => format!("CSV guardado: {}", path.display()),
            Err(e) => format!("No se pudo guardar el CSV: {}", e),
        };
    }

    fn show_image(&mut self, ui: &mut egui::Ui) {
        let Some(ref texture) = self.texture else {
            ui.centered_and_justified(|ui| {
                ui.heading("Arrastra una imagen o usa Archivo > Abrir");
            });
            return;
        };

        // Scale to fit
        let available_size = ui.available_size();
        let texture_size = texture.size_vec2();
        let scale = (available_size.x / texture_size.x)
            .min(available_size.y / texture_size.y)
            .min(1.0);
        let display_size = texture_size * scale;

        let (rect, response) = ui.allocate_exact_size(display_size, egui::Sense::click());
        let painter = ui.painter_at(rect);
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, egui::Color32::WHITE);

        if let Some(ref set) = self.landmarks {
            for (i, p) in set.points().iter().enumerate() {
                let pos = egui::pos2(
                    rect.min.x + p.x as f32 * rect.width(),
                    rect.min.y + p.y as f32 * rect.height(),
                );
                painter.circle_filled(pos, MARKER_RADIUS, egui::Color32::RED);
                painter.text(
                    pos + egui::vec2(MARKER_RADIUS + 2.0, -MARKER_RADIUS),
                    egui::Align2::LEFT_BOTTOM,
                    (i + 1).to_string(),
                    egui::FontId::proportional(13.0),
                    egui::Color32::YELLOW,
                );
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let normalized = Point::new(
                    ((pos.x - rect.min.x) / rect.width()) as f64,
                    ((pos.y - rect.min.y) / rect.height()) as f64,
                );
                self.place_point(normalized);
            }
        }
    }
}

impl eframe::App for HarmonyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Archivo", |ui| {
                    if ui.button("Abrir imagen...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Imágenes", &["png", "jpg", "jpeg", "bmp", "gif"])
                            .pick_file()
                        {
                            self.load_image(ctx, path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Salir").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        egui::SidePanel::left("controls").min_width(300.0).show(ctx, |ui| {
            ui.heading("Puntos");
            ui.separator();

            let (placed, complete, prompt) = match self.landmarks {
                Some(ref set) => (set.len(), set.is_complete(), set.prompt()),
                None => (0, false, "Abre una imagen".to_string()),
            };
            ui.label(prompt);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.add_enabled(placed > 0, egui::Button::new("Deshacer")).clicked() {
                    self.undo();
                }
                if ui.add_enabled(placed > 0, egui::Button::new("Reiniciar")).clicked() {
                    self.reset();
                }
            });
            ui.add_space(8.0);

            if ui.add_enabled(complete, egui::Button::new("CALCULAR")).clicked() {
                self.calculate();
            }
            if self.report.is_some() && ui.button("Descargar CSV").clicked() {
                self.download_csv();
            }
            ui.add_space(16.0);

            ui.heading("Estado");
            ui.separator();
            if let Some(ref path) = self.image_path {
                ui.label(format!("Imagen: {}", path.display()));
            }
            ui.label(&self.status);

            if let Some(ref report) = self.report {
                ui.add_space(16.0);
                ui.heading("Resultados");
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(report.to_text());
                });
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_image(ui);
        });

        // Handle drag and drop
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if let Some(path) = dropped.into_iter().next() {
            self.load_image(ctx, path);
        }
    }
}
