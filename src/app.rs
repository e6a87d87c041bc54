//! Plot window: scatter layer for the point set, closed polyline for the hull

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use tracing::info;

use crate::core::Scene;
use crate::theme::{colors, plot_visuals};

pub const WINDOW_TITLE: &str = "Points and Convex Hull";

const POINT_RADIUS: f32 = 3.0;
const HULL_STROKE_WIDTH: f32 = 2.0;

/// Viewer app. The scene is loaded before the window opens and never
/// changes afterwards; every frame just redraws it.
pub struct HullApp {
    scene: Scene,
    /// Closed polygon coordinates, precomputed once (hull length + 1,
    /// last == first; empty when the scene has no hull)
    hull_outline: Vec<[f64; 2]>,
}

impl HullApp {
    pub fn new(cc: &eframe::CreationContext<'_>, scene: Scene) -> Self {
        cc.egui_ctx.set_visuals(plot_visuals());

        info!(
            points = scene.points.len(),
            hull_vertices = scene.hull.len(),
            "opening viewer"
        );

        let hull_outline = scene.closed_hull();
        Self { scene, hull_outline }
    }

    fn render_plot(&self, ui: &mut egui::Ui) {
        // data_aspect(1.0): one input unit spans the same screen length
        // on both axes
        let plot = Plot::new("hull_plot")
            .data_aspect(1.0)
            .x_axis_label("X")
            .y_axis_label("Y")
            .legend(Legend::default());

        plot.show(ui, |plot_ui| {
            if !self.scene.points.is_empty() {
                plot_ui.points(
                    Points::new(PlotPoints::from(self.scene.scatter_coords()))
                        .name("Points")
                        .color(colors::POINTS)
                        .radius(POINT_RADIUS)
                        .filled(true),
                );
            }

            // empty hull: no polyline, no legend entry
            if !self.hull_outline.is_empty() {
                plot_ui.line(
                    Line::new(PlotPoints::from(self.hull_outline.clone()))
                        .name("Convex Hull")
                        .color(colors::HULL)
                        .width(HULL_STROKE_WIDTH),
                );
            }
        });
    }
}

impl eframe::App for HullApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(
                egui::RichText::new(WINDOW_TITLE)
                    .color(colors::TEXT_MUTED)
                    .size(14.0),
            );
            self.render_plot(ui);
        });
    }
}

/// Open the native window and block until the viewer dismisses it.
pub fn run(scene: Scene) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([800.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(HullApp::new(cc, scene)))),
    )
}
