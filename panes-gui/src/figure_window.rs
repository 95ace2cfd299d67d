use crate::palette::series_color;
use crate::{run_window, GuiError};
use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use panes_core::{identity_figure, Axes, Figure, FigureConfig};

/// Window whose only content is a figure canvas.
pub struct FigureApp {
    figure: Figure,
}

impl FigureApp {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    pub fn ui(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let subplots = self.figure.axes().len();
            if subplots == 0 {
                return;
            }
            let spacing = ui.spacing().item_spacing.y;
            let height =
                ((ui.available_height() - spacing * (subplots - 1) as f32) / subplots as f32)
                    .max(0.0);
            for (idx, axes) in self.figure.axes().iter().enumerate() {
                show_axes(ui, idx, axes, height);
            }
        });
    }
}

impl Default for FigureApp {
    fn default() -> Self {
        Self::new(identity_figure())
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

fn show_axes(ui: &mut egui::Ui, idx: usize, axes: &Axes, height: f32) {
    Plot::new(("figure_axes", idx))
        .height(height)
        .show_grid(true)
        .show(ui, |plot_ui| {
            for (series_idx, series) in axes.series().iter().enumerate() {
                let points: PlotPoints = series.points().collect();
                plot_ui.line(Line::new(points).color(series_color(series_idx)));
            }
        });
}

/// Runs a window showing the identity-line figure until it is closed.
pub fn run_figure_demo(config: &FigureConfig) -> Result<(), GuiError> {
    run_window(&config.window(), FigureApp::default())
}
