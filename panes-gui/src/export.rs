//! Off-screen rendering of a figure to PNG or SVG.

use crate::palette::series_rgb;
use crate::GuiError;
use panes_core::{Axes, Figure};
use plotters::backend::SVGBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub width: u32,
    pub height: u32,
    /// Draw the grid, tick labels and axis frame.
    pub show_axes: bool,
    pub title: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
            show_axes: true,
            title: None,
        }
    }
}

/// Writes `figure` to `path`. Paths ending in `.svg` produce an SVG document,
/// anything else a PNG bitmap, whatever its extension.
pub fn export_figure(
    figure: &Figure,
    path: &Path,
    options: &ExportOptions,
) -> Result<(), GuiError> {
    if figure.axes().is_empty() {
        return Err(GuiError::Export("figure has no axes".to_string()));
    }
    let size = (options.width.max(1), options.height.max(1));
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_figure(&root, figure, options)?;
    } else {
        let mut pixels = vec![0u8; size.0 as usize * size.1 as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, size).into_drawing_area();
            draw_figure(&root, figure, options)?;
        }
        image::save_buffer_with_format(
            path,
            &pixels,
            size.0,
            size.1,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .map_err(export_err)?;
    }
    log::info!("exported figure to {}", path.display());
    Ok(())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    options: &ExportOptions,
) -> Result<(), GuiError> {
    root.fill(&WHITE).map_err(export_err)?;
    let grid = (figure.axes().len(), 1);
    let areas = match options.title.as_deref() {
        Some(title) if !title.is_empty() => root
            .titled(title, ("sans-serif", 24).into_font().color(&BLACK))
            .map_err(export_err)?
            .split_evenly(grid),
        _ => root.split_evenly(grid),
    };
    for (area, axes) in areas.iter().zip(figure.axes()) {
        draw_axes(area, axes, options.show_axes)?;
    }
    root.present().map_err(export_err)?;
    Ok(())
}

fn draw_axes<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    axes: &Axes,
    show_axes: bool,
) -> Result<(), GuiError> {
    let (x_range, y_range) = match axes.bounds() {
        Some(b) => (b.min_x..b.max_x, b.min_y..b.max_y),
        None => (0.0..1.0, 0.0..1.0),
    };
    let label_size = if show_axes { 40 } else { 0 };
    let mut chart = ChartBuilder::on(area)
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, label_size)
        .set_label_area_size(LabelAreaPosition::Bottom, label_size)
        .build_cartesian_2d(x_range, y_range)
        .map_err(export_err)?;

    if show_axes {
        let grid_color = RGBColor(235, 235, 235);
        chart
            .configure_mesh()
            .label_style(("sans-serif", 14).into_font().color(&BLACK))
            .light_line_style(&grid_color)
            .draw()
            .map_err(export_err)?;
    }

    for (idx, series) in axes.series().iter().enumerate() {
        let (r, g, b) = series_rgb(idx);
        chart
            .draw_series(LineSeries::new(
                series.points().map(|[x, y]| (x, y)),
                RGBColor(r, g, b).stroke_width(2),
            ))
            .map_err(export_err)?;
    }
    Ok(())
}

fn export_err(err: impl std::fmt::Display) -> GuiError {
    GuiError::Export(err.to_string())
}
