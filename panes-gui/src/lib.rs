use eframe::egui;
use panes_core::{PanesError, WindowConfig};

mod export;
mod figure_window;
mod palette;
mod scrollable;
mod scrollable_window;

pub use export::{export_figure, ExportOptions};
pub use figure_window::{run_figure_demo, FigureApp};
pub use scrollable::VScrollableWidget;
pub use scrollable_window::{run_scrollable_demo, ScrollableDemoApp};

#[derive(thiserror::Error, Debug)]
pub enum GuiError {
    #[error("gui error: {0}")]
    Gui(String),
    #[error("export error: {0}")]
    Export(String),
    #[error(transparent)]
    Panes(#[from] PanesError),
}

/// Native window options for a demo window of the configured size.
pub fn native_options(window: &WindowConfig) -> eframe::NativeOptions {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window.title.clone())
            .with_inner_size([window.width, window.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;
    options
}

/// Opens a native window hosting `app` and blocks until the user closes it.
pub(crate) fn run_window<A>(window: &WindowConfig, app: A) -> Result<(), GuiError>
where
    A: eframe::App + 'static,
{
    log::info!(
        "opening '{}' ({}x{})",
        window.title,
        window.width,
        window.height
    );
    eframe::run_native(
        &window.title,
        native_options(window),
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| GuiError::Gui(err.to_string()))
}
