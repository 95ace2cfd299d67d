use crate::commands::*;
use panes_core::{identity_figure, DemoConfig, FigureConfig};
use panes_gui::{export_figure, run_figure_demo, run_scrollable_demo, ExportOptions};
use std::path::Path;

pub fn handle_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            DemoConfig::load_from_file(path)?
        }
        None => DemoConfig::default(),
    };

    match cli.command {
        None => run_scrollable_demo(&config.scrollable)?,
        Some(Commands::Scrollable {
            counts,
            width,
            height,
        }) => {
            apply_scrollable_overrides(&mut config.scrollable, counts, width, height);
            run_scrollable_demo(&config.scrollable)?;
        }
        Some(Commands::Figure {
            export,
            no_axes,
            width,
            height,
        }) => {
            apply_figure_overrides(&mut config.figure, width, height);
            match export {
                Some(path) => export_identity_figure(&config.figure, &path, !no_axes)?,
                None => run_figure_demo(&config.figure)?,
            }
        }
    }
    Ok(())
}

fn export_identity_figure(
    config: &FigureConfig,
    path: &Path,
    show_axes: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ExportOptions {
        width: config.width.round().max(1.0) as u32,
        height: config.height.round().max(1.0) as u32,
        show_axes,
        ..ExportOptions::default()
    };
    export_figure(&identity_figure(), path, &options)?;
    println!("{}", path.display());
    Ok(())
}
