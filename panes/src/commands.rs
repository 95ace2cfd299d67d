use clap::{Parser, Subcommand};
use panes_core::{FigureConfig, ScrollableConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "panes",
    version,
    about = "Scrollable widget and embedded figure demos"
)]
pub struct Cli {
    /// TOML file with window and list settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Scrollable number lists side by side
    Scrollable {
        /// Rows per list, comma separated
        #[arg(long, value_delimiter = ',')]
        counts: Option<Vec<usize>>,
        #[arg(long)]
        width: Option<f32>,
        #[arg(long)]
        height: Option<f32>,
    },
    /// A line plot embedded in a window
    Figure {
        /// Write the figure to this file (PNG, or SVG by extension) instead of opening a window
        #[arg(long)]
        export: Option<PathBuf>,
        /// Leave out grid and tick labels when exporting
        #[arg(long, requires = "export")]
        no_axes: bool,
        #[arg(long)]
        width: Option<f32>,
        #[arg(long)]
        height: Option<f32>,
    },
}

pub fn apply_scrollable_overrides(
    config: &mut ScrollableConfig,
    counts: Option<Vec<usize>>,
    width: Option<f32>,
    height: Option<f32>,
) {
    if let Some(counts) = counts {
        config.counts = counts;
    }
    if let Some(width) = width {
        config.width = width;
    }
    if let Some(height) = height {
        config.height = height;
    }
}

pub fn apply_figure_overrides(config: &mut FigureConfig, width: Option<f32>, height: Option<f32>) {
    if let Some(width) = width {
        config.width = width;
    }
    if let Some(height) = height {
        config.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["panes"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn counts_are_comma_separated() {
        let cli = Cli::try_parse_from(["panes", "scrollable", "--counts", "5,10,15"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Scrollable {
                counts: Some(vec![5, 10, 15]),
                width: None,
                height: None,
            })
        );
    }

    #[test]
    fn negative_counts_are_rejected() {
        assert!(Cli::try_parse_from(["panes", "scrollable", "--counts", "-1"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["panes", "figure", "--config", "demo.toml", "--width", "800"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("demo.toml")));
        assert!(matches!(
            cli.command,
            Some(Commands::Figure { width: Some(w), .. }) if w == 800.0
        ));
    }

    #[test]
    fn no_axes_needs_export() {
        assert!(Cli::try_parse_from(["panes", "figure", "--no-axes"]).is_err());
        assert!(Cli::try_parse_from(["panes", "figure", "--export", "a.png", "--no-axes"]).is_ok());
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = ScrollableConfig::default();
        apply_scrollable_overrides(&mut config, Some(vec![1]), None, Some(300.0));
        assert_eq!(config.counts, vec![1]);
        assert_eq!(config.width, 600.0);
        assert_eq!(config.height, 300.0);

        let mut figure = FigureConfig::default();
        apply_figure_overrides(&mut figure, Some(1000.0), None);
        assert_eq!((figure.width, figure.height), (1000.0, 400.0));
    }
}
