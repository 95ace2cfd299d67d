//! Toolkit-independent models behind the panes demos: the rows a scrollable
//! container displays, the hook that fills them, the data of an embedded
//! figure and the demo configuration.

pub mod config;
pub mod contents;
pub mod error;
pub mod figure;

pub use config::{DemoConfig, FigureConfig, ScrollableConfig, WindowConfig};
pub use contents::{ContentItem, Contents, NumberList, SetupContents, Unimplemented};
pub use error::PanesError;
pub use figure::{identity_figure, Axes, Figure, LineSeries, PlotBounds};
