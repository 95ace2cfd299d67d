#[derive(thiserror::Error, Debug)]
pub enum PanesError {
    #[error("setup_contents is not implemented for {0}")]
    NotImplemented(&'static str),
    #[error("x and y must have the same length, got {x} and {y}")]
    SeriesLength { x: usize, y: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
