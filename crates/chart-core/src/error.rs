// File: crates/chart-core/src/error.rs
// Summary: Error type shared by figure construction and rendering.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to encode {format}")]
    Encode { format: &'static str },

    #[error("dataset has {labels} labels but {values} values")]
    LengthMismatch { labels: usize, values: usize },

    #[error("sunburst node '{label}' names unknown parent '{parent}'")]
    UnknownParent { label: String, parent: String },

    #[error("sunburst node '{0}' is part of a parent cycle")]
    Cycle(String),

    #[error("template error: {0}")]
    Template(String),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChartError>;

impl ChartError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChartError::Io { path: path.into(), source }
    }
}
