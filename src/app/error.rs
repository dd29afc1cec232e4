use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Edge list error: {0}")]
    EdgeLoad(#[from] crate::edge_loader::EdgeLoaderError),
    #[error("Cave graph error: {0}")]
    Graph(#[from] crate::graph::GraphError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
}
