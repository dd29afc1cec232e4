// error module
mod error;
// loader module
mod loader;

pub use error::EdgeLoaderError;
pub use loader::load_edges_from_file;
