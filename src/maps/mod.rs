// Fri Aug 21 2026 - Alex

pub mod error;
pub mod line;
pub mod reader;

pub use error::{EnumerateError, MapsError};
pub use line::LineRecord;
pub use reader::{MapsReader, LINE_MAX, MAPS_PATH};
