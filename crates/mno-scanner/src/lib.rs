#![warn(clippy::pedantic)]

pub mod cancel;
pub mod config;
pub mod error;
pub mod mapping;
pub mod reader;
pub mod scanner;
pub mod source;

pub use cancel::CancelToken;
pub use config::{DEFAULT_BUFFER_CAPACITY, ScanConfig};
pub use error::ScanError;
pub use mapping::MappedFile;
pub use reader::RecordReader;
pub use scanner::{LineScanner, LineView, MappedLineScanner, StreamingLineScanner};
pub use source::{LineSource, MappedSource, StreamingSource};
