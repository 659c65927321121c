//! Infrastructure adapters for Hatch.
//!
//! This crate implements the ports defined in `hatch_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod content;
pub mod download;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use content::EmbeddedContentStore;
pub use download::HttpDownloader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{PathLocator, ProcessRunner};
