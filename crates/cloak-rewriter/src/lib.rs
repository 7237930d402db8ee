//! Playlist rewriter.
//!
//! Replaces every qualifying `.m3u8` URL in a playlist with an obfuscated
//! reference token and writes the result next to the other outputs. The
//! transform itself lives in [`cloak_core`]; this crate adds the document
//! rewrite and the directory batch.

pub mod batch;
pub mod error;
pub mod rewrite;

pub use batch::{
    output_file_name, process_directory, BatchOptions, FailurePolicy, FileFailure, RewriteReport,
    WrittenFile,
};
pub use error::{FileError, RewriterError};
pub use rewrite::{rewrite_document, Rewriter};
