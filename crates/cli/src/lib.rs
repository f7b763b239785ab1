//! Host glue for the import-assist engine: file buffers, glob discovery,
//! edit application, and the command-line surface.

pub mod commands;
pub mod host;

pub use host::{FsBuffer, GlobFinder, SyntaxExports, apply_edit};
