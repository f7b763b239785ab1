//! Host collaborator interfaces
//!
//! Everything the engine needs from its host — buffers, file discovery,
//! module introspection — consumed as plain data behind traits.

pub mod buffer;
pub mod file_finder;
pub mod introspector;

pub use buffer::{BufferId, StringBuffer, TextBuffer};
pub use file_finder::FileFinder;
pub use introspector::{ExportEnumerator, ModuleIntrospector};
