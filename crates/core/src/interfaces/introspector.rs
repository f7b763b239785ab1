//! Export enumeration interfaces
//!
//! Two sources of "what does this module export": a host-side introspector
//! that enumerates the own properties of an already-loaded module object
//! (fast, may fail on syntax the host loader cannot execute), and the
//! syntax-based enumerator backed by the parser. Both sit behind the same
//! trait so callers can try them in order, first success wins.

use crate::error::Result;
use std::path::Path;

/// Trait for enumerating the exported names of a module on disk.
pub trait ExportEnumerator {
    fn exported_names(&self, path: &Path) -> Result<Vec<String>>;

    /// Short label for log messages.
    fn describe(&self) -> &'static str {
        "export enumerator"
    }
}

/// Trait for hosts that can materialize a module object and list its own
/// property names. Kept separate from [`ExportEnumerator`] so hosts without
/// a loader simply do not provide one.
pub trait ModuleIntrospector {
    fn own_property_names(&self, path: &Path) -> Result<Vec<String>>;
}

impl<T: ModuleIntrospector> ExportEnumerator for T {
    fn exported_names(&self, path: &Path) -> Result<Vec<String>> {
        self.own_property_names(path)
    }

    fn describe(&self) -> &'static str {
        "module introspection"
    }
}
