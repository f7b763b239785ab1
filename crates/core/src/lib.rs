//! import-assist - import statement resolution and merging for JavaScript
//!
//! This crate provides functionality to:
//! - Parse JavaScript buffers and extract import declarations and exports
//! - Plan minimally-invasive text edits that add a named binding to an
//!   existing import, or insert a brand-new import statement
//! - Derive the import name a consumer would type for a discovered file
pub mod cache;
pub mod config;
pub mod discovery;
pub mod error;
pub mod interfaces;
pub mod naming;
pub mod parser;
pub mod planner;
pub mod query;
pub mod renderer;
pub mod sources;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::Settings;
pub use interfaces::{BufferId, ExportEnumerator, FileFinder, ModuleIntrospector, TextBuffer};
pub use naming::DerivationMode;
pub use parser::{JsParser, ParseOutcome, ParsedModule};
pub use planner::ImportEngine;
pub use sources::ActionSource;
