//! Edit planning: the orchestrator that decides between inserting a new
//! import statement, merging into an existing one, or doing nothing.

use crate::{
    cache::ParseCache,
    error::Result,
    interfaces::{BufferId, TextBuffer},
    parser::{JsParser, ParseOutcome},
    query,
    renderer::{ImportRender, ImportSource, render_import},
    types::Edit,
};
use std::sync::Mutex;

/// The import engine: owns the parser and the per-buffer parse cache.
///
/// All methods take `&self`; internal state is serialized so the engine can
/// be shared across host callback threads.
pub struct ImportEngine {
    parser: Mutex<JsParser>,
    cache: ParseCache,
}

impl ImportEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: Mutex::new(JsParser::new()?),
            cache: ParseCache::new(),
        })
    }

    pub fn with_cache_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            parser: Mutex::new(JsParser::new()?),
            cache: ParseCache::with_capacity(capacity),
        })
    }

    /// Parse a buffer, consulting the cache first.
    pub fn parse(&self, buffer: &dyn TextBuffer) -> ParseOutcome {
        let text = buffer.text();
        if let Some(cached) = self.cache.get(buffer.id(), &text) {
            return cached;
        }

        let outcome = {
            let mut parser = match self.parser.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            parser.parse(&text)
        };

        self.cache.insert(buffer.id(), &text, outcome.clone());
        outcome
    }

    /// Host notification that a buffer's content changed.
    pub fn buffer_changed(&self, id: BufferId) {
        self.cache.invalidate(id);
    }

    /// Plan the edit that makes `specifier` imported from `module_name`.
    ///
    /// Produces exactly one [`Edit`] and never mutates the buffer:
    /// - no existing import for the module → `Insert` a fresh statement at
    ///   the top of the buffer;
    /// - the specifier is already imported → `NoOp`;
    /// - otherwise → `Replace` the first matching declaration with the
    ///   merged statement, or fall back to a top-of-buffer `Insert` when the
    ///   declaration carries no source span.
    pub fn plan_import_edit(
        &self,
        buffer: &dyn TextBuffer,
        module_name: &str,
        specifier: &str,
    ) -> Edit {
        let module = self.parse(buffer);
        let existing = module.imports_for_module(module_name);
        let extra = [specifier.to_string()];

        if existing.is_empty() {
            // Covers both "no import yet" and an unparsable buffer.
            let rendered = render_import(&ImportRender {
                import: ImportSource::FromSource(module_name),
                extra_specifiers: &extra,
                newline: true,
            });
            return Edit::insert_at_top(rendered);
        }

        if query::contains_specifier(&existing, specifier) {
            return Edit::NoOp;
        }

        // Multiple statements for one module only happen when the user wrote
        // them; merge into the first in document order.
        let target = &existing[0];

        match target.span {
            Some(span) => {
                let rendered = render_import(&ImportRender {
                    import: ImportSource::FromDeclaration(target),
                    extra_specifiers: &extra,
                    newline: false,
                });
                Edit::Replace {
                    range: span,
                    text: rendered,
                }
            }
            None => {
                tracing::debug!(
                    module = module_name,
                    "matched declaration has no source span, inserting instead"
                );
                let rendered = render_import(&ImportRender {
                    import: ImportSource::FromDeclaration(target),
                    extra_specifiers: &extra,
                    newline: true,
                });
                Edit::insert_at_top(rendered)
            }
        }
    }

    /// Release cached state. Idempotent; also runs on drop.
    pub fn dispose(&self) {
        self.cache.clear();
    }

    #[cfg(test)]
    pub(crate) fn cached_entries(&self) -> usize {
        self.cache.len()
    }
}

impl Drop for ImportEngine {
    fn drop(&mut self) {
        self.cache.clear();
    }
}
