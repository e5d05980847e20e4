//! Typed intermediate representation of a Sveltia CMS config.
//!
//! This IR is produced by [`to_ir`](crate::to_ir) from the untyped document and
//! consumed by the code generator. Once built it is never re-validated or
//! mutated: synthesis only reads it.

mod collection;
mod widget;

pub use collection::CollectionIR;
pub use widget::{Widget, WidgetKind, WidgetTag};

use serde::Serialize;

/// The complete content config: every collection plus the i18n locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentConfigIR {
    pub collections: Vec<CollectionIR>,
    /// Locale codes from `i18n.locales`, in config order. Empty means no i18n.
    pub locales: Vec<String>,
}

impl ContentConfigIR {
    pub fn new(collections: Vec<CollectionIR>, locales: Vec<String>) -> Self {
        Self {
            collections,
            locales,
        }
    }

    /// Every (collection, locale) pair in declaration order.
    ///
    /// Without locales there is exactly one entry per collection with `None`.
    pub fn declarations(&self) -> Vec<(&CollectionIR, Option<&str>)> {
        let mut out = Vec::new();
        for collection in &self.collections {
            if self.locales.is_empty() {
                out.push((collection, None));
            } else {
                for locale in &self.locales {
                    out.push((collection, Some(locale.as_str())));
                }
            }
        }
        out
    }

    /// Names of all declared constants, in declaration order.
    pub fn constant_names(&self) -> Vec<String> {
        self.declarations()
            .into_iter()
            .map(|(collection, locale)| collection.constant_name(locale))
            .collect()
    }
}
