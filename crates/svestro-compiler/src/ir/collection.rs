//! Collection intermediate representation.

use serde::Serialize;

use super::Widget;

/// IR representation of a Sveltia folder collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionIR {
    /// Name of the collection (e.g., "blog"). Never blank.
    pub name: String,

    /// Folder holding the collection entries, relative to the site root.
    pub folder: String,

    /// Fields of each entry, in config order. May be empty.
    pub widgets: Vec<Widget>,

    /// Optional prefix prepended to the folder when building the loader base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
}

impl CollectionIR {
    pub fn new(
        name: impl Into<String>,
        folder: impl Into<String>,
        widgets: Vec<Widget>,
        path_prefix: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            widgets,
            path_prefix,
        }
    }

    /// Loader base directory: `[prefix/]folder[/locale]`.
    pub fn base_path(&self, locale: Option<&str>) -> String {
        let mut base = match &self.path_prefix {
            Some(prefix) => format!("{}/{}", prefix, self.folder),
            None => self.folder.clone(),
        };
        if let Some(locale) = locale {
            base.push('/');
            base.push_str(locale);
        }
        base
    }

    /// Name of the constant declared for this collection: `name` or `name_locale`.
    pub fn constant_name(&self, locale: Option<&str>) -> String {
        match locale {
            Some(locale) => format!("{}_{}", self.name, locale),
            None => self.name.clone(),
        }
    }
}
