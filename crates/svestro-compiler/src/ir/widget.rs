//! Widget intermediate representation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// The fixed catalog of supported Sveltia widget tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetTag {
    Boolean,
    Code,
    Color,
    #[serde(rename = "datetime")]
    DateTime,
    File,
    Image,
    List,
    Markdown,
    Number,
    Relation,
    Select,
    String,
    Uuid,
}

impl WidgetTag {
    /// Every supported tag, in catalog order.
    pub const ALL: [WidgetTag; 13] = [
        WidgetTag::Boolean,
        WidgetTag::Code,
        WidgetTag::Color,
        WidgetTag::DateTime,
        WidgetTag::File,
        WidgetTag::Image,
        WidgetTag::List,
        WidgetTag::Markdown,
        WidgetTag::Number,
        WidgetTag::Relation,
        WidgetTag::Select,
        WidgetTag::String,
        WidgetTag::Uuid,
    ];

    /// The tag as written in a Sveltia config.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetTag::Boolean => "boolean",
            WidgetTag::Code => "code",
            WidgetTag::Color => "color",
            WidgetTag::DateTime => "datetime",
            WidgetTag::File => "file",
            WidgetTag::Image => "image",
            WidgetTag::List => "list",
            WidgetTag::Markdown => "markdown",
            WidgetTag::Number => "number",
            WidgetTag::Relation => "relation",
            WidgetTag::Select => "select",
            WidgetTag::String => "string",
            WidgetTag::Uuid => "uuid",
        }
    }
}

impl FromStr for WidgetTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for WidgetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "lowercase")]
pub enum WidgetKind {
    String,
    Number,
    Boolean,
    #[serde(rename = "datetime")]
    DateTime,
    Markdown,
    Image,
    File,
    Code,
    Color,
    Uuid,
    Select {
        /// Resolved option values, in config order.
        options: Vec<String>,
        /// Pre-rendered enumeration expression (e.g. `z.enum(["a", "b"])`).
        enumeration: String,
    },
    List {
        /// Item widgets; never empty.
        items: Vec<Widget>,
    },
    Relation {
        /// Name of the referenced collection.
        collection: String,
        multiple: bool,
    },
}

impl WidgetKind {
    /// Builds the payload for a scalar tag.
    ///
    /// Returns `None` for tags that carry extra data (select, list, relation).
    pub fn scalar(tag: WidgetTag) -> Option<Self> {
        let kind = match tag {
            WidgetTag::String => WidgetKind::String,
            WidgetTag::Number => WidgetKind::Number,
            WidgetTag::Boolean => WidgetKind::Boolean,
            WidgetTag::DateTime => WidgetKind::DateTime,
            WidgetTag::Markdown => WidgetKind::Markdown,
            WidgetTag::Image => WidgetKind::Image,
            WidgetTag::File => WidgetKind::File,
            WidgetTag::Code => WidgetKind::Code,
            WidgetTag::Color => WidgetKind::Color,
            WidgetTag::Uuid => WidgetKind::Uuid,
            WidgetTag::Select | WidgetTag::List | WidgetTag::Relation => return None,
        };
        Some(kind)
    }

    pub fn tag(&self) -> WidgetTag {
        match self {
            WidgetKind::String => WidgetTag::String,
            WidgetKind::Number => WidgetTag::Number,
            WidgetKind::Boolean => WidgetTag::Boolean,
            WidgetKind::DateTime => WidgetTag::DateTime,
            WidgetKind::Markdown => WidgetTag::Markdown,
            WidgetKind::Image => WidgetTag::Image,
            WidgetKind::File => WidgetTag::File,
            WidgetKind::Code => WidgetTag::Code,
            WidgetKind::Color => WidgetTag::Color,
            WidgetKind::Uuid => WidgetTag::Uuid,
            WidgetKind::Select { .. } => WidgetTag::Select,
            WidgetKind::List { .. } => WidgetTag::List,
            WidgetKind::Relation { .. } => WidgetTag::Relation,
        }
    }
}

/// One configured field and its contribution to the generated schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Widget {
    /// Field name as it appears in the content frontmatter. Never empty.
    pub name: String,

    /// Effective requiredness after the kind policies below are applied.
    pub required: bool,

    #[serde(flatten)]
    pub kind: WidgetKind,
}

impl Widget {
    /// Creates a widget, applying the requiredness policies:
    /// - a list is never required;
    /// - a relation with `multiple` is never required.
    pub fn new(name: impl Into<String>, required: bool, kind: WidgetKind) -> Self {
        let required = match &kind {
            WidgetKind::List { .. } => false,
            WidgetKind::Relation { multiple: true, .. } => false,
            _ => required,
        };

        Self {
            name: name.into(),
            required,
            kind,
        }
    }

    pub fn tag(&self) -> WidgetTag {
        self.kind.tag()
    }
}
