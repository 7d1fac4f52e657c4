use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
    Display,
    Serialize,
    Deserialize,
))]
pub struct RecordId(i64);

/// Fields a record exposes to queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Title,
    TemplateName,
}

impl Field {
    /// Name the field is stored under in a search index.
    pub fn index_name(self) -> &'static str {
        match self {
            Field::Id => "_group",
            Field::Title => "title",
            Field::TemplateName => "_templatename",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.index_name())
    }
}

/// A document subject to filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    /// Optional classification label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

impl Record {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            title: title.into(),
            template_name: None,
        }
    }

    pub fn with_template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = Some(template_name.into());
        self
    }

    /// Reads a field as text. Returns `None` when the field is unset.
    pub fn field(&self, field: Field) -> Option<Cow<'_, str>> {
        match field {
            Field::Id => Some(Cow::Owned(self.id.to_string())),
            Field::Title => Some(Cow::Borrowed(self.title.as_str())),
            Field::TemplateName => self.template_name.as_deref().map(Cow::Borrowed),
        }
    }
}

#[cfg(test)]
mod tests;
