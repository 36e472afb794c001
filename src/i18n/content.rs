//! Content shapes stored in a dictionary and returned by lookups.

use serde::{Deserialize, Serialize};

/// The shape a caller expects from a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Scalar,
    List,
    RecordList,
}

/// A titled entry, used for process steps and product benefits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub description: String,
}

impl Record {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A dictionary value, or the result of resolving one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedContent {
    Scalar(String),
    StringList(Vec<String>),
    RecordList(Vec<Record>),
}

impl ResolvedContent {
    /// The render-safe empty value for `shape`.
    pub fn empty(shape: Shape) -> Self {
        match shape {
            Shape::Scalar => ResolvedContent::Scalar(String::new()),
            Shape::List => ResolvedContent::StringList(Vec::new()),
            Shape::RecordList => ResolvedContent::RecordList(Vec::new()),
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            ResolvedContent::Scalar(_) => Shape::Scalar,
            ResolvedContent::StringList(_) => Shape::List,
            ResolvedContent::RecordList(_) => Shape::RecordList,
        }
    }

    /// Whether this value can be handed out for a `shape` request.
    ///
    /// An empty array in a dictionary is stored as an empty `StringList`; it
    /// satisfies either list shape.
    pub fn matches(&self, shape: Shape) -> bool {
        match (self, shape) {
            (ResolvedContent::StringList(items), Shape::RecordList) => items.is_empty(),
            _ => self.shape() == shape,
        }
    }

    /// Convert a stored value into the requested shape, or `None` on mismatch.
    pub(crate) fn conform(&self, shape: Shape) -> Option<ResolvedContent> {
        if !self.matches(shape) {
            return None;
        }
        if self.shape() == shape {
            Some(self.clone())
        } else {
            Some(ResolvedContent::empty(shape))
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ResolvedContent::Scalar(text) => text,
            _ => String::new(),
        }
    }

    pub fn into_list(self) -> Vec<String> {
        match self {
            ResolvedContent::StringList(items) => items,
            _ => Vec::new(),
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            ResolvedContent::RecordList(records) => records,
            _ => Vec::new(),
        }
    }
}
