//! Validated metadata records

use crate::item::ItemKind;
use serde::Serialize;
use std::fmt;

/// Separator between the fields of a formatted record
pub const SUMMARY_SEPARATOR: &str = " | ";

/// The kind-specific part of a record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemDetails {
    Digital { file_size_mb: f64 },
    Physical { page_count: i64 },
}

impl ItemDetails {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemDetails::Digital { .. } => ItemKind::Digital,
            ItemDetails::Physical { .. } => ItemKind::Physical,
        }
    }
}

impl fmt::Display for ItemDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemDetails::Digital { file_size_mb } => write!(f, "{}MB", file_size_mb),
            ItemDetails::Physical { page_count } => write!(f, "{} pages", page_count),
        }
    }
}

/// A submission that passed every rule for its kind.
///
/// Only [`ItemFactory`](crate::ItemFactory) can build one, and nothing can
/// change it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    title: String,
    author: String,
    year: i64,
    #[serde(flatten)]
    details: ItemDetails,
}

impl MetadataRecord {
    pub(crate) fn new(title: String, author: String, year: i64, details: ItemDetails) -> Self {
        Self {
            title,
            author,
            year,
            details,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.details.kind()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn details(&self) -> ItemDetails {
        self.details
    }

    pub fn file_size_mb(&self) -> Option<f64> {
        match self.details {
            ItemDetails::Digital { file_size_mb } => Some(file_size_mb),
            ItemDetails::Physical { .. } => None,
        }
    }

    pub fn page_count(&self) -> Option<i64> {
        match self.details {
            ItemDetails::Physical { page_count } => Some(page_count),
            ItemDetails::Digital { .. } => None,
        }
    }

    /// `Label | title | author | year | detail`
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MetadataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = SUMMARY_SEPARATOR;
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.kind().label(),
            self.title,
            self.author,
            self.year,
            self.details,
        )
    }
}
