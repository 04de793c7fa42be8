use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// MetadataValue – a single cell in a non-vector column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value for the dataset columns we do not parse
/// specially (`id`, `url`, `title`, `text`, and whatever else a given export
/// carries).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "{s}"),
            MetadataValue::Integer(i) => write!(f, "{i}"),
            MetadataValue::Float(v) => write!(f, "{v}"),
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Null => write!(f, "<null>"),
        }
    }
}

impl MetadataValue {
    /// Infer the value type from raw CSV cell text.
    pub fn from_cell(s: &str) -> MetadataValue {
        if s.is_empty() {
            return MetadataValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return MetadataValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return MetadataValue::Float(f);
        }
        if s == "true" || s == "false" {
            return MetadataValue::Bool(s == "true");
        }
        MetadataValue::String(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// EmbeddedArticle – one row of the dataset
// ---------------------------------------------------------------------------

/// A single article record with its two embedding vectors parsed out of
/// their text-serialized form.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddedArticle {
    /// Row identifier, always kept as text even when the source column is
    /// numeric.
    pub vector_id: String,
    /// Embedding of the article title.
    pub title_vector: Vec<f64>,
    /// Embedding of the article body.
    pub content_vector: Vec<f64>,
    /// Remaining columns: column_name → value.
    pub metadata: BTreeMap<String, MetadataValue>,
}

// ---------------------------------------------------------------------------
// ArticleTable – the loaded sample
// ---------------------------------------------------------------------------

/// A loaded prefix of the dataset, with the metadata column order preserved
/// from the CSV header.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleTable {
    /// All loaded rows.
    pub articles: Vec<EmbeddedArticle>,
    /// Metadata column names in header order (excludes the vector columns
    /// and `vector_id`).
    pub metadata_columns: Vec<String>,
}

impl ArticleTable {
    /// Number of loaded rows.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Embedding dimensionality of the loaded sample, taken from the first
    /// row's title vector. `None` for an empty table.
    pub fn embedding_dim(&self) -> Option<usize> {
        self.articles.first().map(|a| a.title_vector.len())
    }
}
