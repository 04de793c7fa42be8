/// Data layer: core types, acquisition, parsing, and sample loading.
///
/// Architecture:
/// ```text
///   remote .zip ──▶ ┌──────────┐
///                   │ download │  fetch + extract → <name>.csv on disk
///                   └──────────┘
///                        │
///                        ▼
///                   ┌──────────┐
///                   │  loader  │  read first N rows of the CSV
///                   └──────────┘
///                        │ vector cells
///                        ▼
///                   ┌──────────┐
///                   │  parse   │  text cell → Vec<f64> (JSON, then literal)
///                   └──────────┘
///                        │
///                        ▼
///                   ┌──────────────┐
///                   │ ArticleTable │  Vec<EmbeddedArticle> + column index
///                   └──────────────┘
/// ```
pub mod download;
pub mod loader;
pub mod model;
pub mod parse;
