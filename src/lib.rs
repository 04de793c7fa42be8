//! Acquisition and sampling of the OpenAI Wikipedia-articles embedding
//! dataset: a zipped CSV whose `title_vector` and `content_vector` columns
//! hold text-serialized embedding vectors.
//!
//! Nothing here runs implicitly; acquisition and sample loading are explicit
//! calls:
//!
//! ```no_run
//! use wikivec::{ensure_dataset, read_sample_fast, AcquireOptions, DEFAULT_FILE_NAME};
//!
//! # fn main() -> anyhow::Result<()> {
//! let opts = AcquireOptions::default();
//! let paths = ensure_dataset(&opts)?;
//! println!("csv at {}", paths.csv_path.display());
//! let table = read_sample_fast(&opts.data_dir, DEFAULT_FILE_NAME, 300)?;
//! println!("{} rows, dim {:?}", table.len(), table.embedding_dim());
//! # Ok(())
//! # }
//! ```

pub mod data;

pub use data::download::{ensure_dataset, AcquireOptions, DatasetPaths, DATASET_URL};
pub use data::loader::{
    load_default_sample, read_sample, read_sample_fast, DEFAULT_FAST_ROWS, DEFAULT_FILE_NAME,
    DEFAULT_REFERENCE_ROWS, DEFAULT_SAMPLE_ROWS,
};
pub use data::model::{ArticleTable, EmbeddedArticle, MetadataValue};
pub use data::parse::{
    parse_vector, parse_vector_fast, parse_vector_literal, LiteralParseError, ParseStage,
    ParsedVector, VectorParseError,
};
