use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use super::model::{ArticleTable, EmbeddedArticle, MetadataValue};
use super::parse::{parse_vector, parse_vector_literal};

/// Base name of the dataset files: `<name>.csv` on disk, `<name>.zip` as the
/// downloaded archive.
pub const DEFAULT_FILE_NAME: &str = "vector_database_wikipedia_articles_embedded";

/// Default row count for [`read_sample_fast`].
pub const DEFAULT_FAST_ROWS: usize = 300;

/// Default row count for [`read_sample`].
pub const DEFAULT_REFERENCE_ROWS: usize = 10_000;

/// Row count used by [`load_default_sample`].
pub const DEFAULT_SAMPLE_ROWS: usize = 1_000;

/// How the vector cells of a sample read are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VectorMode {
    /// JSON first, numeric-literal fallback on failure.
    TwoStage,
    /// Numeric-literal parser only.
    LiteralOnly,
}

/// Read the first `n_rows` of the dataset CSV, parsing vector cells with the
/// two-stage parser (JSON fast path, literal fallback).
pub fn read_sample_fast(data_dir: &Path, file_name: &str, n_rows: usize) -> Result<ArticleTable> {
    read_sample_with(data_dir, file_name, n_rows, VectorMode::TwoStage)
}

/// Read the first `n_rows` of the dataset CSV, parsing vector cells with the
/// numeric-literal parser only (the reference path, no JSON attempt).
pub fn read_sample(data_dir: &Path, file_name: &str, n_rows: usize) -> Result<ArticleTable> {
    read_sample_with(data_dir, file_name, n_rows, VectorMode::LiteralOnly)
}

/// Explicit replacement for the old load-on-import behavior: a 1000-row
/// reference read of the default file. Runs only when called.
pub fn load_default_sample(data_dir: &Path) -> Result<ArticleTable> {
    read_sample(data_dir, DEFAULT_FILE_NAME, DEFAULT_SAMPLE_ROWS)
}

fn read_sample_with(
    data_dir: &Path,
    file_name: &str,
    n_rows: usize,
    mode: VectorMode,
) -> Result<ArticleTable> {
    let csv_path: PathBuf = data_dir.join(format!("{file_name}.csv"));
    info!("loading first {n_rows} rows from {}", csv_path.display());

    let mut reader = csv::Reader::from_path(&csv_path)
        .with_context(|| format!("opening {}", csv_path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let title_idx = column_index(&headers, "title_vector")?;
    let content_idx = column_index(&headers, "content_vector")?;
    let id_idx = column_index(&headers, "vector_id")?;

    let metadata_columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != title_idx && *i != content_idx && *i != id_idx)
        .map(|(_, h)| h.clone())
        .collect();

    let mut articles = Vec::with_capacity(n_rows.min(1024));

    for (row_no, result) in reader.records().take(n_rows).enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let title_vector = parse_cell(record.get(title_idx).unwrap_or(""), mode)
            .with_context(|| format!("row {row_no}: 'title_vector'"))?;
        let content_vector = parse_cell(record.get(content_idx).unwrap_or(""), mode)
            .with_context(|| format!("row {row_no}: 'content_vector'"))?;
        let vector_id = record.get(id_idx).unwrap_or("").to_string();

        let mut metadata = BTreeMap::new();
        for (col_idx, value) in record.iter().enumerate() {
            if col_idx == title_idx || col_idx == content_idx || col_idx == id_idx {
                continue;
            }
            metadata.insert(headers[col_idx].clone(), MetadataValue::from_cell(value));
        }

        articles.push(EmbeddedArticle {
            vector_id,
            title_vector,
            content_vector,
            metadata,
        });
    }

    debug!("loaded {} rows", articles.len());
    Ok(ArticleTable {
        articles,
        metadata_columns,
    })
}

fn parse_cell(cell: &str, mode: VectorMode) -> Result<Vec<f64>> {
    match mode {
        VectorMode::TwoStage => Ok(parse_vector(cell)?.values),
        VectorMode::LiteralOnly => Ok(parse_vector_literal(cell)?),
    }
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &Path, name: &str, rows: &[&str]) {
        let mut file = std::fs::File::create(dir.join(format!("{name}.csv"))).unwrap();
        writeln!(file, "id,url,title,text,title_vector,content_vector,vector_id").unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
    }

    fn fixture_rows() -> Vec<String> {
        (0..5)
            .map(|i| {
                format!(
                    "{i},https://en.wikipedia.org/wiki/A{i},A{i},body {i},\
                     \"[0.1, 0.2, 0.3]\",\"[0.4, 0.5, 0.6]\",{i}"
                )
            })
            .collect()
    }

    #[test]
    fn fast_read_parses_vectors_and_coerces_id() {
        let dir = tempfile::tempdir().unwrap();
        let rows = fixture_rows();
        let refs: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        write_fixture(dir.path(), "articles", &refs);

        let table = read_sample_fast(dir.path(), "articles", 300).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.embedding_dim(), Some(3));
        let first = &table.articles[0];
        assert_eq!(first.vector_id, "0");
        assert_eq!(first.title_vector, vec![0.1, 0.2, 0.3]);
        assert_eq!(first.content_vector, vec![0.4, 0.5, 0.6]);
        assert_eq!(
            table.metadata_columns,
            vec!["id", "url", "title", "text"]
        );
        assert_eq!(
            first.metadata.get("title"),
            Some(&MetadataValue::String("A0".into()))
        );
        assert_eq!(first.metadata.get("id"), Some(&MetadataValue::Integer(0)));
    }

    #[test]
    fn n_rows_caps_the_read() {
        let dir = tempfile::tempdir().unwrap();
        let rows = fixture_rows();
        let refs: Vec<&str> = rows.iter().map(|s| s.as_str()).collect();
        write_fixture(dir.path(), "articles", &refs);

        assert_eq!(read_sample_fast(dir.path(), "articles", 2).unwrap().len(), 2);
        // asking for more than the file holds returns what exists
        assert_eq!(
            read_sample_fast(dir.path(), "articles", 100).unwrap().len(),
            5
        );
    }

    #[test]
    fn reference_read_uses_literal_parser_only() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "articles",
            &["7,u,t,x,\"(0.1, 0.2,)\",\"[0.3, 0.4]\",7"],
        );

        let table = read_sample(dir.path(), "articles", 10).unwrap();
        assert_eq!(table.articles[0].title_vector, vec![0.1, 0.2]);
        assert_eq!(table.articles[0].content_vector, vec![0.3, 0.4]);
        assert_eq!(table.articles[0].vector_id, "7");
    }

    #[test]
    fn missing_vector_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join("bad.csv")).unwrap();
        writeln!(file, "id,title_vector,vector_id").unwrap();
        writeln!(file, "0,\"[0.1]\",0").unwrap();

        let err = read_sample_fast(dir.path(), "bad", 10).unwrap_err();
        assert!(err.to_string().contains("content_vector"));
    }

    #[test]
    fn malformed_vector_cell_propagates() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), "articles", &["0,u,t,x,garbage,\"[0.1]\",0"]);

        assert!(read_sample_fast(dir.path(), "articles", 10).is_err());
    }
}
