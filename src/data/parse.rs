//! Parsing of text-serialized embedding vectors.
//!
//! The dataset stores each embedding as a string cell, normally a JSON array
//! (`"[0.1, 0.2, ...]"`). Some exports use a Python-literal spelling instead
//! (parentheses, trailing commas), so parsing is a two-stage attempt: a fast
//! JSON parse first, then a general numeric-literal parse. The outcome keeps
//! track of which stage succeeded rather than swallowing the first error.

use thiserror::Error;

/// Which stage of [`parse_vector`] produced the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    /// The JSON fast path succeeded.
    Fast,
    /// JSON failed, the literal-sequence fallback succeeded.
    Fallback,
}

/// A successfully parsed vector cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVector {
    pub values: Vec<f64>,
    pub stage: ParseStage,
}

/// Failure of the literal-sequence parser.
#[derive(Debug, Clone, Error)]
pub enum LiteralParseError {
    #[error("expected a bracketed sequence like [..] or (..), got {0:?}")]
    Delimiter(String),
    #[error("element {index}: {token:?} is not a number")]
    Number { index: usize, token: String },
}

/// Both parse stages failed for a vector cell.
#[derive(Debug, Error)]
#[error("not a JSON number array ({json}) and not a numeric literal sequence ({literal})")]
pub struct VectorParseError {
    pub json: serde_json::Error,
    pub literal: LiteralParseError,
}

/// Fast path: parse the cell as a JSON array of numbers.
pub fn parse_vector_fast(cell: &str) -> Result<Vec<f64>, serde_json::Error> {
    serde_json::from_str::<Vec<f64>>(cell)
}

/// Fallback path: parse a bracketed numeric sequence literal.
///
/// Accepts `[..]` or `(..)` delimiters, arbitrary whitespace, integer and
/// float elements (including exponent notation), and a trailing comma.
/// Nested sequences are rejected.
pub fn parse_vector_literal(cell: &str) -> Result<Vec<f64>, LiteralParseError> {
    let trimmed = cell.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .or_else(|| {
            trimmed
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
        })
        .ok_or_else(|| LiteralParseError::Delimiter(preview(trimmed)))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    let mut tokens = inner.split(',').peekable();
    let mut index = 0usize;
    while let Some(tok) = tokens.next() {
        let tok = tok.trim();
        // A single empty token at the end is a trailing comma
        if tok.is_empty() && tokens.peek().is_none() {
            break;
        }
        let value = tok
            .parse::<f64>()
            .map_err(|_| LiteralParseError::Number {
                index,
                token: tok.to_string(),
            })?;
        values.push(value);
        index += 1;
    }
    Ok(values)
}

/// Two-stage parse: JSON first, literal-sequence on JSON failure. Returns
/// the values together with the stage that produced them, or an error
/// carrying both underlying failures.
pub fn parse_vector(cell: &str) -> Result<ParsedVector, VectorParseError> {
    match parse_vector_fast(cell) {
        Ok(values) => Ok(ParsedVector {
            values,
            stage: ParseStage::Fast,
        }),
        Err(json) => match parse_vector_literal(cell) {
            Ok(values) => Ok(ParsedVector {
                values,
                stage: ParseStage::Fallback,
            }),
            Err(literal) => Err(VectorParseError { json, literal }),
        },
    }
}

fn preview(s: &str) -> String {
    const MAX: usize = 32;
    if s.chars().count() <= MAX {
        s.to_string()
    } else {
        let head: String = s.chars().take(MAX).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_path_parses_json_array() {
        let parsed = parse_vector("[0.1, 0.2, 0.3]").unwrap();
        assert_eq!(parsed.values, vec![0.1, 0.2, 0.3]);
        assert_eq!(parsed.stage, ParseStage::Fast);
    }

    #[test]
    fn literal_parser_matches_fast_path_on_json_input() {
        let values = parse_vector_literal("[0.1, 0.2, 0.3]").unwrap();
        assert_eq!(values, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn literal_parser_accepts_parens_and_trailing_comma() {
        assert_eq!(
            parse_vector_literal("(1.0, -2.5, 3,)").unwrap(),
            vec![1.0, -2.5, 3.0]
        );
    }

    #[test]
    fn literal_parser_accepts_exponent_notation() {
        assert_eq!(
            parse_vector_literal("[1e-3, 2.5E2]").unwrap(),
            vec![0.001, 250.0]
        );
    }

    #[test]
    fn paren_input_goes_through_fallback() {
        let parsed = parse_vector("(0.5, 0.25)").unwrap();
        assert_eq!(parsed.values, vec![0.5, 0.25]);
        assert_eq!(parsed.stage, ParseStage::Fallback);
    }

    #[test]
    fn empty_sequence_is_ok() {
        assert_eq!(parse_vector("[]").unwrap().values, Vec::<f64>::new());
        assert_eq!(parse_vector_literal("(  )").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn both_stages_failing_reports_both_errors() {
        let err = parse_vector("not a vector").unwrap_err();
        assert!(matches!(err.literal, LiteralParseError::Delimiter(_)));
    }

    #[test]
    fn bad_element_is_rejected_with_index() {
        let err = parse_vector_literal("[1.0, abc, 3.0]").unwrap_err();
        match err {
            LiteralParseError::Number { index, token } => {
                assert_eq!(index, 1);
                assert_eq!(token, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nested_sequences_are_rejected() {
        assert!(parse_vector("[[1.0], [2.0]]").is_err());
    }
}
