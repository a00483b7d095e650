//! Normalizes GraphQL executable documents: fragment spreads are inlined,
//! duplicate leaf fields are removed and duplicate branch fields are merged,
//! and each operation is printed back out in canonical form.
//!
//! ```
//! let normalized = libgraphql_normalizer::normalize(
//!     "query ViewerQuery { viewer { id id } }",
//!     true,
//! ).unwrap();
//!
//! assert_eq!(normalized, "query ViewerQuery {\n  viewer {\n    id\n  }\n}");
//! ```

pub mod ast;
mod document_normalizer;
pub mod file_reader;
mod normalize_error;
mod normalized_document;
mod operation_kind;
pub mod transform;

pub use document_normalizer::DocumentNormalizer;
pub use normalize_error::NormalizeError;
pub use normalized_document::NormalizedDocument;
pub use operation_kind::OperationKind;

/// Normalize `source` and print the resulting operations, joined by a
/// newline.
///
/// With `eliminate_duplicates` set to `false` only fragment spreads are
/// inlined.
pub fn normalize(
    source: &str,
    eliminate_duplicates: bool,
) -> Result<String, NormalizeError> {
    DocumentNormalizer::new()
        .eliminate_duplicates(eliminate_duplicates)
        .normalize_str(source)
        .map(|normalized| normalized.to_graphql_string())
}

#[cfg(test)]
mod tests;
