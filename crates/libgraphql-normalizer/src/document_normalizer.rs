use crate::ast;
use crate::file_reader;
use crate::transform::branch_merger;
use crate::transform::leaf_deduplicator;
use crate::transform::FragmentResolver;
use crate::transform::FragmentTable;
use crate::NormalizeError;
use crate::NormalizedDocument;
use crate::OperationKind;
use std::path::Path;

type Result<T> = std::result::Result<T, NormalizeError>;

/// Inlines fragments into, and removes duplicate selections from, every
/// operation of an executable document.
///
/// Per operation (in document order):
///
/// 1. Fragment spreads reachable from the operation's root selection set are
///    replaced by the fragments' selections
///    (see [`FragmentResolver`]).
/// 2. If duplicate elimination is enabled (the default), each top-level
///    selection first has duplicate branch fields merged
///    (see [`branch_merger`]) and then duplicate leaf fields removed
///    (see [`leaf_deduplicator`]). Merging first lets the leaf pass also
///    collapse leaves that were brought together by a merge.
///
/// Fragment definitions are consumed by this process and never appear in
/// the resulting [`NormalizedDocument`].
///
/// # Example
///
/// ```
/// use libgraphql_normalizer::DocumentNormalizer;
///
/// let normalized = DocumentNormalizer::new()
///     .normalize_str("query Q { viewer { id ...F } } fragment F on Viewer { id name }")
///     .unwrap();
///
/// assert_eq!(
///     normalized.to_graphql_string(),
///     "query Q {\n  viewer {\n    id\n    name\n  }\n}",
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentNormalizer {
    eliminate_duplicates: bool,
}

impl DocumentNormalizer {
    pub fn new() -> Self {
        Self {
            eliminate_duplicates: true,
        }
    }

    /// When `false`, only fragment spreads are resolved and any duplicate
    /// selections (including ones introduced by inlining) are left in place.
    pub fn eliminate_duplicates(mut self, eliminate_duplicates: bool) -> Self {
        self.eliminate_duplicates = eliminate_duplicates;
        self
    }

    pub fn eliminates_duplicates(&self) -> bool {
        self.eliminate_duplicates
    }

    pub fn normalize_ast(
        &self,
        document: ast::query::Document,
    ) -> Result<NormalizedDocument> {
        let fragment_table = FragmentTable::from_document(&document)?;

        let mut operations = vec![];
        for def in document.definitions {
            if let ast::query::Definition::Operation(op_def) = def {
                operations.push(
                    self.normalize_operation(op_def, &fragment_table)?
                );
            }
        }

        log::debug!(
            "Normalized {} operations using {} fragments.",
            operations.len(),
            fragment_table.len(),
        );

        Ok(NormalizedDocument { operations })
    }

    pub fn normalize_file(
        &self,
        file_path: impl AsRef<Path>,
    ) -> Result<NormalizedDocument> {
        let file_path = file_path.as_ref();
        log::debug!("Normalizing document at {file_path:?}.");
        let content = file_reader::read_content(file_path)?;
        self.normalize_str(content)
    }

    pub fn normalize_operation(
        &self,
        mut op_def: ast::query::OperationDefinition,
        fragment_table: &FragmentTable,
    ) -> Result<ast::query::OperationDefinition> {
        let op_kind = OperationKind::from(&op_def);
        let selection_set = ast::query::operation_selection_set_mut(&mut op_def);
        log::trace!(
            "Normalizing {op_kind} with {} top-level selections.",
            selection_set.items.len(),
        );

        let items = std::mem::take(&mut selection_set.items);
        let mut items = FragmentResolver::new(fragment_table)
            .resolve_selections(items)?;

        if self.eliminate_duplicates {
            items = items.into_iter()
                .map(branch_merger::merge_branch_fields)
                .map(leaf_deduplicator::dedup_leaf_fields)
                .collect();
        }

        selection_set.items = items;
        Ok(op_def)
    }

    pub fn normalize_str(
        &self,
        content: impl AsRef<str>,
    ) -> Result<NormalizedDocument> {
        let document = ast::query::parse(content.as_ref())?;
        self.normalize_ast(document)
    }
}

impl Default for DocumentNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
