use crate::ast;
use crate::OperationKind;

/// The operations of a document after normalization, in their original
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedDocument {
    pub(crate) operations: Vec<ast::query::OperationDefinition>,
}

impl NormalizedDocument {
    pub fn into_operations(self) -> Vec<ast::query::OperationDefinition> {
        self.operations
    }

    pub fn operation_kinds(&self) -> Vec<OperationKind> {
        self.operations.iter()
            .map(OperationKind::from)
            .collect()
    }

    pub fn operations(&self) -> &[ast::query::OperationDefinition] {
        &self.operations
    }

    /// Each operation printed on its own, joined by a single newline. A
    /// document without operations prints as the empty string.
    pub fn to_graphql_string(&self) -> String {
        self.operations.iter()
            .map(ast::query::print_operation)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for NormalizedDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_graphql_string())
    }
}
