use crate::ast;

/// The root kind of an operation definition. Anonymous shorthand operations
/// (`{ ... }`) are queries.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}

impl std::convert::From<&ast::query::OperationDefinition> for OperationKind {
    fn from(value: &ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition as OpDef;
        match value {
            OpDef::Mutation(_) => Self::Mutation,
            OpDef::Query(_) | OpDef::SelectionSet(_) => Self::Query,
            OpDef::Subscription(_) => Self::Subscription,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
