pub mod query {
    pub use graphql_parser::query::ParseError;

    pub type Definition = graphql_parser::query::Definition<'static, String>;
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Document = graphql_parser::query::Document<'static, String>;
    pub type Field = graphql_parser::query::Field<'static, String>;
    pub type FragmentDefinition = graphql_parser::query::FragmentDefinition<'static, String>;
    pub type FragmentSpread = graphql_parser::query::FragmentSpread<'static, String>;
    pub type InlineFragment = graphql_parser::query::InlineFragment<'static, String>;
    pub type Mutation = graphql_parser::query::Mutation<'static, String>;
    pub type OperationDefinition = graphql_parser::query::OperationDefinition<'static, String>;
    pub type Query = graphql_parser::query::Query<'static, String>;
    pub type Selection = graphql_parser::query::Selection<'static, String>;
    pub type SelectionSet = graphql_parser::query::SelectionSet<'static, String>;
    pub type Subscription = graphql_parser::query::Subscription<'static, String>;
    pub type TypeCondition = graphql_parser::query::TypeCondition<'static, String>;

    /// Parses an executable document into an owned AST.
    pub fn parse(content: &str) -> Result<Document, ParseError> {
        Ok(graphql_parser::parse_query::<String>(content)?.into_static())
    }

    /// Renders a single operation the same way it would render as the only
    /// definition of a document, minus the printer's trailing newline.
    pub fn print_operation(op_def: &OperationDefinition) -> String {
        let document = Document {
            definitions: vec![Definition::Operation(op_def.to_owned())],
        };
        document.to_string().trim_end_matches('\n').to_string()
    }

    pub fn operation_selection_set(op_def: &OperationDefinition) -> &SelectionSet {
        match op_def {
            OperationDefinition::Mutation(mutation) => &mutation.selection_set,
            OperationDefinition::Query(query) => &query.selection_set,
            OperationDefinition::SelectionSet(selection_set) => selection_set,
            OperationDefinition::Subscription(sub) => &sub.selection_set,
        }
    }

    pub fn operation_selection_set_mut(
        op_def: &mut OperationDefinition,
    ) -> &mut SelectionSet {
        match op_def {
            OperationDefinition::Mutation(mutation) => &mut mutation.selection_set,
            OperationDefinition::Query(query) => &mut query.selection_set,
            OperationDefinition::SelectionSet(selection_set) => selection_set,
            OperationDefinition::Subscription(sub) => &mut sub.selection_set,
        }
    }

    /// The nested selection set of a selection, if the selection kind can
    /// carry one at all.
    pub fn nested_selection_set(selection: &Selection) -> Option<&SelectionSet> {
        match selection {
            Selection::Field(field) => Some(&field.selection_set),
            Selection::InlineFragment(inline) => Some(&inline.selection_set),
            Selection::FragmentSpread(_) => None,
        }
    }

    /// A selection with no nested selections (or that cannot have any) is
    /// left untouched by every normalization pass.
    pub fn is_selections_empty(selection: &Selection) -> bool {
        nested_selection_set(selection)
            .is_none_or(|selection_set| selection_set.items.is_empty())
    }

    /// A field without a nested selection set.
    pub fn is_leaf_field(field: &Field) -> bool {
        field.selection_set.items.is_empty()
    }
}
