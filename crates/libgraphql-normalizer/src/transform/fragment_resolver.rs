use crate::ast;
use crate::transform::FragmentTable;
use crate::NormalizeError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, NormalizeError>;

/// Replaces every fragment spread reachable from a selection with the
/// selections of the fragment it names.
///
/// Within a single selection set:
///
/// - Spreads are removed and the remaining selections keep their relative
///   order.
/// - A fragment spread more than once at the same level contributes its
///   selections only once.
/// - The inlined selections are appended after the remaining selections,
///   grouped per fragment in *reverse* order of first reference (the last
///   distinct fragment referenced comes first).
///
/// Inlined content is resolved as well, so fragments that spread other
/// fragments are flattened transitively. A spread whose expansion reaches
/// a fragment that is already being expanded fails with
/// [`NormalizeError::FragmentCycleDetected`].
///
/// # Example
///
/// ```
/// use libgraphql_normalizer::ast;
/// use libgraphql_normalizer::transform::FragmentResolver;
/// use libgraphql_normalizer::transform::FragmentTable;
///
/// let document = ast::query::parse(
///     "{ viewer { id ...A } } fragment A on Viewer { name }",
/// ).unwrap();
/// let fragment_table = FragmentTable::from_document(&document).unwrap();
///
/// let root = ast::query::operation_selection_set(
///     match &document.definitions[0] {
///         ast::query::Definition::Operation(op_def) => op_def,
///         ast::query::Definition::Fragment(_) => unreachable!(),
///     },
/// );
/// let resolved = FragmentResolver::new(&fragment_table)
///     .resolve_selection_set(root.to_owned())
///     .unwrap();
///
/// let ast::query::Selection::Field(viewer) = &resolved.items[0] else {
///     panic!("expected a field");
/// };
/// let child_names: Vec<_> = viewer.selection_set.items.iter()
///     .map(|selection| match selection {
///         ast::query::Selection::Field(field) => field.name.as_str(),
///         _ => panic!("expected only fields"),
///     })
///     .collect();
/// assert_eq!(child_names, vec!["id", "name"]);
/// ```
#[derive(Debug)]
pub struct FragmentResolver<'fragtable> {
    expanding: Vec<String>,
    fragments: &'fragtable IndexMap<String, ast::query::FragmentDefinition>,
}

impl<'fragtable> FragmentResolver<'fragtable> {
    pub fn new(fragment_table: &'fragtable FragmentTable) -> Self {
        Self::from_fragments(fragment_table.fragments())
    }

    pub(crate) fn from_fragments(
        fragments: &'fragtable IndexMap<String, ast::query::FragmentDefinition>,
    ) -> Self {
        Self {
            expanding: vec![],
            fragments,
        }
    }

    /// Resolve all spreads within the given fragment definition, treating
    /// the fragment itself as already being expanded so that a spread of
    /// itself is reported as a cycle.
    pub(crate) fn resolve_fragment_definition(
        &mut self,
        mut frag_def: ast::query::FragmentDefinition,
    ) -> Result<ast::query::FragmentDefinition> {
        self.expanding.push(frag_def.name.to_owned());
        let items = std::mem::take(&mut frag_def.selection_set.items);
        let resolved = self.resolve_selections(items);
        self.expanding.pop();

        frag_def.selection_set.items = resolved?;
        Ok(frag_def)
    }

    /// Resolve the spreads nested under a single selection. A spread on its
    /// own is returned as-is: spreads are replaced by the selection set that
    /// contains them.
    pub fn resolve_selection(
        &mut self,
        selection: ast::query::Selection,
    ) -> Result<ast::query::Selection> {
        use ast::query::Selection;
        Ok(match selection {
            Selection::Field(mut field) => {
                let items = std::mem::take(&mut field.selection_set.items);
                field.selection_set.items = self.resolve_selections(items)?;
                Selection::Field(field)
            },

            Selection::InlineFragment(mut inline) => {
                let items = std::mem::take(&mut inline.selection_set.items);
                inline.selection_set.items = self.resolve_selections(items)?;
                Selection::InlineFragment(inline)
            },

            Selection::FragmentSpread(_) => selection,
        })
    }

    pub fn resolve_selection_set(
        &mut self,
        mut selection_set: ast::query::SelectionSet,
    ) -> Result<ast::query::SelectionSet> {
        let items = std::mem::take(&mut selection_set.items);
        selection_set.items = self.resolve_selections(items)?;
        Ok(selection_set)
    }

    pub fn resolve_selections(
        &mut self,
        selections: Vec<ast::query::Selection>,
    ) -> Result<Vec<ast::query::Selection>> {
        use ast::query::Selection;

        if selections.is_empty() {
            return Ok(selections);
        }

        let mut spread_fragment_names: Vec<String> = vec![];
        let mut retained = Vec::with_capacity(selections.len());
        for selection in selections {
            match selection {
                Selection::FragmentSpread(spread) => {
                    if !self.fragments.contains_key(&spread.fragment_name) {
                        return Err(NormalizeError::UnknownFragment {
                            fragment_name: spread.fragment_name,
                        });
                    }
                    if !spread_fragment_names.contains(&spread.fragment_name) {
                        spread_fragment_names.push(spread.fragment_name);
                    }
                },

                Selection::Field(_) | Selection::InlineFragment(_) => {
                    retained.push(selection)
                },
            }
        }

        let mut resolved = retained.into_iter()
            .map(|selection| self.resolve_selection(selection))
            .collect::<Result<Vec<_>>>()?;

        for fragment_name in spread_fragment_names.into_iter().rev() {
            resolved.extend(self.inline_fragment(fragment_name)?);
        }

        Ok(resolved)
    }

    fn inline_fragment(
        &mut self,
        fragment_name: String,
    ) -> Result<Vec<ast::query::Selection>> {
        if let Some(cycle_start) =
            self.expanding.iter().position(|name| *name == fragment_name) {
            let mut cycle_path = self.expanding[cycle_start..].to_vec();
            cycle_path.push(fragment_name);
            return Err(NormalizeError::FragmentCycleDetected { cycle_path });
        }

        let fragments = self.fragments;
        let Some(frag_def) = fragments.get(&fragment_name) else {
            return Err(NormalizeError::UnknownFragment { fragment_name });
        };

        log::trace!(
            "Inlining {} selections from fragment `{fragment_name}`.",
            frag_def.selection_set.items.len(),
        );
        self.expanding.push(fragment_name);
        let inlined = self.resolve_selections(frag_def.selection_set.items.to_owned());
        self.expanding.pop();

        inlined
    }
}
