use crate::ast;
use std::collections::HashMap;

/// Remove repeated leaf fields from every selection set nested under
/// `selection`.
///
/// A leaf field is dropped when an earlier field in the same selection set
/// has the same name. Only the name is compared: `a: id` and `b: id` are
/// duplicates of each other and only the first one survives. Branch fields
/// and inline fragments are never dropped, only descended into.
pub fn dedup_leaf_fields(selection: ast::query::Selection) -> ast::query::Selection {
    use ast::query::Selection;
    if ast::query::is_selections_empty(&selection) {
        return selection;
    }

    match selection {
        Selection::Field(mut field) => {
            let items = std::mem::take(&mut field.selection_set.items);
            field.selection_set.items = dedup_leaf_fields_in(items);
            Selection::Field(field)
        },

        Selection::InlineFragment(mut inline) => {
            let items = std::mem::take(&mut inline.selection_set.items);
            inline.selection_set.items = dedup_leaf_fields_in(items);
            Selection::InlineFragment(inline)
        },

        Selection::FragmentSpread(_) => selection,
    }
}

/// Apply [`dedup_leaf_fields`] to a list of sibling selections, filtering
/// the siblings themselves first.
pub fn dedup_leaf_fields_in(
    selections: Vec<ast::query::Selection>,
) -> Vec<ast::query::Selection> {
    use ast::query::Selection;

    if selections.is_empty() {
        return selections;
    }

    // Branch fields count as the first occurrence of a name too.
    let mut first_field_idx: HashMap<&str, usize> = HashMap::new();
    for (idx, selection) in selections.iter().enumerate() {
        if let Selection::Field(field) = selection {
            first_field_idx.entry(field.name.as_str()).or_insert(idx);
        }
    }

    let keep: Vec<bool> =
        selections.iter()
            .enumerate()
            .map(|(idx, selection)| match selection {
                Selection::Field(field) => {
                    !ast::query::is_leaf_field(field)
                        || first_field_idx.get(field.name.as_str()) == Some(&idx)
                },
                Selection::FragmentSpread(_) | Selection::InlineFragment(_) => true,
            })
            .collect();

    let num_dropped = keep.iter().filter(|keep| !**keep).count();
    if num_dropped > 0 {
        log::trace!("Dropping {num_dropped} duplicate leaf fields.");
    }

    selections.into_iter()
        .zip(keep)
        .filter_map(|(selection, keep)| keep.then_some(selection))
        .map(dedup_leaf_fields)
        .collect()
}
