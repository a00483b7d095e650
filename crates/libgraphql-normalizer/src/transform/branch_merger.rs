use crate::ast;
use std::collections::HashMap;

/// Selection sets with this many selections or fewer are never merged
/// (their children still are).
pub const MERGE_THRESHOLD: usize = 2;

/// Merge repeated branch fields in every selection set nested under
/// `selection`.
///
/// Within a selection set larger than [`MERGE_THRESHOLD`], branch fields that
/// share both name and alias are collapsed into the first of them (the
/// anchor): each later duplicate is removed and its selections are appended
/// to the anchor's selections in encounter order. Arguments and directives
/// are not compared. The merged children are not deduplicated here.
pub fn merge_branch_fields(selection: ast::query::Selection) -> ast::query::Selection {
    use ast::query::Selection;
    if ast::query::is_selections_empty(&selection) {
        return selection;
    }

    match selection {
        Selection::Field(mut field) => {
            let items = std::mem::take(&mut field.selection_set.items);
            field.selection_set.items = merge_branch_fields_in(items);
            Selection::Field(field)
        },

        Selection::InlineFragment(mut inline) => {
            let items = std::mem::take(&mut inline.selection_set.items);
            inline.selection_set.items = merge_branch_fields_in(items);
            Selection::InlineFragment(inline)
        },

        Selection::FragmentSpread(_) => selection,
    }
}

/// Apply [`merge_branch_fields`] to a list of sibling selections, merging
/// the siblings themselves first.
pub fn merge_branch_fields_in(
    selections: Vec<ast::query::Selection>,
) -> Vec<ast::query::Selection> {
    use ast::query::Selection;

    if selections.len() <= MERGE_THRESHOLD {
        return selections.into_iter()
            .map(merge_branch_fields)
            .collect();
    }

    let mut anchor_idxs: HashMap<(String, Option<String>), usize> = HashMap::new();
    let mut duplicates: Vec<(usize, ast::query::Field)> = vec![];
    let mut merged = Vec::with_capacity(selections.len());
    for selection in selections {
        match selection {
            Selection::Field(field) if !ast::query::is_leaf_field(&field) => {
                let key = (field.name.to_owned(), field.alias.to_owned());
                if let Some(anchor_idx) = anchor_idxs.get(&key) {
                    duplicates.push((*anchor_idx, field));
                } else {
                    anchor_idxs.insert(key, merged.len());
                    merged.push(Selection::Field(field));
                }
            },

            Selection::Field(_)
                | Selection::FragmentSpread(_)
                | Selection::InlineFragment(_)
                => merged.push(selection),
        }
    }

    for (anchor_idx, duplicate) in duplicates {
        if let Selection::Field(anchor) = &mut merged[anchor_idx] {
            log::trace!(
                "Merging {} selections into `{}`.",
                duplicate.selection_set.items.len(),
                anchor.alias.as_deref().unwrap_or(&anchor.name),
            );
            anchor.selection_set.items.extend(duplicate.selection_set.items);
        }
    }

    merged.into_iter()
        .map(merge_branch_fields)
        .collect()
}
