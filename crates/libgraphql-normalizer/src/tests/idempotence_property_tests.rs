//! Property tests over generated fragment-free documents.

use crate::normalize;
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["id", "name", "node", "viewer"])
}

fn alias() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(vec!["first", "second"]))
}

fn format_field(alias: Option<&str>, name: &str) -> String {
    match alias {
        Some(alias) => format!("{alias}: {name}"),
        None => name.to_string(),
    }
}

fn selection() -> impl Strategy<Value = String> {
    let leaf = (alias(), field_name())
        .prop_map(|(alias, name)| format_field(alias, name));

    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            3 => (alias(), field_name(), prop::collection::vec(inner.clone(), 1..5))
                .prop_map(|(alias, name, children)| format!(
                    "{} {{ {} }}",
                    format_field(alias, name),
                    children.join(" "),
                )),
            1 => prop::collection::vec(inner, 1..4)
                .prop_map(|children| format!(
                    "... on Node {{ {} }}",
                    children.join(" "),
                )),
        ]
    })
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(selection(), 1..5)
        .prop_map(|selections| format!("query Q {{ {} }}", selections.join(" ")))
}

proptest! {
    #[test]
    fn normalization_is_idempotent(source in document()) {
        let once = normalize(&source, true).unwrap();
        let twice = normalize(&once, true).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn disabled_elimination_only_reprints(source in document()) {
        let once = normalize(&source, false).unwrap();
        let twice = normalize(&once, false).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn elimination_never_adds_selections(source in document()) {
        let kept = normalize(&source, false).unwrap();
        let eliminated = normalize(&source, true).unwrap();
        prop_assert!(eliminated.lines().count() <= kept.lines().count());
    }
}
