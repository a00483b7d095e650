use std::fmt::Write;

/// Generates a query with `depth` nested levels where every level selects
/// `id` twice and repeats its child branch, so each level exercises both
/// branch merging and leaf deduplication.
pub fn duplicated_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 60);
    out.push_str("query DuplicatedNested {\n  root {\n");
    write_duplicated_level(&mut out, depth, 2);
    out.push_str("  }\n}\n");
    out
}

fn write_duplicated_level(out: &mut String, remaining: usize, level: usize) {
    let indent = "  ".repeat(level);
    writeln!(out, "{indent}id").unwrap();
    writeln!(out, "{indent}id").unwrap();
    if remaining == 0 {
        writeln!(out, "{indent}name").unwrap();
        return;
    }
    for _ in 0..2 {
        writeln!(out, "{indent}child {{").unwrap();
        write_duplicated_level(out, remaining - 1, level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
}

/// Generates a query that spreads the head of a chain of `length`
/// fragments, each of which spreads the next one.
pub fn fragment_chain(length: usize) -> String {
    let mut out = String::with_capacity(length * 60);
    out.push_str("query FragmentChain {\n  viewer {\n    ...Fragment0\n  }\n}\n");
    for i in 0..length {
        writeln!(out, "fragment Fragment{i} on Viewer {{").unwrap();
        writeln!(out, "  id").unwrap();
        writeln!(out, "  field{i}").unwrap();
        if i + 1 < length {
            writeln!(out, "  ...Fragment{}", i + 1).unwrap();
        }
        writeln!(out, "}}").unwrap();
    }
    out
}

/// Generates a document containing `count` named queries that all spread
/// the same fragment.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    id").unwrap();
        writeln!(out, "    ...NodeFields").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out.push_str("fragment NodeFields on Node {\n  id\n  name\n  description\n}\n");
    out
}
