use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Result of scanning the paths given on the command line.
#[derive(Debug, Default)]
pub(crate) struct GraphQLFiles {
    pub errors: Vec<walkdir::Error>,
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Recursively find every file at or under `file_or_dir_paths` whose
/// extension is one of `graphql_file_exts`.
///
/// A lone path argument naming a regular file is always accepted, whatever
/// its extension.
pub(crate) fn find_graphql_files(
    file_or_dir_paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> GraphQLFiles {
    let graphql_file_exts: HashSet<&str> =
        graphql_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!("Scanning {} input paths...", file_or_dir_paths.len());
    let mut found = GraphQLFiles::default();
    for path in file_or_dir_paths {
        let walker = WalkDir::new(path.as_path())
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:?}.");
                        continue;
                    }

                    let has_graphql_ext = entry_path.extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| graphql_file_exts.contains(ext));
                    if has_graphql_ext {
                        log::trace!("Found GraphQL file at {entry_path:?}.");
                        found.file_paths.push(entry_path.to_path_buf());
                    } else {
                        found.num_skipped_files += 1;
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:?}."
                    );
                    found.errors.push(e);
                },
            }
        }
    }

    if found.file_paths.is_empty()
        && let [only_path] = file_or_dir_paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding with {only_path:?} even though it doesn't match any \
            of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`.{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_files = found.num_skipped_files.saturating_sub(1);
        found.file_paths.push(only_path.to_owned());
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    found
}
