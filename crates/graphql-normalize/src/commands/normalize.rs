use crate::graphql_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_normalizer::DocumentNormalizer;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct NormalizeCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Only inline fragments; leave duplicate selections in place.",
        long,
    )]
    keep_duplicates: bool,

    #[arg(
        help="Rewrite each file in place instead of printing the normalized \
             output.",
        long,
    )]
    write: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be normalized.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for NormalizeCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let found = graphql_files::find_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        );
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors finding GraphQL files: {:#?}",
                output_utils::RED_X,
                found.errors,
            ));
        }
        if found.file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found.",
                output_utils::RED_X,
            ));
        }

        let normalizer = DocumentNormalizer::new()
            .eliminate_duplicates(!self.keep_duplicates);

        let mut outputs = vec![];
        for file_path in &found.file_paths {
            match normalizer.normalize_file(file_path) {
                Ok(normalized) => outputs.push(
                    (file_path, normalized.to_graphql_string())
                ),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to normalize {file_path:?}: {e}",
                    output_utils::RED_X,
                )),
            }
        }

        if self.write {
            for (file_path, output) in &outputs {
                log::debug!("Writing normalized output to {file_path:?}.");
                if let Err(e) = std::fs::write(file_path, format!("{output}\n")) {
                    return CommandResult::stderr(format_args!(
                        "{} Failed to write {file_path:?}: {e}",
                        output_utils::RED_X,
                    ));
                }
            }
            return CommandResult::stdout(format_args!(
                "{} Normalized {} files ({} non-graphql files skipped).",
                output_utils::GREEN_CHECK,
                outputs.len(),
                found.num_skipped_files,
            ));
        }

        match outputs.as_slice() {
            [(_, output)] => CommandResult::stdout(format_args!("{output}")),
            _ => CommandResult::stdout(format_args!(
                "{}",
                outputs.iter()
                    .map(|(file_path, output)| {
                        format!("# {}\n{output}", file_path.display())
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            )),
        }
    }
}
