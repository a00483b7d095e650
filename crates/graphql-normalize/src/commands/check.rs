use crate::graphql_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_normalizer::file_reader;
use libgraphql_normalizer::DocumentNormalizer;
use libgraphql_normalizer::NormalizeError;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
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
        help="Check against the output of fragment inlining alone, without \
             duplicate elimination.",
        long,
    )]
    keep_duplicates: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

fn is_normalized(
    normalizer: &DocumentNormalizer,
    file_path: &Path,
) -> Result<bool, NormalizeError> {
    let content = file_reader::read_content(file_path)?;
    let normalized = normalizer.normalize_str(&content)?.to_graphql_string();
    Ok(content.trim_end() == normalized.trim_end())
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
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

        let normalizer = DocumentNormalizer::new()
            .eliminate_duplicates(!self.keep_duplicates);

        let mut unnormalized_paths = vec![];
        for file_path in &found.file_paths {
            match is_normalized(&normalizer, file_path) {
                Ok(true) => log::trace!("{file_path:?} is normalized."),
                Ok(false) => unnormalized_paths.push(file_path),
                Err(e) => return CommandResult::stderr(format_args!(
                    "{} Failed to normalize {file_path:?}: {e}",
                    output_utils::RED_X,
                )),
            }
        }

        if !unnormalized_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} {} of {} files are not normalized:\n{}",
                output_utils::RED_X,
                unnormalized_paths.len(),
                found.file_paths.len(),
                unnormalized_paths.iter()
                    .map(|path| format!("  * {}", path.display()))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            "{} All {} files are normalized.",
            output_utils::GREEN_CHECK,
            found.file_paths.len(),
        ))
    }
}
