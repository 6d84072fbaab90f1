//! # Subcommands

use crate::PathResolver;
use std::path::PathBuf;

mod convert;
mod inspect;
mod sentences;

/// Subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Load a `category:tok,tok,...` sentence file and summarize it.
    Sentences(sentences::SentencesArgs),

    /// Summarize the splits of an encoding file.
    Inspect(inspect::InspectArgs),

    /// Convert an encoding file between container and table formats.
    Convert(convert::ConvertArgs),
}

/// Run a subcommand.
pub fn run(
    command: &Command,
    paths: &PathResolver,
) -> anyhow::Result<()> {
    match command {
        Command::Sentences(args) => sentences::run(args, paths),
        Command::Inspect(args) => inspect::run(args, paths),
        Command::Convert(args) => convert::run(args, paths),
    }
}

/// Options shared by subcommands that read encodings.
#[derive(clap::Args, Debug, Clone)]
pub struct SourceArgs {
    /// The encoding file to read.
    pub input: PathBuf,

    /// Input format; guessed from the extension when absent.
    #[arg(long)]
    pub from: Option<splitenc::EncodingFormat>,

    /// Header lines to skip when reading a table.
    #[arg(long, default_value_t = splitenc::table::DEFAULT_HEADER_LINES)]
    pub header_lines: usize,
}

impl SourceArgs {
    /// The resolved input format.
    pub fn format(&self) -> splitenc::EncodingFormat {
        self.from
            .unwrap_or_else(|| splitenc::EncodingFormat::from_path(&self.input))
    }
}

/// Load named splits from `source`, in either format.
pub fn load_named_splits(
    source: &SourceArgs,
    paths: &PathResolver,
) -> anyhow::Result<Vec<splitenc::NamedSplit<f64>>> {
    use anyhow::Context;
    use splitenc::EncodingFormat;

    let input = paths.resolve(&source.input);
    let splits = match source.format() {
        EncodingFormat::Container => {
            splitenc::container::load_named_encodings_path::<f64, _>(&input)
                .with_context(|| format!("failed to read container {}", input.display()))?
                .with_context(|| format!("no container at {}", input.display()))?
        }
        EncodingFormat::Table => splitenc::table::load_labeled_table_encodings_path::<f64, _>(
            &input,
            source.header_lines,
        )
        .with_context(|| format!("failed to read table {}", input.display()))?,
    };

    log::info!("read {} splits from {}", splits.len(), input.display());
    Ok(splits)
}
