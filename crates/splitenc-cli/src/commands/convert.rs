use crate::PathResolver;
use crate::commands::{SourceArgs, load_named_splits};
use anyhow::Context;
use splitenc::container::save_named_encodings_path;
use splitenc::table::save_table_encodings_path;
use splitenc::{EncodingFormat, EncodingScalar, EncodingSplit, NamedSplit};
use std::path::{Path, PathBuf};

/// Element type for written containers.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DType {
    F32,
    F64,
}

/// Args for the `convert` subcommand.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// The encoding file to write.
    pub output: PathBuf,

    /// Output format; guessed from the extension when absent.
    #[arg(long)]
    pub to: Option<EncodingFormat>,

    /// Comma-separated split names, replacing the source names positionally.
    #[arg(long, value_delimiter = ',')]
    pub split_names: Option<Vec<String>>,

    /// Element type for container output.
    #[arg(long, value_enum, default_value_t = DType::F64)]
    pub dtype: DType,
}

fn rename_splits(
    splits: Vec<NamedSplit<f64>>,
    names: &[String],
) -> anyhow::Result<Vec<NamedSplit<f64>>> {
    anyhow::ensure!(
        names.len() == splits.len(),
        "got {} split names for {} splits",
        names.len(),
        splits.len()
    );

    Ok(splits
        .into_iter()
        .zip(names)
        .map(|(named, name)| NamedSplit::new(name.clone(), named.split))
        .collect())
}

fn save_container<T: EncodingScalar>(
    splits: &[NamedSplit<f64>],
    output: &Path,
) -> anyhow::Result<()> {
    let names: Vec<&str> = splits.iter().map(|s| s.name.as_str()).collect();
    let encodings: Vec<EncodingSplit<T>> = splits
        .iter()
        .map(|named| {
            named
                .split
                .iter()
                .map(|(id, values)| {
                    let values = values
                        .iter()
                        .map(|&v| T::from(v))
                        .collect::<Option<Vec<T>>>()
                        .with_context(|| format!("value of {id:?} not representable"))?;
                    Ok::<_, anyhow::Error>((id.clone(), values))
                })
                .collect::<anyhow::Result<EncodingSplit<T>>>()
        })
        .collect::<anyhow::Result<_>>()?;

    save_named_encodings_path(&encodings, &names, output)?;
    Ok(())
}

pub fn run(
    args: &ConvertArgs,
    paths: &PathResolver,
) -> anyhow::Result<()> {
    let mut splits = load_named_splits(&args.source, paths)?;
    if let Some(names) = &args.split_names {
        splits = rename_splits(splits, names)?;
    }

    let output = paths.resolve(&args.output);
    let format = args
        .to
        .unwrap_or_else(|| EncodingFormat::from_path(&args.output));

    let written = match (format, args.dtype) {
        (EncodingFormat::Container, DType::F32) => save_container::<f32>(&splits, &output),
        (EncodingFormat::Container, DType::F64) => save_container::<f64>(&splits, &output),
        (EncodingFormat::Table, _) => {
            save_table_encodings_path(&output, &splits).map_err(anyhow::Error::from)
        }
    };
    written.with_context(|| format!("failed to write {format} {}", output.display()))?;

    log::info!("wrote {} splits to {}", splits.len(), output.display());
    Ok(())
}
