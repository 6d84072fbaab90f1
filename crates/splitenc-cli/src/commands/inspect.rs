use crate::PathResolver;
use crate::commands::{SourceArgs, load_named_splits};
use anyhow::Context;
use splitenc::EncodingFormat;
use splitenc::container::{SplitSummary, inspect_container_path};
use std::collections::BTreeSet;

/// Args for the `inspect` subcommand.
#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(
    args: &InspectArgs,
    paths: &PathResolver,
) -> anyhow::Result<()> {
    let source = &args.source;

    let splits = match source.format() {
        EncodingFormat::Container => {
            let input = paths.resolve(&source.input);
            let summary = inspect_container_path(&input)
                .with_context(|| format!("failed to read container {}", input.display()))?
                .with_context(|| format!("no container at {}", input.display()))?;

            println!("format: container ({:?})", summary.dtype);
            summary.splits
        }
        EncodingFormat::Table => {
            println!("format: table");
            load_named_splits(source, paths)?
                .into_iter()
                .map(|named| SplitSummary {
                    dims: named
                        .split
                        .values()
                        .map(Vec::len)
                        .collect::<BTreeSet<_>>()
                        .into_iter()
                        .collect(),
                    members: named.split.len(),
                    name: named.name,
                })
                .collect()
        }
    };

    println!("splits: {}", splits.len());
    for split in &splits {
        let dims = split
            .dims
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!("- {}: {} members, dims [{}]", split.name, split.members, dims);
    }

    Ok(())
}
