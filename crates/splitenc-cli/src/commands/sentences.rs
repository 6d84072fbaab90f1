use crate::PathResolver;
use anyhow::Context;
use std::path::PathBuf;

/// Args for the `sentences` subcommand.
#[derive(clap::Args, Debug)]
pub struct SentencesArgs {
    /// A `category:tok,tok,...` file.
    pub input: PathBuf,

    /// Print each line's category alongside its tokens.
    #[arg(long, default_value = "false")]
    pub labeled: bool,

    /// Print at most this many sentences.
    #[arg(long, default_value_t = 10)]
    pub show: usize,
}

pub fn run(
    args: &SentencesArgs,
    paths: &PathResolver,
) -> anyhow::Result<()> {
    let input = paths.resolve(&args.input);

    if args.labeled {
        let sents = splitenc::sentences::load_labeled_sentences_path(&input)
            .with_context(|| format!("failed to read sentences {}", input.display()))?;

        println!("sentences: {}", sents.len());
        for sent in sents.iter().take(args.show) {
            println!("{}\t{}", sent.category, sent.tokens.join(" | "));
        }
    } else {
        let sents = splitenc::sentences::load_sentences_path(&input)
            .with_context(|| format!("failed to read sentences {}", input.display()))?;

        println!("sentences: {}", sents.len());
        for tokens in sents.iter().take(args.show) {
            println!("{}", tokens.join(" | "));
        }
    }

    Ok(())
}
