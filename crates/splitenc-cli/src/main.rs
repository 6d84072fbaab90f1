use clap::Parser;
use splitenc_data_dir::{DataDir, DataDirOptions};
use std::path::{Path, PathBuf};

mod commands;

/// Inspect and convert split-grouped encoding files.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory that relative paths are resolved against.
    ///
    /// Falls back to `$SPLITENC_DATA_DIR`, then to the per-user splitenc
    /// data directory. Absolute paths are used as given.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silence log output.
    #[arg(short, long, default_value = "false", global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: commands::Command,
}

/// Resolves user-supplied paths for the subcommands.
#[derive(Debug, Clone)]
pub struct PathResolver {
    data_dir: DataDir,
}

impl PathResolver {
    /// Build a resolver from the global args.
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mut options = DataDirOptions::default();
        if let Some(dir) = &args.data_dir {
            options = options.with_data_dir(dir);
        }

        Ok(Self {
            data_dir: DataDir::init(options)?,
        })
    }

    /// Resolve `path` against the data directory.
    pub fn resolve<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> PathBuf {
        self.data_dir.resolve_path(path)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    stderrlog::new()
        .module(module_path!())
        .module("splitenc")
        .module("splitenc_data_dir")
        .quiet(args.quiet)
        .verbosity(args.verbose as usize + 1)
        .init()?;

    log::debug!("{args:#?}");

    let paths = PathResolver::from_args(&args)?;
    commands::run(&args.command, &paths)
}
