//! # splitenc-data-dir
//!
//! Resolves the directory that relative sentence and encoding paths are
//! read from and written to.

use directories_next::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Attempt to build a System/$USER [`ProjectDirs`] for splitenc.
///
/// Used to determine the default data directory.
pub fn splitenc_project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "crates", "splitenc")
}

/// Environment variable key to override the default data directory.
pub const SPLITENC_DATA_DIR: &str = "SPLITENC_DATA_DIR";

/// Get the data directory for splitenc.
///
/// The resolution order is:
/// 1. `path`, if present.
/// 2. [`SPLITENC_DATA_DIR`] env var.
/// 3. `project_dirs().data_dir()`
/// 4. `None`
pub fn resolve_data_dir<P: AsRef<Path>>(path: Option<P>) -> Option<PathBuf> {
    if let Some(path) = path {
        path.as_ref().to_path_buf().into()
    } else if let Ok(path) = env::var(SPLITENC_DATA_DIR) {
        PathBuf::from(path).into()
    } else if let Some(pds) = splitenc_project_dirs() {
        pds.data_dir().to_path_buf().into()
    } else {
        None
    }
}

/// Options for [`DataDir`].
#[derive(Clone, Default, Debug)]
pub struct DataDirOptions {
    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,
}

impl DataDirOptions {
    /// Set the data directory.
    pub fn with_data_dir<P: Into<PathBuf>>(
        self,
        data_dir: P,
    ) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }
}

/// A resolved data directory.
#[derive(Clone, Debug)]
pub struct DataDir {
    data_dir: PathBuf,
}

impl DataDir {
    /// Construct a new [`DataDir`], resolved via [`resolve_data_dir`].
    pub fn init(options: DataDirOptions) -> anyhow::Result<Self> {
        let Some(data_dir) = resolve_data_dir(options.data_dir) else {
            anyhow::bail!("Unable to resolve data dir.");
        };

        log::debug!("data dir: {}", data_dir.display());
        Ok(Self { data_dir })
    }

    /// The resolved directory.
    pub fn path(&self) -> &Path {
        &self.data_dir
    }

    /// Resolve a user-supplied path.
    ///
    /// Absolute paths are returned unchanged; relative paths are joined
    /// onto the data directory.
    pub fn resolve_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}
