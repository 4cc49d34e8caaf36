//! Local preflight for a pfile prefix.
//!
//! A pfile dataset is three files sharing a prefix: `.pgen` (genotypes), `.psam`
//! (samples) and `.pvar` (variants). The command builder treats the prefix as
//! opaque; this check is only advisory because the backend may resolve it against
//! a different filesystem.

use std::path::PathBuf;

pub const PFILE_EXTENSIONS: [&str; 3] = ["pgen", "psam", "pvar"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PfileTarget {
    prefix: String,
}

impl PfileTarget {
    pub fn from_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn pgen_path(&self) -> PathBuf {
        self.companion("pgen")
    }

    pub fn psam_path(&self) -> PathBuf {
        self.companion("psam")
    }

    pub fn pvar_path(&self) -> PathBuf {
        self.companion("pvar")
    }

    pub fn companion_paths(&self) -> Vec<PathBuf> {
        PFILE_EXTENSIONS.iter().map(|ext| self.companion(ext)).collect()
    }

    /// Companion files that do not exist locally.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        self.companion_paths()
            .into_iter()
            .filter(|path| !path.exists())
            .collect()
    }

    fn companion(&self, ext: &str) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.prefix, ext))
    }
}
