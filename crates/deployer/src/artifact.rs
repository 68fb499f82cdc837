//! Compiled contract artifacts.

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use alloy_primitives::Bytes;
use serde::Deserialize;
use thiserror::Error;

/// Errors loading a compiled artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact file could not be opened.
    #[error("failed to open artifact {path}: {source}")]
    Open {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The artifact JSON was malformed.
    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// A compiled contract: ABI plus creation bytecode, as produced by the
/// contract build under `build/<Name>.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// The contract ABI, kept verbatim.
    pub abi: serde_json::Value,
    /// Hex-encoded creation bytecode.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Loads `<dir>/<name>.json`.
    pub fn load(dir: &Path, name: &str) -> Result<Self, ArtifactError> {
        let path = dir.join(format!("{name}.json"));
        let file = File::open(&path)
            .map_err(|source| ArtifactError::Open { path: path.clone(), source })?;
        serde_json::from_reader(file).map_err(|source| ArtifactError::Parse { path, source })
    }
}
