//! Kernel error types.
//!
//! Almost nothing in the theme layer is allowed to fail a render: missing
//! data omits a node, bad exclusion config means no exclusions, dangling
//! ordering hints append at the end. What remains is the config-store file
//! boundary used by the admin CLI; platform-level faults from host
//! collaborators propagate unchanged as `anyhow::Error`.

use thiserror::Error;

/// Kernel errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config store at {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode config store")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias using the kernel error.
pub type Result<T> = std::result::Result<T, Error>;
