use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A reference list that cannot be loaded is a deployment fault, not a fact
/// about the input, so it surfaces as an error instead of a `false` verdict.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("reference list not found at {}", path.display())]
    Missing { path: PathBuf },

    #[error("reference list at {} could not be read", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
