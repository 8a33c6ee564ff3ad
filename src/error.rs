//! Domain errors raised while building documentation records.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// More @param tags than the declaration has arguments.
    #[error("parameter mismatch for method '{method}'")]
    ParamMismatch {
        method: String,
        /// (argument, description) pairs as documented so far
        documented: Vec<(String, String)>,
        arguments: Vec<String>,
    },
}

impl BuildError {
    /// Multi-line report printed to stdout before the process exits.
    pub fn diagnostic(&self) -> String {
        match self {
            BuildError::ParamMismatch {
                method,
                documented,
                arguments,
            } => format!(
                "Parameter mismatch for method '{}':\nDocumented params: {:?}\nArguments: {:?}",
                method, documented, arguments
            ),
        }
    }
}
