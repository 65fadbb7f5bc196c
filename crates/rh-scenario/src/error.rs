use rh_core::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("script record {record}: {message}")]
    Parse {
        record:  usize,
        message: String,
    },

    #[error("command {index} ({command}) failed: {source}")]
    Command {
        index:   usize,
        command: &'static str,
        #[source]
        source:  FleetError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
