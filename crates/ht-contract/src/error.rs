use ht_state::StateError;
use ht_types::CodecError;

/// Errors from contract operations.
///
/// `NotFound` and `AlreadyExists` are the two precondition failures the
/// contract itself raises; both are terminal for the invocation and leave
/// the world state untouched. The remaining variants propagate codec and
/// backend failures.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// No record exists at the given id.
    #[error("home {0} does not exist")]
    NotFound(String),

    /// A record already exists at the given id.
    #[error("home {0} already exists")]
    AlreadyExists(String),

    /// Record encoding or decoding failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Failure from the world-state backend.
    #[error(transparent)]
    State(#[from] StateError),
}

impl ContractError {
    /// The offending record id, when the error carries one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::NotFound(id) | Self::AlreadyExists(id) => Some(id),
            _ => None,
        }
    }
}

/// Result alias for contract operations.
pub type ContractResult<T> = Result<T, ContractError>;
