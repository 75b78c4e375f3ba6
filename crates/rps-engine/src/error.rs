//! Engine error type

/// Errors surfaced to the caller of the engine.
///
/// The only failure the engine knows about is a caller handing it something
/// that is not one of the three moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Input could not be interpreted as Rock, Paper or Scissors.
    InvalidMove(String),
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidMove(input) => {
                write!(f, "invalid move {:?}: expected Rock, Paper or Scissors", input)
            }
        }
    }
}

impl std::error::Error for EngineError {}
