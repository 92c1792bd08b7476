//! Error types for the dice engine.

/// Errors that can occur while configuring a roll or reading a character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The text does not have the `<count>d<difficulty>` shape.
    #[error("failed to parse dice string: {0:?}")]
    Parse(String),

    /// The difficulty lies outside `1..=10`.
    #[error("invalid difficulty number: {0} (must be 1-10)")]
    Difficulty(u32),

    /// The pool would roll zero dice.
    #[error("invalid dice number: a roll needs at least one die")]
    NoDice,

    /// A core attribute is absent from the character or scored zero.
    #[error("character is missing required trait '{0}'")]
    MissingTrait(String),

    /// A character sheet could not be decoded.
    #[error("invalid character sheet: {0}")]
    InvalidSheet(String),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
