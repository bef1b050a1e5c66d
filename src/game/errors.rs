use thiserror::Error;

/// Domain errors raised while mutating the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A proposed player position falls outside the grid. Recovered by the
    /// step engine and reported to the player as a message; never fatal.
    #[error("invalid direction")]
    InvalidDirection,
}
