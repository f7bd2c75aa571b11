use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreedError {
    #[error("a game needs at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GreedError>;
