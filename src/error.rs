#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid max levels: {got}, must be at least 1")]
    InvalidMaxLevels { got: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
