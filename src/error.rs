use thiserror::Error;

/// Errors raised while resolving start-up parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GardenError {
    #[error("invalid color {0:?}: expected a hex value like #ff69b4")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, GardenError>;
