use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing document exists but does not hold a list of sites.
    #[error("catalog document {location} is corrupt: {reason}")]
    CorruptData { location: String, reason: String },
    /// Reading or writing the backing document failed.
    #[error("catalog document {location} I/O failed: {reason}")]
    Persistence { location: String, reason: String },
}

impl StoreError {
    pub fn corrupt(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptData {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub fn persistence(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Persistence {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}
