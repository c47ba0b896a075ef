use thiserror::Error;

const MIN_CHARS: usize = 50;
const MAX_CHARS: usize = 250;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Description(String);

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum DescriptionError {
    #[error("Description is required")]
    Empty,
    /// Carries the number of characters still missing, for the live counter.
    #[error("Description must be at least 50 characters ({0} more needed)")]
    TooShort(usize),
    #[error("Description must be 250 characters or less")]
    TooLong,
}

impl TryFrom<&str> for Description {
    type Error = DescriptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let chars = value.chars().count();
        if value.trim().is_empty() {
            Err(DescriptionError::Empty)
        } else if chars < MIN_CHARS {
            Err(DescriptionError::TooShort(MIN_CHARS - chars))
        } else if chars > MAX_CHARS {
            Err(DescriptionError::TooLong)
        } else {
            Ok(Self(value.trim().to_string()))
        }
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}
