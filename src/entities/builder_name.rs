use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuilderName(String);

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum BuilderNameError {
    #[error("Builder name is required")]
    Empty,
    #[error("Builder name must be 50 characters or less")]
    TooLong,
}

impl TryFrom<&str> for BuilderName {
    type Error = BuilderNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(BuilderNameError::Empty)
        } else if value.chars().count() > 50 {
            Err(BuilderNameError::TooLong)
        } else {
            Ok(Self(value.trim().to_string()))
        }
    }
}

impl From<BuilderName> for String {
    fn from(value: BuilderName) -> Self {
        value.0
    }
}
