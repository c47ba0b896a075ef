use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectName(String);

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ProjectNameError {
    #[error("Project name is required")]
    Empty,
    #[error("Project name must be 100 characters or less")]
    TooLong,
}

impl TryFrom<&str> for ProjectName {
    type Error = ProjectNameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            Err(ProjectNameError::Empty)
        } else if value.chars().count() > 100 {
            Err(ProjectNameError::TooLong)
        } else {
            Ok(Self(value.trim().to_string()))
        }
    }
}

impl From<ProjectName> for String {
    fn from(value: ProjectName) -> Self {
        value.0
    }
}
