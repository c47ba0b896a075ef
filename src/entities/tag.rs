use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed tag vocabulary. Anything outside it is rejected outright, never
/// silently dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "productivity")]
    Productivity,
    #[serde(rename = "automation")]
    Automation,
    #[serde(rename = "creative")]
    Creative,
    #[serde(rename = "tool")]
    Tool,
    #[serde(rename = "data analysis")]
    DataAnalysis,
    #[serde(rename = "game")]
    Game,
}

impl Tag {
    pub const ALL: [Tag; 6] = [
        Tag::Productivity,
        Tag::Automation,
        Tag::Creative,
        Tag::Tool,
        Tag::DataAnalysis,
        Tag::Game,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Productivity => "productivity",
            Tag::Automation => "automation",
            Tag::Creative => "creative",
            Tag::Tool => "tool",
            Tag::DataAnalysis => "data analysis",
            Tag::Game => "game",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("Unknown tag: {0}")]
pub struct UnknownTagError(String);

impl TryFrom<&str> for Tag {
    type Error = UnknownTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == value)
            .ok_or_else(|| UnknownTagError(value.to_string()))
    }
}

/// Non-empty, duplicate-free tag selection in the order the tags were chosen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagSet(Vec<Tag>);

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum TagSetError {
    #[error("Please select at least one tag")]
    Empty,
    #[error(transparent)]
    Unknown(#[from] UnknownTagError),
}

impl TagSet {
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Result<Self, TagSetError> {
        let mut selected = Vec::new();
        for tag in tags {
            if !selected.contains(&tag) {
                selected.push(tag);
            }
        }
        if selected.is_empty() {
            Err(TagSetError::Empty)
        } else {
            Ok(Self(selected))
        }
    }

    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<Self, TagSetError> {
        let tags = names
            .into_iter()
            .map(Tag::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tags)
    }

    pub fn tags(&self) -> &[Tag] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Tag> {
        self.0
    }
}
