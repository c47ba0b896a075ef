use std::fmt;
use std::str::FromStr;

use derive_more::{From, Into};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Sequential build identifier. Rendered as a zero-padded decimal with a
/// minimum width of three digits ("001", "042"); widths grow naturally past
/// "999".
#[derive(Clone, Copy, Debug, From, Into, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BuildId(u32);

const MIN_WIDTH: usize = 3;

impl BuildId {
    /// The id the store assigns to the next appended record:
    /// `max(existing) + 1`, starting at "001" for an empty store.
    pub fn next(existing: impl IntoIterator<Item = BuildId>) -> BuildId {
        let max = existing.into_iter().map(u32::from).max().unwrap_or(0);
        BuildId(max + 1)
    }
}

impl fmt::Display for BuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.0, width = MIN_WIDTH)
    }
}

#[derive(Error, Debug, Clone)]
#[error("Build id must be a decimal number: {0}")]
pub struct ParseBuildIdError(String);

impl FromStr for BuildId {
    type Err = ParseBuildIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<u32>()
            .map(BuildId)
            .map_err(|_| ParseBuildIdError(value.to_string()))
    }
}

impl Serialize for BuildId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BuildId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_three_digits() {
        assert_eq!(BuildId::from(1).to_string(), "001");
        assert_eq!(BuildId::from(42).to_string(), "042");
        assert_eq!(BuildId::from(1234).to_string(), "1234");
    }

    #[test]
    fn next_takes_the_max_over_all_known_ids() {
        let ids = [BuildId::from(2), BuildId::from(7), BuildId::from(3)];
        assert_eq!(BuildId::next(ids), BuildId::from(8));
        assert_eq!(BuildId::next([]), BuildId::from(1));
    }

    #[test]
    fn round_trips_through_json() {
        let id: BuildId = serde_json::from_str(r#""007""#).unwrap();
        assert_eq!(id, BuildId::from(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""007""#);
        assert!(serde_json::from_str::<BuildId>(r#""abc""#).is_err());
    }
}
