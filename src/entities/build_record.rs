use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BuildId, BuilderName, Description, ProjectName, SchoolName, Tag, TagSet};

/// A showcased build as it is persisted and served. The link fields were
/// validated when the record was created and are opaque strings from then on;
/// absent links are omitted from the JSON document entirely.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRecord {
    pub id: BuildId,
    pub project_name: String,
    pub builder_name: String,
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub description: String,
    pub tags: Vec<Tag>,
    pub submitted_at: NaiveDate,
    #[serde(default)]
    pub featured: bool,
}

/// A fully validated submission that has no id yet. Only the store adapter
/// turns this into a [`BuildRecord`], which is how every stored record is
/// guaranteed to have passed validation.
#[derive(Clone, Debug)]
pub struct NewBuild {
    pub project_name: ProjectName,
    pub builder_name: BuilderName,
    pub school: SchoolName,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub artifact_url: Option<String>,
    pub video_url: Option<String>,
    pub description: Description,
    pub tags: TagSet,
}

impl NewBuild {
    pub fn into_record(self, id: BuildId, submitted_at: NaiveDate) -> BuildRecord {
        BuildRecord {
            id,
            project_name: self.project_name.into(),
            builder_name: self.builder_name.into(),
            school: self.school.into(),
            github_url: self.github_url,
            website_url: self.website_url,
            artifact_url: self.artifact_url,
            video_url: self.video_url,
            description: self.description.into(),
            tags: self.tags.into_vec(),
            submitted_at,
            featured: false,
        }
    }
}
