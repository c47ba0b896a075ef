use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::entities::{BuildRecord, Tag};
use crate::ports::BuildsRepository;
use crate::validation::FormState;

/// Wire shape of a submission. Everything is optional at this layer so that
/// a missing key answers with a reason instead of a bare deserialization
/// error; `tags` stays a raw JSON value until its shape has been checked.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub project_name: Option<String>,
    pub builder_name: Option<String>,
    pub school: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,
    pub artifact_url: Option<String>,
    pub video_url: Option<String>,
    pub description: Option<String>,
    pub tags: Option<serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum CreateBuildError {
    /// The submission was rejected before touching the store; the message is
    /// safe to show to the submitter.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

fn rejected(reason: &str) -> CreateBuildError {
    CreateBuildError::Rejected(reason.to_string())
}

/// Validates a submission and appends it to the store. Clients validate
/// before posting, but everything is re-checked here; nothing reaches the
/// store otherwise.
pub async fn create<R>(
    repo: &mut R,
    now: NaiveDate,
    request: SubmitRequest,
) -> Result<BuildRecord, CreateBuildError>
where
    R: BuildsRepository<Error = anyhow::Error> + Send + ?Sized,
{
    let project_name = request.project_name.unwrap_or_default();
    let builder_name = request.builder_name.unwrap_or_default();
    let school = request.school.unwrap_or_default();
    let description = request.description.unwrap_or_default();

    if project_name.is_empty()
        || builder_name.is_empty()
        || school.is_empty()
        || description.is_empty()
        || matches!(&request.tags, None | Some(serde_json::Value::Null))
    {
        return Err(rejected("Missing required fields"));
    }

    let tag_values = match request.tags {
        Some(serde_json::Value::Array(values)) if !values.is_empty() => values,
        _ => return Err(rejected("At least one tag is required")),
    };

    let github_url = request.github_url.unwrap_or_default();
    let website_url = request.website_url.unwrap_or_default();
    let artifact_url = request.artifact_url.unwrap_or_default();
    if github_url.is_empty() && website_url.is_empty() && artifact_url.is_empty() {
        return Err(rejected(
            "At least one project link required (GitHub, Website, or Artifact)",
        ));
    }

    let mut tags = Vec::new();
    for value in &tag_values {
        let name = value
            .as_str()
            .ok_or_else(|| rejected("At least one tag is required"))?;
        let tag =
            Tag::try_from(name).map_err(|err| CreateBuildError::Rejected(err.to_string()))?;
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }

    let form = FormState {
        project_name,
        builder_name,
        school,
        custom_school: String::new(),
        github_url,
        website_url,
        artifact_url,
        video_url: request.video_url.unwrap_or_default(),
        description,
        tags,
    };

    let new_build = form.into_new_build().map_err(|report| {
        let reason = report
            .first()
            .map(|(_, error)| error.to_string())
            .unwrap_or_else(|| "Invalid submission".to_string());
        CreateBuildError::Rejected(reason)
    })?;

    Ok(repo.append(now, new_build).await?)
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::entities::{BuildId, NewBuild};

    /// Vec-backed repository, enough to exercise the command in isolation.
    #[derive(Default)]
    struct InMemoryRepository {
        builds: Vec<BuildRecord>,
    }

    #[async_trait]
    impl BuildsRepository for InMemoryRepository {
        type Error = anyhow::Error;

        async fn read_all(&mut self) -> Result<Vec<BuildRecord>, Self::Error> {
            Ok(self.builds.clone())
        }

        async fn append(
            &mut self,
            now: NaiveDate,
            new: NewBuild,
        ) -> Result<BuildRecord, Self::Error> {
            let id = BuildId::next(self.builds.iter().map(|build| build.id));
            let record = new.into_record(id, now);
            self.builds.push(record.clone());
            Ok(record)
        }
    }

    fn now() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
    }

    fn request() -> SubmitRequest {
        SubmitRequest {
            project_name: Some("Recipe Robot".to_string()),
            builder_name: Some("Ada Okafor".to_string()),
            school: Some("University of Lagos".to_string()),
            github_url: Some("https://github.com/ada/recipe-robot".to_string()),
            description: Some(
                "Turns whatever is left in the fridge into a week of dinner plans.".to_string(),
            ),
            tags: Some(serde_json::json!(["creative", "tool"])),
            ..Default::default()
        }
    }

    async fn create_with(request: SubmitRequest) -> Result<BuildRecord, CreateBuildError> {
        let mut repo = InMemoryRepository::default();
        create(&mut repo, now(), request).await
    }

    fn rejection(result: Result<BuildRecord, CreateBuildError>) -> String {
        match result {
            Err(CreateBuildError::Rejected(reason)) => reason,
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn a_valid_submission_is_stored() {
        let record = create_with(request()).await.unwrap();
        assert_eq!(record.id.to_string(), "001");
        assert_eq!(record.project_name, "Recipe Robot");
        assert_eq!(record.tags, vec![Tag::Creative, Tag::Tool]);
        assert_eq!(record.submitted_at, now());
    }

    #[tokio::test]
    async fn sequential_submissions_get_consecutive_ids() {
        let mut repo = InMemoryRepository::default();
        let first = create(&mut repo, now(), request()).await.unwrap();
        let second = create(&mut repo, now(), request()).await.unwrap();
        assert_eq!(u32::from(second.id), u32::from(first.id) + 1);
    }

    #[tokio::test]
    async fn missing_required_fields_are_rejected() {
        let reason = rejection(
            create_with(SubmitRequest {
                builder_name: None,
                ..request()
            })
            .await,
        );
        assert_eq!(reason, "Missing required fields");

        let reason = rejection(
            create_with(SubmitRequest {
                tags: None,
                ..request()
            })
            .await,
        );
        assert_eq!(reason, "Missing required fields");
    }

    #[tokio::test]
    async fn tags_must_be_a_non_empty_list_of_known_tags() {
        let reason = rejection(
            create_with(SubmitRequest {
                tags: Some(serde_json::json!([])),
                ..request()
            })
            .await,
        );
        assert_eq!(reason, "At least one tag is required");

        let reason = rejection(
            create_with(SubmitRequest {
                tags: Some(serde_json::json!("tool")),
                ..request()
            })
            .await,
        );
        assert_eq!(reason, "At least one tag is required");

        let reason = rejection(
            create_with(SubmitRequest {
                tags: Some(serde_json::json!(["tool", "webscale"])),
                ..request()
            })
            .await,
        );
        assert_eq!(reason, "Unknown tag: webscale");
    }

    #[tokio::test]
    async fn a_link_must_be_present_even_when_everything_else_is_valid() {
        let reason = rejection(
            create_with(SubmitRequest {
                github_url: None,
                website_url: None,
                artifact_url: None,
                ..request()
            })
            .await,
        );
        assert_eq!(
            reason,
            "At least one project link required (GitHub, Website, or Artifact)"
        );
    }

    #[tokio::test]
    async fn field_rules_are_rechecked_server_side() {
        let reason = rejection(
            create_with(SubmitRequest {
                description: Some("too short".to_string()),
                ..request()
            })
            .await,
        );
        assert_eq!(
            reason,
            "Description must be at least 50 characters (41 more needed)"
        );

        let reason = rejection(
            create_with(SubmitRequest {
                github_url: Some("https://github.com/just-a-user".to_string()),
                website_url: None,
                ..request()
            })
            .await,
        );
        assert_eq!(
            reason,
            "Please enter a complete GitHub repository URL (github.com/username/repo)"
        );
    }

    #[tokio::test]
    async fn links_are_normalized_before_storage() {
        let record = create_with(SubmitRequest {
            github_url: Some("github.com/ada/recipe-robot".to_string()),
            ..request()
        })
        .await
        .unwrap();
        assert_eq!(
            record.github_url.as_deref(),
            Some("https://github.com/ada/recipe-robot")
        );
    }
}
