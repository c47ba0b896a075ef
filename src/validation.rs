use std::collections::BTreeMap;

use thiserror::Error;

use crate::entities::{
    link, BuilderName, BuilderNameError, Description, DescriptionError, LinkError, LinkKind,
    NewBuild, ProjectName, ProjectNameError, SchoolName, SchoolNameError, Tag, TagSet,
    OTHER_SCHOOL,
};

/// One submission form, captured as plain input state. Validation never
/// mutates it; every edit produces a new state.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormState {
    pub project_name: String,
    pub builder_name: String,
    pub school: String,
    pub custom_school: String,
    pub github_url: String,
    pub website_url: String,
    pub artifact_url: String,
    pub video_url: String,
    pub description: String,
    pub tags: Vec<Tag>,
}

impl FormState {
    /// Selecting a tag that is already selected deselects it. Unknown tags
    /// cannot reach this point: the `Tag` type only holds vocabulary entries.
    pub fn with_tag_toggled(mut self, tag: Tag) -> FormState {
        match self.tags.iter().position(|t| *t == tag) {
            Some(index) => {
                self.tags.remove(index);
            }
            None => self.tags.push(tag),
        }
        self
    }

    /// The school value a submission would carry: the catalog entry, or the
    /// custom name when "Other" is selected.
    pub fn resolved_school(&self) -> &str {
        if self.school == OTHER_SCHOOL {
            self.custom_school.trim()
        } else {
            &self.school
        }
    }

    /// Converts a valid state into the submission the store accepts. Fails
    /// with the full report when any rule is violated.
    pub fn into_new_build(self) -> Result<NewBuild, ValidationReport> {
        let report = validate(&self);
        if !report.is_valid() {
            return Err(report);
        }

        let single = |field, err: FieldError| ValidationReport::single(field, err);
        Ok(NewBuild {
            project_name: ProjectName::try_from(self.project_name.as_str())
                .map_err(|e| single(Field::ProjectName, e.into()))?,
            builder_name: BuilderName::try_from(self.builder_name.as_str())
                .map_err(|e| single(Field::BuilderName, e.into()))?,
            school: SchoolName::try_from(self.resolved_school())
                .map_err(|e| single(Field::School, FieldError::School(e)))?,
            github_url: link::validate(LinkKind::Github, &self.github_url)
                .map_err(|e| single(Field::GithubUrl, e.into()))?,
            website_url: link::validate(LinkKind::Website, &self.website_url)
                .map_err(|e| single(Field::WebsiteUrl, e.into()))?,
            artifact_url: link::validate(LinkKind::Artifact, &self.artifact_url)
                .map_err(|e| single(Field::ArtifactUrl, e.into()))?,
            video_url: link::validate(LinkKind::Video, &self.video_url)
                .map_err(|e| single(Field::VideoUrl, e.into()))?,
            description: Description::try_from(self.description.as_str())
                .map_err(|e| single(Field::Description, e.into()))?,
            tags: TagSet::new(self.tags).map_err(|_| single(Field::Tags, FieldError::NoTags))?,
        })
    }
}

/// Every key a validation failure can be reported under. `ProjectLinks` is
/// the virtual key for the cross-field link rule; its position here fixes the
/// order failures are listed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Field {
    ProjectName,
    BuilderName,
    School,
    CustomSchool,
    GithubUrl,
    WebsiteUrl,
    ArtifactUrl,
    ProjectLinks,
    VideoUrl,
    Description,
    Tags,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::ProjectName,
        Field::BuilderName,
        Field::School,
        Field::CustomSchool,
        Field::GithubUrl,
        Field::WebsiteUrl,
        Field::ArtifactUrl,
        Field::ProjectLinks,
        Field::VideoUrl,
        Field::Description,
        Field::Tags,
    ];

    /// Wire name, matching the form's field names.
    pub fn name(&self) -> &'static str {
        match self {
            Field::ProjectName => "projectName",
            Field::BuilderName => "builderName",
            Field::School => "school",
            Field::CustomSchool => "customSchool",
            Field::GithubUrl => "githubUrl",
            Field::WebsiteUrl => "websiteUrl",
            Field::ArtifactUrl => "artifactUrl",
            Field::ProjectLinks => "projectLinks",
            Field::VideoUrl => "videoUrl",
            Field::Description => "description",
            Field::Tags => "tags",
        }
    }
}

/// A single field's failure. `Display` is the inline message shown next to
/// the field; [`blocker_label`] projects the same failure onto the short
/// submit-tooltip wording.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum FieldError {
    #[error(transparent)]
    ProjectName(#[from] ProjectNameError),
    #[error(transparent)]
    BuilderName(#[from] BuilderNameError),
    #[error(transparent)]
    School(SchoolNameError),
    #[error("Please enter your school name")]
    CustomSchoolMissing,
    #[error("School name must be 100 characters or less")]
    CustomSchoolTooLong,
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error(transparent)]
    Description(#[from] DescriptionError),
    #[error("Please select at least one tag")]
    NoTags,
    #[error("Please provide at least one project link (GitHub, Website, or Artifact)")]
    NoProjectLink,
}

/// Validates a single field, for on-blur / on-change feedback. The whole-form
/// pass reuses this, so both surfaces always agree.
pub fn validate_field(state: &FormState, field: Field) -> Option<FieldError> {
    match field {
        Field::ProjectName => ProjectName::try_from(state.project_name.as_str())
            .err()
            .map(FieldError::from),
        Field::BuilderName => BuilderName::try_from(state.builder_name.as_str())
            .err()
            .map(FieldError::from),
        Field::School => SchoolName::try_from(state.school.as_str())
            .err()
            .map(FieldError::School),
        Field::CustomSchool => {
            if state.school != OTHER_SCHOOL {
                return None;
            }
            match SchoolName::try_from(state.custom_school.as_str()) {
                Err(SchoolNameError::Empty) => Some(FieldError::CustomSchoolMissing),
                Err(SchoolNameError::TooLong) => Some(FieldError::CustomSchoolTooLong),
                Ok(_) => None,
            }
        }
        Field::GithubUrl => link::validate(LinkKind::Github, &state.github_url)
            .err()
            .map(FieldError::from),
        Field::WebsiteUrl => link::validate(LinkKind::Website, &state.website_url)
            .err()
            .map(FieldError::from),
        Field::ArtifactUrl => link::validate(LinkKind::Artifact, &state.artifact_url)
            .err()
            .map(FieldError::from),
        Field::VideoUrl => link::validate(LinkKind::Video, &state.video_url)
            .err()
            .map(FieldError::from),
        Field::Description => Description::try_from(state.description.as_str())
            .err()
            .map(FieldError::from),
        Field::Tags => state.tags.is_empty().then_some(FieldError::NoTags),
        Field::ProjectLinks => {
            let provided = [&state.github_url, &state.website_url, &state.artifact_url]
                .into_iter()
                .any(|value| !value.trim().is_empty());
            (!provided).then_some(FieldError::NoProjectLink)
        }
    }
}

/// The whole-form result: an ordered map from field to failure. Empty means
/// the submit button is enabled.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    fn single(field: Field, error: FieldError) -> Self {
        Self {
            errors: BTreeMap::from([(field, error)]),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Inline message for one field, as shown next to it.
    pub fn message(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(|e| e.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    /// First failure in field order; what a single-reason surface reports.
    pub fn first(&self) -> Option<(Field, &FieldError)> {
        self.iter().next()
    }

    /// The disabled-submit tooltip: short labels, one per failing field,
    /// projected from the same errors the inline messages come from.
    pub fn blockers(&self) -> Vec<&'static str> {
        self.iter()
            .map(|(field, error)| blocker_label(field, error))
            .collect()
    }
}

/// Whole-form validation. Runs every field rule plus the cross-field link
/// rule; "submit enabled" is exactly `is_valid()` of the result.
pub fn validate(state: &FormState) -> ValidationReport {
    let errors = Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(state, field).map(|error| (field, error)))
        .collect();
    ValidationReport { errors }
}

fn blocker_label(field: Field, error: &FieldError) -> &'static str {
    match (field, error) {
        (Field::ProjectName, _) => "Project name",
        (Field::BuilderName, _) => "Builder name",
        (Field::School, _) => "School",
        (Field::CustomSchool, _) => "Custom school name",
        (Field::GithubUrl, FieldError::Link(LinkError::GithubScheme)) => "GitHub URL must use HTTPS",
        (Field::GithubUrl, FieldError::Link(LinkError::GithubPath)) => "Complete GitHub repo URL",
        (Field::GithubUrl, _) => "Valid GitHub URL",
        (Field::WebsiteUrl, _) => "Valid website URL",
        (Field::ArtifactUrl, FieldError::Link(LinkError::Invalid)) => "Valid artifact URL",
        (Field::ArtifactUrl, _) => "Valid Claude artifact URL",
        (Field::ProjectLinks, _) => "At least one project link (GitHub/Website/Artifact)",
        (Field::VideoUrl, FieldError::Link(LinkError::VideoScheme)) => "Valid video URL protocol",
        (Field::VideoUrl, FieldError::Link(LinkError::Invalid)) => "Valid video URL",
        (Field::VideoUrl, _) => "Valid YouTube or Loom URL",
        (Field::Description, FieldError::Description(DescriptionError::TooLong)) => {
            "Description (250 chars max)"
        }
        (Field::Description, _) => "Description (50+ chars)",
        (Field::Tags, _) => "At least one tag",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_state() -> FormState {
        FormState {
            project_name: "Flashcard Tutor".to_string(),
            builder_name: "Sam Park".to_string(),
            school: "Stanford University".to_string(),
            custom_school: String::new(),
            github_url: "https://github.com/sam/flashcards".to_string(),
            website_url: String::new(),
            artifact_url: String::new(),
            video_url: String::new(),
            description: "A spaced-repetition tutor that writes its own flashcards from lecture notes.".to_string(),
            tags: vec![Tag::Productivity],
        }
    }

    #[test]
    fn a_complete_state_validates() {
        let report = validate(&valid_state());
        assert!(report.is_valid());
        assert!(report.blockers().is_empty());
    }

    #[test]
    fn all_links_empty_fails_the_cross_field_rule_alone() {
        let state = FormState {
            github_url: String::new(),
            website_url: String::new(),
            artifact_url: String::new(),
            ..valid_state()
        };
        let report = validate(&state);
        assert_eq!(
            report.message(Field::ProjectLinks).as_deref(),
            Some("Please provide at least one project link (GitHub, Website, or Artifact)")
        );
        // no individual link field is blamed
        assert!(report.error(Field::GithubUrl).is_none());
        assert_eq!(
            report.blockers(),
            vec!["At least one project link (GitHub/Website/Artifact)"]
        );
    }

    #[test]
    fn an_invalid_link_is_blamed_on_its_own_field() {
        let state = FormState {
            github_url: "https://github.com/onlyowner".to_string(),
            ..valid_state()
        };
        let report = validate(&state);
        assert_eq!(
            report.message(Field::GithubUrl).as_deref(),
            Some("Please enter a complete GitHub repository URL (github.com/username/repo)")
        );
        // the link is present, so the cross-field rule is satisfied
        assert!(report.error(Field::ProjectLinks).is_none());
        assert_eq!(report.blockers(), vec!["Complete GitHub repo URL"]);
    }

    #[test]
    fn custom_school_is_required_only_for_other() {
        let mut state = FormState {
            school: OTHER_SCHOOL.to_string(),
            custom_school: String::new(),
            ..valid_state()
        };
        assert_eq!(
            validate(&state).message(Field::CustomSchool).as_deref(),
            Some("Please enter your school name")
        );

        state.custom_school = "Hometown Polytechnic".to_string();
        assert!(validate(&state).is_valid());

        // populated but ignored when a catalog school is selected
        state.school = "Yale University".to_string();
        state.custom_school = "x".repeat(300);
        assert!(validate(&state).is_valid());
    }

    #[test]
    fn per_field_and_whole_form_agree() {
        let state = FormState {
            description: "too short".to_string(),
            video_url: "https://vimeo.com/1".to_string(),
            tags: Vec::new(),
            ..valid_state()
        };
        let report = validate(&state);
        for field in Field::ALL {
            assert_eq!(
                validate_field(&state, field).as_ref(),
                report.error(field),
                "field {:?} disagrees between the two paths",
                field
            );
        }
        assert!(!report.is_valid());
    }

    #[test]
    fn blockers_cover_exactly_the_failing_fields() {
        let state = FormState {
            project_name: String::new(),
            description: "d".repeat(251),
            ..valid_state()
        };
        let report = validate(&state);
        assert_eq!(
            report.blockers(),
            vec!["Project name", "Description (250 chars max)"]
        );
        assert_eq!(report.iter().count(), report.blockers().len());
    }

    #[test]
    fn field_names_match_the_wire_format() {
        assert_eq!(Field::ProjectLinks.name(), "projectLinks");
        assert_eq!(Field::CustomSchool.name(), "customSchool");
        assert_eq!(Field::GithubUrl.name(), "githubUrl");
    }

    #[test]
    fn toggling_a_tag_twice_removes_it() {
        let state = FormState::default()
            .with_tag_toggled(Tag::Game)
            .with_tag_toggled(Tag::Tool)
            .with_tag_toggled(Tag::Game);
        assert_eq!(state.tags, vec![Tag::Tool]);
    }

    #[test]
    fn into_new_build_normalizes_links_and_resolves_school() {
        let state = FormState {
            school: OTHER_SCHOOL.to_string(),
            custom_school: "  Hometown Polytechnic ".to_string(),
            github_url: "github.com/sam/flashcards".to_string(),
            ..valid_state()
        };
        let new_build = state.into_new_build().unwrap();
        assert_eq!(
            new_build.github_url.as_deref(),
            Some("https://github.com/sam/flashcards")
        );
        assert_eq!(String::from(new_build.school), "Hometown Polytechnic");
        assert!(new_build.website_url.is_none());
    }

    #[test]
    fn into_new_build_returns_the_report_on_failure() {
        let state = FormState {
            builder_name: String::new(),
            ..valid_state()
        };
        let report = state.into_new_build().unwrap_err();
        assert_eq!(
            report.message(Field::BuilderName).as_deref(),
            Some("Builder name is required")
        );
    }
}
