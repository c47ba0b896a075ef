use thiserror::Error;
use url::Url;

const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];
const ARTIFACT_HOST: &str = "claude.ai";
const ARTIFACT_PATH_PREFIX: &str = "/artifacts/";
const VIDEO_HOSTS: &[&str] = &[
    "www.youtube.com",
    "youtube.com",
    "youtu.be",
    "www.loom.com",
    "loom.com",
];

/// The link shapes a submission may carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LinkKind {
    Github,
    Website,
    Artifact,
    Video,
}

/// Trims the input and prepends `https://` when no scheme is given.
/// Whitespace-only input normalizes to the empty string ("not provided").
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LinkError {
    #[error("Please enter a valid URL")]
    Invalid,
    #[error("Please enter a valid GitHub URL")]
    GithubHost,
    #[error("GitHub URL must use HTTPS")]
    GithubScheme,
    #[error("Please enter a complete GitHub repository URL (github.com/username/repo)")]
    GithubPath,
    #[error("Please enter a valid Claude artifact URL (claude.ai)")]
    ArtifactHost,
    #[error("Artifact URL must be in format: claude.ai/artifacts/...")]
    ArtifactPath,
    #[error("Artifact URL must use HTTPS")]
    ArtifactScheme,
    #[error("Please enter a valid YouTube or Loom URL")]
    VideoHost,
    #[error("URL must use HTTP or HTTPS")]
    VideoScheme,
}

/// Validates a raw link field. Empty input is valid-and-absent; non-empty
/// input comes back normalized. The error variant identifies the exact
/// violation so callers can project it onto different message surfaces.
pub fn validate(kind: LinkKind, raw: &str) -> Result<Option<String>, LinkError> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Ok(None);
    }

    let url = Url::parse(&normalized).map_err(|_| LinkError::Invalid)?;
    let host = url.host_str().unwrap_or("");

    match kind {
        LinkKind::Github => {
            if !GITHUB_HOSTS.contains(&host) {
                return Err(LinkError::GithubHost);
            }
            if url.scheme() != "https" {
                return Err(LinkError::GithubScheme);
            }
            // owner + repo at minimum
            let segments = url.path().split('/').filter(|s| !s.is_empty()).count();
            if segments < 2 {
                return Err(LinkError::GithubPath);
            }
        }
        LinkKind::Website => {}
        LinkKind::Artifact => {
            if host != ARTIFACT_HOST {
                return Err(LinkError::ArtifactHost);
            }
            if !url.path().starts_with(ARTIFACT_PATH_PREFIX) {
                return Err(LinkError::ArtifactPath);
            }
            if url.scheme() != "https" {
                return Err(LinkError::ArtifactScheme);
            }
        }
        LinkKind::Video => {
            if !VIDEO_HOSTS.contains(&host) {
                return Err(LinkError::VideoHost);
            }
            if url.scheme() != "https" && url.scheme() != "http" {
                return Err(LinkError::VideoScheme);
            }
        }
    }

    Ok(Some(normalized))
}
