//! Blocking GitHub REST client

use std::time::Duration;

use manigen_config::{Repository, Settings, USER_AGENT};
use tracing::debug;

use crate::errors::GithubError;
use crate::types::{decode_content, ContentResponse, Release};

const ACCEPT: &str = "application/vnd.github.v3+json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// The repository operations the manifest pipeline needs
pub trait RepositoryApi {
    /// All releases, in the order the API returns them (first page only)
    fn list_releases(&self) -> Result<Vec<Release>, GithubError>;

    /// Text of `path` at `git_ref`, or `None` when the file does not exist
    /// there or is empty
    fn file_content(&self, path: &str, git_ref: &str) -> Result<Option<String>, GithubError>;

    /// Body of a release asset fetched by its direct download URL
    fn download_text(&self, url: &str) -> Result<String, GithubError>;
}

/// [`RepositoryApi`] backed by the GitHub REST API
pub struct GithubClient {
    agent: ureq::Agent,
    api_url: String,
    repository: Repository,
    authorization: String,
}

impl GithubClient {
    pub fn new(settings: &Settings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();

        GithubClient {
            agent,
            api_url: settings.api_url.clone(),
            repository: settings.repository.clone(),
            authorization: format!("token {}", settings.token),
        }
    }

    /// URL below `/repos/{owner}/{name}/`
    pub fn repo_url(&self, tail: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, self.repository.owner, self.repository.name, tail
        )
    }

    fn api_get(&self, url: &str) -> ureq::Request {
        self.agent
            .get(url)
            .set("Authorization", &self.authorization)
            .set("Accept", ACCEPT)
    }
}

impl RepositoryApi for GithubClient {
    fn list_releases(&self) -> Result<Vec<Release>, GithubError> {
        let url = self.repo_url("releases");
        debug!("GET {}", url);

        let response = self
            .api_get(&url)
            .call()
            .map_err(|err| GithubError::from_ureq(&url, err))?;
        let releases: Vec<Release> = response
            .into_json()
            .map_err(|source| GithubError::Body {
                url: url.clone(),
                source,
            })?;

        debug!("Received {} releases", releases.len());
        Ok(releases)
    }

    fn file_content(&self, path: &str, git_ref: &str) -> Result<Option<String>, GithubError> {
        let url = self.repo_url(&format!("contents/{}", path));
        debug!("GET {} at ref {}", url, git_ref);

        let response = match self.api_get(&url).query("ref", git_ref).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => {
                debug!("{} not found at {}", path, git_ref);
                return Ok(None);
            }
            Err(err) => return Err(GithubError::from_ureq(&url, err)),
        };

        let payload: ContentResponse =
            response
                .into_json()
                .map_err(|source| GithubError::Body {
                    url: url.clone(),
                    source,
                })?;

        let Some(content) = payload.content.filter(|c| !c.trim().is_empty()) else {
            return Ok(None);
        };

        let text = match payload.encoding.as_deref() {
            None | Some("base64") => decode_content(&content)?,
            Some(_) => content,
        };

        Ok(Some(text).filter(|t| !t.is_empty()))
    }

    fn download_text(&self, url: &str) -> Result<String, GithubError> {
        debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|err| GithubError::from_ureq(url, err))?;

        if response.status() != 200 {
            return Err(GithubError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.into_string().map_err(|source| GithubError::Body {
            url: url.to_string(),
            source,
        })
    }
}
