//! In-memory repository used by the pipeline tests

use std::cell::RefCell;
use std::collections::HashMap;

use manigen_config::Settings;
use manigen_github::{Asset, GithubError, Release, RepositoryApi};

#[derive(Default)]
pub struct FakeRepository {
    pub releases: Option<Vec<Release>>,
    /// (path, ref) -> content
    pub files: HashMap<(String, String), String>,
    /// (path, ref) pairs that fail with a server error
    pub broken_files: Vec<(String, String)>,
    /// url -> body; unknown URLs fail with 404
    pub downloads: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeRepository {
    pub fn with_releases(releases: Vec<Release>) -> Self {
        FakeRepository {
            releases: Some(releases),
            ..Default::default()
        }
    }

    pub fn file(mut self, path: &str, git_ref: &str, content: &str) -> Self {
        self.files
            .insert((path.to_string(), git_ref.to_string()), content.to_string());
        self
    }

    pub fn broken_file(mut self, path: &str, git_ref: &str) -> Self {
        self.broken_files
            .push((path.to_string(), git_ref.to_string()));
        self
    }

    pub fn download(mut self, url: &str, body: &str) -> Self {
        self.downloads.insert(url.to_string(), body.to_string());
        self
    }

    pub fn requested(&self, needle: &str) -> bool {
        self.requests.borrow().iter().any(|r| r.contains(needle))
    }
}

impl RepositoryApi for FakeRepository {
    fn list_releases(&self) -> Result<Vec<Release>, GithubError> {
        self.requests.borrow_mut().push("releases".to_string());
        self.releases.clone().ok_or_else(|| GithubError::Status {
            url: "https://api.github.test/repos/acme/demo/releases".to_string(),
            status: 500,
        })
    }

    fn file_content(&self, path: &str, git_ref: &str) -> Result<Option<String>, GithubError> {
        self.requests
            .borrow_mut()
            .push(format!("contents/{}@{}", path, git_ref));
        let key = (path.to_string(), git_ref.to_string());
        if self.broken_files.contains(&key) {
            return Err(GithubError::Status {
                url: format!("https://api.github.test/contents/{}", path),
                status: 502,
            });
        }
        Ok(self.files.get(&key).cloned())
    }

    fn download_text(&self, url: &str) -> Result<String, GithubError> {
        self.requests.borrow_mut().push(format!("download {}", url));
        self.downloads
            .get(url)
            .cloned()
            .ok_or_else(|| GithubError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub fn release(tag: &str, assets: &[&str]) -> Release {
    Release {
        tag_name: tag.to_string(),
        draft: false,
        prerelease: false,
        published_at: Some("2024-03-01T12:00:00Z".to_string()),
        body: Some(format!("Changes in {}", tag)),
        assets: assets
            .iter()
            .map(|name| Asset {
                name: (*name).to_string(),
                browser_download_url: asset_url(tag, name),
            })
            .collect(),
    }
}

pub fn asset_url(tag: &str, name: &str) -> String {
    format!(
        "https://github.test/acme/demo/releases/download/{}/{}",
        tag, name
    )
}

pub fn settings(work_dir: &std::path::Path) -> Option<Settings> {
    Settings::from_lookup(|key| match key {
        "GITHUB_REPOSITORY" => Some("acme/demo".to_string()),
        "GITHUB_TOKEN" => Some("secret".to_string()),
        _ => None,
    })
    .ok()
    .map(|s| s.with_work_dir(work_dir))
}
