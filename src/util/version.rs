use std::fmt;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

pub const APP_NAME: &str = "Carada";
pub const APP_REPO_URL: &str = "https://github.com/skynatbs/carada";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Set by the build script when the checkout has a reachable tag.
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const LATEST_RELEASE_URL: &str = "https://api.github.com/repos/skynatbs/carada/releases/latest";

#[derive(Clone, Debug)]
pub struct UpdateInfo {
    pub current: Version,
    pub latest: Version,
    pub latest_tag: String,
}

impl UpdateInfo {
    pub fn update_available(&self) -> bool {
        self.latest > self.current
    }
}

impl fmt::Display for UpdateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.update_available() {
            write!(
                f,
                "New version available: {} (current {})",
                self.latest_tag, self.current
            )
        } else {
            write!(f, "Up to date on {}", self.latest_tag)
        }
    }
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("failed to build HTTP client: {0}")]
    BuildClient(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Asks GitHub for the newest release and compares it to the running build.
pub async fn check_for_update() -> Result<UpdateInfo, UpdateError> {
    let client = Client::builder()
        .user_agent(format!("{}/{} (+{})", APP_NAME, version_label(), APP_REPO_URL))
        .build()
        .map_err(|err| UpdateError::BuildClient(err.to_string()))?;

    let release = client
        .get(LATEST_RELEASE_URL)
        .send()
        .await
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .error_for_status()
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .json::<LatestRelease>()
        .await
        .map_err(|err| UpdateError::Decode(err.to_string()))?;

    Ok(UpdateInfo {
        current: current_version()?,
        latest: parse_version_str(&release.tag_name)?,
        latest_tag: release.tag_name,
    })
}

pub fn current_version() -> Result<Version, UpdateError> {
    parse_version_str(GIT_TAG.unwrap_or(APP_VERSION))
}

/// Tag shown in the shell footer and update dialogs.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

fn parse_version_str(input: &str) -> Result<Version, UpdateError> {
    let trimmed = input.trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|err| UpdateError::InvalidVersion(err.to_string()))
}
