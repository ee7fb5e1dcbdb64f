use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the dashboard servers the CLI can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Web UI started locally with its default uvicorn settings.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the dashboard API for this environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000".to_string(),
            Environment::Custom { api_url } => api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds a custom environment from a URL, rejecting anything that is not http(s).
    pub fn custom(url: &str) -> Result<Self, String> {
        let url = url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(Environment::Custom {
                api_url: url.trim_end_matches('/').to_string(),
            })
        } else {
            Err(format!(
                "Invalid server URL '{}': expected an http:// or https:// address",
                url
            ))
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "local" => Ok(Environment::Local),
            _ => Environment::custom(s),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}
