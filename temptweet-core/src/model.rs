use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// A `(time, value)` reading pulled out of one station row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub time: String,
    pub value: String,
}

impl Observation {
    pub fn new(time: impl Into<String>, value: impl Into<String>) -> Self {
        Self { time: time.into(), value: value.into() }
    }
}

/// The row of the observation table that belongs to the requested station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRow {
    pub station: String,
    /// Raw `<td>` blocks in document order; extraction is positional.
    pub cells: Vec<String>,
}

/// What gets published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Report {
    /// High, low and current in one status.
    #[default]
    All,
    High,
    Low,
}

/// Basic-auth credentials, encoded once on construction.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            token: STANDARD.encode(format!("{username}:{password}")),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `base64(username:password)`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Basic {}", self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_encode_basic_token() {
        let creds = Credentials::new("user", "pass");
        assert_eq!(creds.token(), "dXNlcjpwYXNz");
        assert_eq!(creds.authorization(), "Basic dXNlcjpwYXNz");
        assert_eq!(creds.username(), "user");
    }

    #[test]
    fn credentials_debug_hides_token() {
        let creds = Credentials::new("user", "hunter2");
        let shown = format!("{creds:?}");
        assert!(shown.contains("user"));
        assert!(!shown.contains(creds.token()));
    }
}
