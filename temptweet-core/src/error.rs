use std::fmt;

use thiserror::Error;

/// A single reading the summary is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    High,
    Low,
    Current,
}

impl Reading {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reading::High => "most recent high",
            Reading::Low => "most recent low",
            Reading::Current => "current",
        }
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of one run, one variant per pipeline failure class.
#[derive(Debug, Error)]
pub enum TempTweetError {
    /// Network, TLS, body-read or non-2xx failure talking to `url`.
    #[error("Couldn't connect to {url}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Weather station '{station}' is not listed on the observation page")]
    StationNotFound { station: String },

    #[error("Couldn't retrieve {} temperature", join_readings(.readings))]
    Unavailable { readings: Vec<Reading> },

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}

impl TempTweetError {
    pub(crate) fn connection(url: &str) -> impl Fn(reqwest::Error) -> Self + '_ {
        move |source| TempTweetError::Connection { url: url.to_string(), source }
    }

    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> u8 {
        match self {
            TempTweetError::Connection { .. } => 2,
            TempTweetError::StationNotFound { .. } => 3,
            TempTweetError::Unavailable { .. } => 4,
            TempTweetError::Client(_) => 1,
        }
    }
}

fn join_readings(readings: &[Reading]) -> String {
    match readings {
        [] => "any".to_string(),
        [one] => one.to_string(),
        [init @ .., last] => {
            let init: Vec<&str> = init.iter().map(Reading::as_str).collect();
            format!("{} and {last}", init.join(", "))
        }
    }
}
