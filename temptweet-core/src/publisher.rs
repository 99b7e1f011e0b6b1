use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, Credentials, TempTweetError};

pub mod dry_run;
pub mod status;

pub use dry_run::DryRunPublisher;
pub use status::StatusPublisher;

/// Somewhere a finished status message can be sent.
#[async_trait]
pub trait Publisher: Send + Sync + Debug {
    /// Publish `text`, returning the service's raw response body.
    async fn publish(&self, text: &str) -> Result<String, TempTweetError>;
}

/// Status-update publisher for the endpoint and timeout in `config`.
pub fn publisher_from_config(
    config: &Config,
    credentials: Credentials,
) -> Result<Box<dyn Publisher>, TempTweetError> {
    let publisher = StatusPublisher::new(config.status_url(), credentials, config.timeout())?;
    Ok(Box::new(publisher))
}
