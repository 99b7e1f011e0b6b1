//! Fetch → locate → extract → format → publish, as one explicit per-run context.

use tracing::debug;

use crate::{
    Config, TempTweetError,
    error::Reading,
    extract::{Readings, RowLayout},
    fetch::PageFetcher,
    message,
    model::Report,
    publisher::Publisher,
    station,
};

/// Everything one run needs to know; built once at startup.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub station: String,
    pub page_url: String,
    pub link: String,
    pub report: Report,
    pub layout: RowLayout,
}

impl RunContext {
    /// Context from config defaults; `station` overrides the configured one.
    pub fn from_config(config: &Config, station: Option<String>, report: Report) -> Self {
        Self {
            station: station.unwrap_or_else(|| config.station().to_string()),
            page_url: config.page_url().to_string(),
            link: config.link().to_string(),
            report,
            layout: RowLayout::default(),
        }
    }
}

/// One full run: compose the status, hand it to `announce`, then publish it.
///
/// Nothing is published unless composing succeeded. Returns the publisher's raw response.
pub async fn run(
    ctx: &RunContext,
    fetcher: &PageFetcher,
    publisher: &dyn Publisher,
    announce: impl FnOnce(&str),
) -> Result<String, TempTweetError> {
    let text = compose(ctx, fetcher).await?;
    announce(&text);

    debug!(station = %ctx.station, "publishing status");
    publisher.publish(&text).await
}

/// Download the observation page and build the status text.
pub async fn compose(ctx: &RunContext, fetcher: &PageFetcher) -> Result<String, TempTweetError> {
    let document = fetcher.fetch(&ctx.page_url).await?;
    compose_from_document(ctx, &document)
}

/// Build the status text from an already fetched page.
pub fn compose_from_document(ctx: &RunContext, document: &str) -> Result<String, TempTweetError> {
    let row = station::locate(document, &ctx.station)?;
    let readings = Readings::extract(&row, &ctx.layout);

    let text = match ctx.report {
        Report::All => message::format_summary(
            readings.high.as_ref(),
            readings.low.as_ref(),
            readings.current.as_ref(),
            &ctx.link,
        ),
        Report::High => readings.high.as_ref().map(message::format_high),
        Report::Low => readings.low.as_ref().map(message::format_low),
    };

    let text = text.ok_or_else(|| TempTweetError::Unavailable {
        readings: match ctx.report {
            Report::All => readings.missing(),
            Report::High => vec![Reading::High],
            Report::Low => vec![Reading::Low],
        },
    })?;

    debug!(station = %row.station, %text, "composed status");
    Ok(text)
}
