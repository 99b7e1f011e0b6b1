use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use temptweet_core::{
    Config, Credentials, DryRunPublisher, PageFetcher, Publisher, Report, RunContext, pipeline,
    publisher_from_config,
};
use tracing::debug;

use crate::prompt;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "temptweet",
    version,
    about = "Tweets the latest temperatures for a Bureau of Meteorology weather station",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub tweet: TweetArgs,

    /// Debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a default weather station and username.
    Configure,
}

#[derive(Debug, Args)]
pub struct TweetArgs {
    /// The weather station to use (defaults to "Sydney - Observatory Hill").
    #[arg(short, long)]
    pub station: Option<String>,

    /// Twitter username; prompted for when absent.
    #[arg(short, long)]
    pub username: Option<String>,

    /// Twitter password; prompted for when absent.
    #[arg(short, long)]
    pub password: Option<String>,

    /// Which readings to publish.
    #[arg(long, value_enum, default_value_t = ReportArg::All)]
    pub report: ReportArg,

    /// Print the status instead of posting it.
    #[arg(long)]
    pub dry_run: bool,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportArg {
    /// Most recent high, most recent low and current.
    All,
    High,
    Low,
}

impl From<ReportArg> for Report {
    fn from(value: ReportArg) -> Self {
        match value {
            ReportArg::All => Report::All,
            ReportArg::High => Report::High,
            ReportArg::Low => Report::Low,
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Some(Command::Configure) => configure(&mut config),
            None => tweet(self.tweet, config).await,
        }
    }
}

async fn tweet(args: TweetArgs, mut config: Config) -> Result<()> {
    if let Some(secs) = args.timeout {
        config.timeout_secs = Some(secs);
    }
    let ctx = RunContext::from_config(&config, non_blank(args.station), args.report.into());

    let publisher: Box<dyn Publisher> = if args.dry_run {
        Box::new(DryRunPublisher)
    } else {
        let credentials = resolve_credentials(args.username, args.password, &config)?;
        publisher_from_config(&config, credentials)?
    };

    let fetcher = PageFetcher::new(config.timeout())?;
    debug!(station = %ctx.station, url = %ctx.page_url, dry_run = args.dry_run, "starting run");

    let response = pipeline::run(&ctx, &fetcher, publisher.as_ref(), |text| {
        println!("Attempting to tweet:\n{text}");
    })
    .await?;
    println!("Response:\n{response}");

    Ok(())
}

fn configure(config: &mut Config) -> Result<()> {
    let station = prompt::station(config.station())?;
    let username = prompt::default_username(config.username.as_deref())?;

    config.station = Some(station);
    config.username = username;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

/// Flag, then configured username, then prompt. A supplied password flag is used as-is.
fn resolve_credentials(
    username: Option<String>,
    password: Option<String>,
    config: &Config,
) -> Result<Credentials> {
    let username = match non_blank(username).or_else(|| non_blank(config.username.clone())) {
        Some(username) => username,
        None => prompt::username()?,
    };
    let password = match non_blank(password) {
        Some(password) => password,
        None => prompt::password()?,
    };
    Ok(Credentials::new(&username, &password))
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
