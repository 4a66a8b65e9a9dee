mod output;
mod presenter;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDateTime, NaiveTime};
use clap::Parser;
use foodiezz_lib::{AppConfig, Client, FoodTruckFinder, FoodiezzError, Gateway, OpenNowFilter};
use indicatif::{ProgressBar, ProgressFinish, ProgressStyle};

use crate::presenter::{present, StdinPrompt};

#[derive(Parser)]
#[command(name = "foodiezz")]
#[command(about = "Find San Francisco food trucks that are open right now")]
struct Cli {
    /// Rows per page (overrides PAGE_LIMIT)
    #[arg(long)]
    page_limit: Option<usize>,

    /// Socrata dataset identifier (overrides SOCRATA_DATASET_ID)
    #[arg(long)]
    dataset: Option<String>,

    /// Socrata domain (overrides SOCRATA_DOMAIN)
    #[arg(long)]
    domain: Option<String>,

    /// Pretend it is this time of day, as HH:MM
    #[arg(long)]
    at: Option<String>,

    /// Pretend it is this ISO weekday (1 = Monday, 7 = Sunday)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=7))]
    day: Option<u32>,
}

/// Closes the gateway when dropped, so every way out of `main` (including
/// an unwinding panic) releases the connection exactly once.
struct GatewayGuard<G: Gateway>(Option<G>);

impl<G: Gateway> GatewayGuard<G> {
    fn get(&self) -> &G {
        self.0.as_ref().expect("gateway is only taken on drop")
    }
}

impl<G: Gateway> Drop for GatewayGuard<G> {
    fn drop(&mut self) {
        if let Some(gateway) = self.0.take() {
            gateway.close();
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("foodiezz=info".parse()?),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    println!("==================Foodiezz==================\n");
    println!("Hello! Welcome to Foodiezz!");

    let config = load_config(&cli)?;
    let now = resolve_now(&cli, Local::now().naive_local())?;
    println!("\nTime is: {}", now.format("%c"));

    let client = GatewayGuard(Some(
        Client::new(&config.socrata_domain, config.app_token.as_deref())
            .context("failed to create SODA client")?,
    ));

    let filter = OpenNowFilter::at(&now);
    let outcome = tokio::select! {
        res = search_and_render(client.get(), &config, &filter) => Some(res),
        _ = tokio::signal::ctrl_c() => None,
    };
    match outcome {
        Some(Ok(())) => {}
        Some(Err(e)) => report(&e),
        None => tracing::debug!("interrupted, shutting down"),
    }

    println!("\nBye!!");
    drop(client);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::from_env()?;
    if let Some(page_limit) = cli.page_limit {
        config = config.with_page_limit(page_limit)?;
    }
    if let Some(dataset) = &cli.dataset {
        config.socrata_dataset_id = dataset.clone();
    }
    if let Some(domain) = &cli.domain {
        config.socrata_domain = domain.clone();
    }
    Ok(config)
}

/// Applies `--at` and `--day` to the real clock. `--day` moves within the
/// current Monday-to-Sunday week.
fn resolve_now(cli: &Cli, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let time = match &cli.at {
        Some(at) => NaiveTime::parse_from_str(at, "%H:%M")
            .with_context(|| format!("--at expects HH:MM, got {:?}", at))?,
        None => now.time(),
    };
    let mut date = now.date();
    if let Some(day) = cli.day {
        let today = date.weekday().number_from_monday() as i64;
        date += chrono::Duration::days(day as i64 - today);
    }
    Ok(date.and_time(time))
}

async fn search_and_render<G: Gateway>(
    gateway: &G,
    config: &AppConfig,
    filter: &OpenNowFilter,
) -> Result<()> {
    // cleared on drop too, so an interrupted fetch leaves no spinner line
    let spinner = ProgressBar::new_spinner().with_finish(ProgressFinish::AndClear);
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Finding food trucks for you...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let results = FoodTruckFinder::from_config(gateway, config)
        .search(filter)
        .await;
    spinner.finish_and_clear();
    let results = results?;

    let mut prompt = StdinPrompt::spawn();
    present(&results, config.page_limit, &mut prompt, &mut io::stdout()).await?;
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Failure {
    Transport,
    Validation,
    Other,
}

fn classify(err: &anyhow::Error) -> Failure {
    match err.downcast_ref::<FoodiezzError>() {
        Some(e) if e.is_transport() => Failure::Transport,
        Some(e) if e.is_validation() => Failure::Validation,
        _ => Failure::Other,
    }
}

/// Logs a failed search. None of these end the process early.
fn report(err: &anyhow::Error) {
    match classify(err) {
        Failure::Transport => tracing::error!("{}", err),
        Failure::Validation => tracing::error!("unexpected record shape from the API: {:#}", err),
        Failure::Other => tracing::error!("unhandled error occurred: {:?}", err),
    }
}
