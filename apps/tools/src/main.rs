use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use content::{ContentStore, FixtureStore, Fit, ImageUrlBuilder, SanityClient, SanityConfig};
use serde::Serialize;
use transition::{
    driver,
    simulate::{SimulatedHost, TraceStep},
    TransitionCoordinator, TransitionTiming,
};

#[derive(Parser, Debug)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Hosted content store project id.
    #[arg(long, global = true)]
    project: Option<String>,
    #[arg(long, global = true, default_value = "production")]
    dataset: String,
    #[arg(long, global = true, default_value = "2024-01-01")]
    api_version: String,
    /// Query the live API instead of the CDN.
    #[arg(long, global = true)]
    no_cdn: bool,
    /// Read content from a JSON export instead of the hosted store.
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    Works,
    Work { slug: String },
    Posts,
    Post { slug: String },
    Skills,
    Info,
    About,
    /// Print the CDN URL for an image reference.
    ImageUrl {
        reference: String,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(long)]
        fit: Option<Fit>,
    },
    /// Run one page transition against timed stand-ins for the router and
    /// the animations, printing each step.
    TraceTransition {
        #[arg(long, default_value = "/")]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 600)]
        cover_ms: u64,
        #[arg(long, default_value_t = 600)]
        reveal_ms: u64,
        #[arg(long, default_value_t = 250)]
        route_ms: u64,
        /// Simulate missing overlay and content surfaces.
        #[arg(long)]
        unmounted: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Works => print_json(&open_store(&cli.source)?.works().await?)?,
        Command::Work { slug } => {
            let work = open_store(&cli.source)?
                .work(&slug)
                .await?
                .with_context(|| format!("no work with slug '{slug}'"))?;
            print_json(&work)?;
        }
        Command::Posts => print_json(&open_store(&cli.source)?.blog_posts().await?)?,
        Command::Post { slug } => {
            let post = open_store(&cli.source)?
                .blog_post(&slug)
                .await?
                .with_context(|| format!("no post with slug '{slug}'"))?;
            print_json(&post)?;
        }
        Command::Skills => print_json(&open_store(&cli.source)?.skills().await?)?,
        Command::Info => print_json(&open_store(&cli.source)?.personal_info().await?)?,
        Command::About => print_json(&open_store(&cli.source)?.about().await?)?,
        Command::ImageUrl {
            reference,
            width,
            height,
            fit,
        } => {
            let project = cli
                .source
                .project
                .clone()
                .context("--project is required to build image URLs")?;
            let builder = ImageUrlBuilder::new(project, cli.source.dataset.clone());
            let mut request = builder.image(&reference);
            if let Some(width) = width {
                request = request.width(width);
            }
            if let Some(height) = height {
                request = request.height(height);
            }
            if let Some(fit) = fit {
                request = request.fit(fit);
            }
            println!("{}", request.url()?);
        }
        Command::TraceTransition {
            from,
            to,
            cover_ms,
            reveal_ms,
            route_ms,
            unmounted,
        } => {
            let timing = TransitionTiming {
                cover: Duration::from_millis(cover_ms),
                reveal: Duration::from_millis(reveal_ms),
            };
            trace_transition(&from, &to, timing, Duration::from_millis(route_ms), !unmounted).await?;
        }
    }

    Ok(())
}

fn open_store(source: &SourceArgs) -> Result<Arc<dyn ContentStore>> {
    if let Some(path) = &source.fixture {
        let store = FixtureStore::load(path)
            .with_context(|| format!("failed to load fixture '{}'", path.display()))?;
        return Ok(Arc::new(store));
    }
    let project = source
        .project
        .clone()
        .context("pass --project or --fixture to choose a content source")?;
    let config = SanityConfig {
        api_version: source.api_version.clone(),
        use_cdn: !source.no_cdn,
        ..SanityConfig::new(project, source.dataset.clone())
    };
    Ok(Arc::new(SanityClient::new(&config)?))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn trace_transition(
    from: &str,
    to: &str,
    timing: TransitionTiming,
    route_latency: Duration,
    mounted: bool,
) -> Result<()> {
    let (handle, inbox) = driver::channel::<String>();
    let (host, mut trace) = SimulatedHost::new(handle.signaller(), route_latency);
    let coordinator =
        TransitionCoordinator::new(host.with_surfaces_mounted(mounted), from).with_timing(timing);
    let driver_task = tokio::spawn(inbox.run(coordinator));

    handle.navigate(to)?;

    // Stop once the overlay is hidden, or once nothing has happened for
    // longer than any single phase takes.
    let quiet = timing.cover.max(timing.reveal).max(route_latency) + Duration::from_millis(250);
    loop {
        match tokio::time::timeout(quiet, trace.recv()).await {
            Ok(Some(entry)) => {
                println!("{:>6}ms  {}", entry.at.as_millis(), entry.step);
                if entry.step == TraceStep::OverlayHidden {
                    break;
                }
            }
            Ok(None) | Err(_) => break,
        }
    }

    drop(handle);
    let coordinator = driver_task.await.context("transition driver panicked")?;
    println!(
        "final state: {:?}, current path: {}",
        coordinator.state(),
        coordinator.current_path()
    );
    Ok(())
}
