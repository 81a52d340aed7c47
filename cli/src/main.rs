//! Terminal front end for the decay-curve analysis service.
//!
//! Each subcommand is one of the application's views; `open` resolves an
//! arbitrary path through the route table first, the way the web front end
//! navigates.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use decay_client::constants::{DEFAULT_API_PREFIX, DEFAULT_BASE_URL};
use decay_client::router::{self, View};
use decay_client::types::UploadedData;
use decay_client::ApiClient;

mod chart;
mod views;

/// Upload decay curves, start analyses and inspect results.
#[derive(Parser, Debug)]
#[command(name = "decay")]
#[command(about = "Client for the decay-curve analysis service")]
struct Cli {
    /// Backend origin
    #[arg(long, env = "DECAY_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Path prefix the backend mounts the API under (empty for none)
    #[arg(long, env = "DECAY_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    api_prefix: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every task
    Tasks,
    /// Show one task with its curves and analysis
    Task {
        /// Task identifier
        id: u64,
    },
    /// Create a task
    CreateTask {
        /// Title for the new task; omitted, the server assigns a default
        #[arg(long)]
        title: Option<String>,
    },
    /// Upload a curve document for a task
    Upload {
        /// Path to the JSON curve document
        file: PathBuf,
        /// Task the curve set belongs to
        #[arg(long)]
        task: u64,
        /// Free-form description stored with the curve set
        #[arg(long)]
        description: Option<String>,
    },
    /// Start an analysis over a task's curve set
    Analyze {
        /// Task identifier
        task_id: u64,
    },
    /// Fetch a finished analysis
    Analysis {
        /// Analysis identifier
        id: u64,
    },
    /// Resolve a path through the route table and render the matched view
    Open {
        /// Path, e.g. /tasks/42
        path: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let api = ApiClient::with_prefix(&cli.api_url, &cli.api_prefix)?;
    tracing::debug!(base_url = api.base_url(), "configured backend");

    match cli.command {
        Command::Tasks => views::tasks_history(&api).await,
        Command::Task { id } => views::task_detail(&api, id).await,
        Command::CreateTask { title } => views::create_task(&api, title.as_deref()).await,
        Command::Upload {
            file,
            task,
            description,
        } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let document: UploadedData = serde_json::from_str(&raw)
                .with_context(|| format!("parsing {}", file.display()))?;
            let payload = document.into_payload(task, description);
            views::upload(&api, &payload).await
        }
        Command::Analyze { task_id } => views::start_analysis(&api, task_id).await,
        Command::Analysis { id } => views::show_analysis(&api, id).await,
        Command::Open { path } => open(&api, &path).await,
    }
}

async fn open(api: &ApiClient, path: &str) -> anyhow::Result<()> {
    let Some(matched) = router::resolve(path) else {
        bail!("no route matches '{path}'");
    };

    match matched.view {
        View::Overview => views::overview(api).await,
        View::TasksHistory => views::tasks_history(api).await,
        View::TaskDetail => {
            let id = matched.param("id").context("route captured no id")?;
            let id: u64 = id
                .parse()
                .with_context(|| format!("task id '{id}' is not numeric"))?;
            views::task_detail(api, id).await
        }
        View::CreateTask => views::create_task(api, None).await,
    }
}
