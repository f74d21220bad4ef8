use std::future::Future;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tokio::signal;
use tokio::task::JoinSet;
use tracing_subscriber::EnvFilter;
use yomu_config::{Config, JobConfig, SourceKind};

use crate::convert::Summary;

mod convert;
mod output;

#[derive(Parser)]
#[command(
    name = "yomu-import",
    version,
    about = "Convert dictionary sources into a term database"
)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an EPWING dump of 大辞泉
    Daijisen(JobArgs),
    /// Convert a JMnedict JSON document
    Jmnedict(JobArgs),
    /// Run every job listed in a config file concurrently
    Batch { config: PathBuf },
}

#[derive(Args)]
struct JobArgs {
    input: PathBuf,
    output: PathBuf,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    pretty: bool,
    /// Extract on a single thread
    #[arg(long)]
    sequential: bool,
}

impl JobArgs {
    fn into_config(self, source: SourceKind) -> Config {
        let mut config = Config::new();
        config.pretty |= self.pretty;
        if self.sequential {
            config.parallel = false;
        }
        config.jobs.push(JobConfig {
            source,
            input: self.input,
            output: self.output,
            title: self.title,
        });
        config
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Completed,
    Interrupted,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let config = match cli.command {
        Command::Daijisen(args) => args.into_config(SourceKind::Daijisen),
        Command::Jmnedict(args) => args.into_config(SourceKind::Jmnedict),
        Command::Batch { config } => match Config::from_file(&config) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    match run(config, shutdown).await {
        Ok(Outcome::Completed) => ExitCode::SUCCESS,
        Ok(Outcome::Interrupted) => {
            // Blocking conversions cannot be cancelled; don't wait for them.
            // Outputs are staged, so nothing half-written is left behind.
            std::process::exit(130)
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Convert every configured job, each on its own blocking task
async fn run(config: Config, shutdown: impl Future<Output = ()>) -> anyhow::Result<Outcome> {
    let (parallel, pretty) = (config.parallel, config.pretty);
    let work = move |job: JobConfig| convert::convert(&job, parallel, pretty);
    run_jobs(config.jobs, shutdown, work).await
}

async fn run_jobs<F>(
    configured: Vec<JobConfig>,
    shutdown: impl Future<Output = ()>,
    work: F,
) -> anyhow::Result<Outcome>
where
    F: Fn(JobConfig) -> anyhow::Result<Summary> + Clone + Send + 'static,
{
    if configured.is_empty() {
        anyhow::bail!("no jobs configured");
    }

    let mut jobs = JoinSet::new();
    for job in configured {
        let work = work.clone();
        jobs.spawn_blocking(move || work(job));
    }

    let all_done = async {
        let mut failed = 0;
        while let Some(result) = jobs.join_next().await {
            match result {
                Ok(Ok(summary)) => tracing::info!(
                    title = %summary.title,
                    output = %summary.output.display(),
                    terms = summary.terms,
                    skipped = summary.skipped,
                    "job finished"
                ),
                Ok(Err(e)) => {
                    tracing::error!("job failed: {e:#}");
                    failed += 1;
                }
                Err(e) => {
                    tracing::error!("job panicked: {e}");
                    failed += 1;
                }
            }
        }
        failed
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            Ok(Outcome::Interrupted)
        }
        failed = all_done => {
            if failed > 0 {
                anyhow::bail!("{failed} job(s) failed");
            }
            Ok(Outcome::Completed)
        }
    }
}
