use anyhow::Context;
use clap::Parser;
use manigen::{common::GlobalOpts, errors::ManigenError, logger, pipeline};
use manigen_config::Settings;
use manigen_github::GithubClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "manigen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Plugin repository manifest generator",
    long_about = "manigen builds manifest.json from the GitHub releases of a plugin repository.\n\n\
                  Requires GITHUB_REPOSITORY (owner/name) and GITHUB_TOKEN in the environment. \
                  GITHUB_API_URL overrides the API endpoint, MANIGEN_LOG_FILE mirrors output to a file."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        logger::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(ManigenError::from)?;

    if let Err(e) =
        logger::init_with_verbosity(cli.global.verbosity_level(), settings.log_file.as_deref())
    {
        logger::warn(&format!("Failed to initialize log file: {}", e));
    }
    init_tracing();

    let client = GithubClient::new(&settings);
    let written = pipeline::run(&settings, &client)
        .with_context(|| format!("Failed to generate manifest for {}", settings.repository))?;

    logger::success(&format!(
        "Successfully generated {} with {} versions.",
        settings.output_path().display(),
        written
    ));
    if let Some(path) = logger::get_log_path() {
        logger::info(&format!("Log file: {}", path.display()));
    }
    Ok(())
}

fn init_tracing() {
    let level = logger::verbosity_to_filter();
    let default_filter = format!(
        "warn,manigen_github={0},manigen_manifest={0}",
        level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();
}
