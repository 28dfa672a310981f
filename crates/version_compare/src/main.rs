use anyhow::{Context, Result};

fn main() -> Result<()> {

    let filter = tracing_subscriber::EnvFilter::try_from_env("VERSION_COMPARE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let matches = version_compare::get_cli().get_matches_from(wild::args());
    version_compare::main_cli(&matches)
}
