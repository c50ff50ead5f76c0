use eyre::Result;
use tracing_subscriber::EnvFilter;

use casebook_cli::{batch, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("CASEBOOK_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = config::load_config()?;
    let summary = batch::convert_file(&config)?;

    tracing::info!(
        written = summary.written,
        failed = summary.failed,
        output_dir = %summary.output_dir.display(),
        "conversion complete"
    );

    Ok(())
}
