// draftcard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Build the data source
// 4. For each member: load bundle, build report, render, write fragment
// 5. Summary
//
// Members default to every alias in the config; aliases passed on the command
// line replace that list.

use draftcard_core::config::{self, Config};
use draftcard_core::loader::{self, DataSource, LoadError};
use draftcard_core::render;
use draftcard_core::stats::report::DraftReport;

use anyhow::Context;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("draftcard starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: {:?} source at {}, {} members, output to {}",
        config.source.kind,
        config.source.root,
        config.members.len(),
        config.output_dir.display()
    );

    // 3. Build the data source
    let source = loader::source_from_config(&config.source);

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let aliases: Vec<String> = if requested.is_empty() {
        config.member_aliases().map(str::to_string).collect()
    } else {
        requested
    };
    if aliases.is_empty() {
        warn!("no members configured and none given on the command line");
    }

    tokio::fs::create_dir_all(&config.output_dir)
        .await
        .with_context(|| format!("failed to create {}", config.output_dir.display()))?;

    // 4. Process members one after another
    let mut written = 0;
    let mut skipped = 0;
    for alias in &aliases {
        if !config::is_valid_storage_key(&config.storage_key(alias)) {
            warn!(alias = %alias, "skipping member: alias does not map to a usable file name");
            skipped += 1;
            continue;
        }
        match process_member(source.as_ref(), &config, alias).await {
            Ok(path) => {
                info!(alias = %alias, path = %path.display(), "fragment written");
                written += 1;
            }
            Err(e) => match e.downcast_ref::<LoadError>() {
                Some(LoadError::ProfileNotFound { .. }) => {
                    warn!(alias = %alias, "skipping member: {e}");
                    skipped += 1;
                }
                _ => {
                    error!(alias = %alias, "failed to build draft card: {e:#}");
                    skipped += 1;
                }
            },
        }
    }

    // 5. Summary
    info!(written, skipped, "draftcard finished");
    println!(
        "Wrote {written} draft card(s) to {} ({skipped} skipped; see logs/draftcard.log)",
        config.output_dir.display()
    );

    Ok(())
}

async fn process_member(
    source: &dyn DataSource,
    config: &Config,
    alias: &str,
) -> anyhow::Result<PathBuf> {
    let bundle = loader::load_bundle(source, config, alias).await?;
    let report = DraftReport::build(&bundle);
    let html = render::render_report(&report);

    let path = config
        .output_dir
        .join(format!("{}.html", config.storage_key(alias)));
    tokio::fs::write(&path, html)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Initialize tracing to write to a log file (not the terminal).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draftcard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("draftcard=info,draftcard_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
