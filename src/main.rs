// Headless entry point: import files, run one gallery action over all of
// them and write the produced images to disk.

use std::path::PathBuf;
use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use graphite_gallery_lib::utils::write_asset;
use graphite_gallery_lib::{AppState, NotificationKind, Settings, import_files, run_batch_action};

#[derive(Parser, Debug)]
#[command(version, about = "Run a gallery batch action over image files")]
struct Args {
    /// Action label, e.g. "Batch Resize", "Convert to JPG", "Add Watermark", "Auto Enhance"
    #[arg(short, long)]
    operation: String,

    /// Settings JSON file; defaults are used when absent
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Directory for produced images
    #[arg(long, default_value = "processed")]
    out: PathBuf,

    /// Images to process
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .compact();

    subscriber.init();

    let args = Args::parse();
    info!("=== Graphite gallery batch starting ===");

    let settings = match &args.settings {
        Some(path) => Settings::load(path)
            .await
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.validate().context("Invalid settings")?;
    debug!("✓ Settings loaded");

    let mut state = AppState::new(settings);
    let imported = import_files(&mut state, &args.files).await?;
    if imported == 0 {
        bail!("None of the given files are supported images");
    }
    state.select_all();

    let outcome = run_batch_action(&mut state, &args.operation).await?;

    for item in &outcome.produced {
        if let Some(asset) = &item.asset {
            write_asset(&args.out, &item.display_name, asset)
                .await
                .with_context(|| format!("Failed to write {}", item.display_name))?;
            info!("Wrote {} ({})", item.display_name, item.size_label());
        }
    }

    for failure in &outcome.job.failures {
        warn!("{} failed: {}", failure.item_name, failure.message);
    }

    for notification in state.notifications().notifications() {
        match notification.kind {
            NotificationKind::Success | NotificationKind::Info => {
                info!("{}: {}", notification.title, notification.description)
            }
            NotificationKind::Warning | NotificationKind::Error => {
                warn!("{}: {}", notification.title, notification.description)
            }
        }
    }

    if outcome.job.has_failures() {
        bail!("{} of {} images failed", outcome.job.failures.len(), outcome.job.total);
    }
    Ok(())
}
