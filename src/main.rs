use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use ace_renderer::channel::ChannelType;
use ace_renderer::config::Settings;
use ace_renderer::message::Message;
use ace_renderer::presentation::Presenter;
use ace_renderer::telemetry::init_tracing;
use ace_renderer::template::JinjaTemplates;

/// Render a notification message for a delivery channel
#[derive(Debug, Parser)]
#[command(name = "ace-render", version, about)]
struct Cli {
    /// Channel to render for (email, push)
    #[arg(short, long)]
    channel: ChannelType,

    /// Message JSON file
    #[arg(short, long)]
    message: PathBuf,

    /// Template directory (overrides configuration)
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Print the template paths instead of rendering
    #[arg(long)]
    paths: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::new().context("failed to load configuration")?;
    if let Some(root) = cli.templates.clone() {
        settings.templates.root = root;
    }

    // Initialize tracing
    init_tracing(&settings.logging)?;
    tracing::debug!(root = %settings.templates.root.display(), "Configuration loaded");

    run(&cli, &settings).with_context(|| format!("failed to render {}", cli.message.display()))
}

fn run(cli: &Cli, settings: &Settings) -> ace_renderer::error::Result<()> {
    let message = load_message(&cli.message)?;

    if message.is_expired() {
        tracing::warn!(
            message_uuid = %message.uuid,
            expiration_time = ?message.expiration_time,
            "Rendering an expired message"
        );
    }

    let templates = Arc::new(JinjaTemplates::from_settings(&settings.templates));
    let presenter = Presenter::new(templates, &settings.templates.namespace_segment);

    if cli.paths {
        for path in presenter.template_paths(cli.channel, &message) {
            println!("{}", path);
        }
        return Ok(());
    }

    let payload = presenter.render(cli.channel, &message)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}

fn load_message(path: &Path) -> ace_renderer::error::Result<Message> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
