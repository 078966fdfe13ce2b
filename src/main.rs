//! FixPix Editor (CLI).
//!
//! Spielt Event-Skripte gegen eine Editor-Session ab, wahlweise gegen das
//! simulierte oder ein echtes Processing-Backend.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fixpix_editor::{
    EditorEvent, EditorOptions, EditorSession, HttpBackend, JobBackend, LogSink, SessionRuntime,
    SimulatedBackend,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "fixpix-editor", version, about = "FixPix Editor-Engine")]
struct Cli {
    /// Pfad zur Optionen-Datei (Standard: neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Spielt eine JSON-Liste von Editor-Events ab und gibt Endzustand und Command-Protokoll aus
    Replay {
        /// JSON-Datei mit `[{"type": "load_image", ...}, ...]`
        script: PathBuf,
        /// Echtes Backend statt Demo-Modus
        #[arg(long)]
        api_url: Option<String>,
        /// Bearer-Token für das Backend
        #[arg(long, requires = "api_url")]
        token: Option<String>,
    },
    /// Gibt die wirksame Konfiguration als TOML aus
    PrintConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("FixPix Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(EditorOptions::config_path);
    let mut options = EditorOptions::load_from_file(&config_path);

    match cli.command {
        Command::PrintConfig => {
            print!("{}", options.to_toml()?);
        }
        Command::Replay {
            script,
            api_url,
            token,
        } => {
            let events = load_script(&script)?;
            match api_url {
                Some(api_url) => {
                    options.api_base_url = api_url;
                    let mut backend = HttpBackend::from_options(&options)?;
                    if let Some(token) = token {
                        backend = backend.with_token(token);
                    }
                    replay(options, Arc::new(backend), events).await?;
                }
                None => {
                    log::info!("Demo-Modus: simuliertes Backend");
                    replay(options, Arc::new(SimulatedBackend::new()), events).await?;
                }
            }
        }
    }

    Ok(())
}

fn load_script(path: &Path) -> anyhow::Result<Vec<EditorEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Skript nicht lesbar: {}", path.display()))?;
    let events: Vec<EditorEvent> = serde_json::from_str(&content)
        .with_context(|| format!("Skript fehlerhaft: {}", path.display()))?;
    log::info!("{} Events geladen aus {}", events.len(), path.display());
    Ok(events)
}

/// Führt die Events der Reihe nach aus; vor jedem weiteren Generate wird der
/// laufende Job abgewartet.
async fn replay<B: JobBackend>(
    options: EditorOptions,
    backend: Arc<B>,
    events: Vec<EditorEvent>,
) -> anyhow::Result<()> {
    let sink = Arc::new(LogSink);
    let session = EditorSession::new(options, sink.clone(), sink);
    let mut runtime = SessionRuntime::new(session, backend);

    for event in events {
        if matches!(event, EditorEvent::Generate) {
            runtime.settle().await;
        }
        runtime.dispatch(event);
    }
    runtime.settle().await;

    let session = runtime.session();
    let log = session.command_log();
    log::info!(
        "{} Commands ausgeführt ({} im Protokoll)",
        log.total_recorded(),
        log.len()
    );
    let output = serde_json::json!({
        "snapshot": session.snapshot(),
        "commands": log.to_vec(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    runtime.shutdown();
    Ok(())
}
