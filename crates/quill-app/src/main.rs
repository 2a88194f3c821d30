mod cli;
mod repl;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use quill_chat::{EditorClient, EditorConfig, SessionController, SessionSettings, UiText};
use quill_config::{Language, QuillConfig};
use quill_common::{ClipboardPort, QuillError};
use quill_platform::{
    default_export_dir, Clipboard, FileExporter, MemoryClipboard, SystemClipboard,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Load environment variables from a .env file (KEY=VALUE lines) in the
/// current directory. Variables already set win.
fn load_dotenv() {
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if std::env::var(key).is_err() {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Log to stderr so transcript output on stdout stays clean.
fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();
}

/// Fold CLI overrides into the loaded config.
fn apply_overrides(config: &mut QuillConfig, args: &cli::Args) {
    if let Some(ref url) = args.api_url {
        config.service.base_url = url.clone();
    }
    if let Some(ref lang) = args.lang {
        match lang.parse::<Language>() {
            Ok(language) => config.session.language = language,
            Err(e) => tracing::warn!("Ignoring --lang: {e}"),
        }
    }
}

fn session_settings(config: &QuillConfig) -> SessionSettings {
    SessionSettings {
        copy_indicator: Duration::from_millis(u64::from(config.session.copy_indicator_ms)),
        detailed_errors: config.session.detailed_errors,
        text: match config.session.language {
            Language::Ar => UiText::arabic(),
            Language::En => UiText::english(),
        },
    }
}

fn export_dir(config: &QuillConfig) -> PathBuf {
    if let Some(dir) = config.export.directory() {
        return dir;
    }
    default_export_dir().unwrap_or_else(|e| {
        tracing::warn!("{e}; exporting to the working directory");
        PathBuf::from(".")
    })
}

/// The system clipboard when one can be opened, else an in-process one so
/// copy and paste still work within the session on headless hosts.
fn clipboard() -> Arc<dyn ClipboardPort> {
    match Clipboard::new() {
        Ok(_) => Arc::new(SystemClipboard),
        Err(e) => {
            tracing::warn!("System clipboard unavailable, using in-process clipboard: {e}");
            Arc::new(MemoryClipboard::new())
        }
    }
}

fn main() {
    load_dotenv();

    let args = cli::parse();

    // Config is read before logging so `[logging] level` can apply; load
    // errors are reported once the subscriber is up.
    let loaded = quill_config::load_config(args.config.as_deref().map(Path::new));
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "quill=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("Quill v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        QuillConfig::default()
    });
    apply_overrides(&mut config, &args);

    if args.print_config {
        println!("{}", quill_config::config_to_json(&config));
        return;
    }

    if let Err(e) = run(&config) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}

/// Report whether the editing service answers. Runs beside the line loop so
/// a slow service never holds up input.
async fn report_service_status(client: Arc<EditorClient>, text: UiText) {
    match client.health().await {
        Ok(status) => {
            tracing::info!(
                status = status.status.as_deref().unwrap_or("-"),
                version = status.version.as_deref().unwrap_or("-"),
                "Editing service reachable"
            );
            println!("● {}", text.online);
        }
        Err(e) => {
            tracing::warn!("Health check failed: {e}");
            println!("○ {}", text.offline);
        }
    }
}

fn run(config: &QuillConfig) -> quill_common::Result<()> {
    let base_url = config.service.resolved_base_url();
    tracing::info!("Editing service: {base_url}");

    let editor_config = EditorConfig::new(&base_url).with_connect_timeout(Duration::from_secs(
        u64::from(config.service.connect_timeout_secs),
    ));
    let client =
        Arc::new(EditorClient::new(editor_config).map_err(|e| QuillError::Service(e.to_string()))?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let settings = session_settings(config);
    let text = settings.text;
    let input = repl::spawn_stdin_reader();
    let controller = Arc::new(
        SessionController::new(
            client.clone(),
            clipboard(),
            Arc::new(FileExporter::new(export_dir(config))),
            Arc::new(repl::LinePrompt::new(input.clone())),
        )
        .with_settings(settings),
    );

    runtime.block_on(async move {
        tokio::spawn(report_service_status(client, text));
        repl::run(controller, input).await;
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn cli_overrides_config() {
        let args = cli::Args::try_parse_from([
            "quill",
            "--api-url",
            "http://localhost:9000",
            "--lang",
            "english",
        ])
        .unwrap();
        let mut config = QuillConfig::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.service.base_url, "http://localhost:9000");
        assert_eq!(config.session.language, Language::En);
    }

    #[test]
    fn bad_lang_keeps_config_value() {
        let args = cli::Args::try_parse_from(["quill", "--lang", "klingon"]).unwrap();
        let mut config = QuillConfig::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.session.language, Language::Ar);
    }

    #[test]
    fn settings_follow_session_config() {
        let mut config = QuillConfig::default();
        config.session.language = Language::En;
        config.session.copy_indicator_ms = 500;
        config.session.detailed_errors = true;

        let settings = session_settings(&config);
        assert_eq!(settings.copy_indicator, Duration::from_millis(500));
        assert!(settings.detailed_errors);
        assert_eq!(settings.text, UiText::english());
    }

    #[test]
    fn export_dir_prefers_config() {
        let mut config = QuillConfig::default();
        config.export.directory = "/srv/exports".into();
        assert_eq!(export_dir(&config), PathBuf::from("/srv/exports"));
    }
}
