use clap::Parser;

/// Quill: a terminal client for the manuscript editing service.
#[derive(Parser, Debug)]
#[command(name = "quill", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override (e.g. "quill=debug").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Editing service base URL. QUILL_API_URL still takes precedence.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Interface language (ar, en).
    #[arg(long)]
    pub lang: Option<String>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "quill",
            "--config",
            "/tmp/q.toml",
            "--log-level",
            "quill=debug",
            "--api-url",
            "http://localhost:9000",
            "--lang",
            "en",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config.as_deref(), Some("/tmp/q.toml"));
        assert_eq!(args.log_level.as_deref(), Some("quill=debug"));
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(args.lang.as_deref(), Some("en"));
        assert!(args.print_config);
    }

    #[test]
    fn no_flags_is_fine() {
        let args = Args::try_parse_from(["quill"]).unwrap();
        assert!(args.config.is_none());
        assert!(!args.print_config);
    }
}
