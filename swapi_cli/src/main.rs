mod commands;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use swapi_lib::{ApiRequester, BaseUrl, CategoryRequester, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "swapi")]
#[command(about = "Download Star Wars API categories to local files")]
struct Cli {
    /// Output format: table, markdown or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root (default: https://swapi.dev/api, or SWAPI_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// TOML config file (default: ./swapi.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the categories exposed by the API root
    Categories(commands::categories::CategoriesArgs),
    /// Print the raw body of one category
    Fetch(commands::fetch::FetchArgs),
    /// Save every category to <out-dir>/<category>.txt
    Save(commands::save::SaveArgs),
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(url) = &self.base_url {
            config.base_url = BaseUrl::new(url);
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Some(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

fn build_requester(config: &Config) -> Result<CategoryRequester> {
    let mut builder = ApiRequester::builder(config.base_url.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    Ok(CategoryRequester::from(builder.build()?))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("swapi=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);
    let config = cli.resolve_config()?;
    let requester = build_requester(&config)?;
    tracing::debug!("Using {}", requester);

    match &cli.command {
        Commands::Categories(args) => commands::categories::run(args, &requester, &format).await?,
        Commands::Fetch(args) => commands::fetch::run(args, &requester).await?,
        Commands::Save(args) => commands::save::run(args, &requester, &config, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_save_with_global_flags() {
        let cli = Cli::try_parse_from([
            "swapi",
            "save",
            "--out-dir",
            "dump",
            "--keep-going",
            "--base-url",
            "https://example.test/api/",
            "--timeout-secs",
            "10",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("https://example.test/api/"));
        assert_eq!(cli.timeout_secs, Some(10));
        match cli.command {
            Commands::Save(args) => {
                assert_eq!(args.out_dir, Some(PathBuf::from("dump")));
                assert!(args.keep_going);
            }
            _ => panic!("expected save"),
        }
    }

    #[test]
    fn parses_fetch_name() {
        let cli = Cli::try_parse_from(["swapi", "fetch", "people"]).unwrap();
        match cli.command {
            Commands::Fetch(args) => assert_eq!(args.name, "people"),
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn fetch_requires_name() {
        assert!(Cli::try_parse_from(["swapi", "fetch"]).is_err());
    }

    #[test]
    fn build_requester_uses_config() {
        let config = Config {
            base_url: BaseUrl::new("https://example.test/api/"),
            timeout: Some(Duration::from_secs(1)),
            ..Config::default()
        };
        let requester = build_requester(&config).unwrap();
        assert_eq!(requester.base_url().as_str(), "https://example.test/api");
    }
}
