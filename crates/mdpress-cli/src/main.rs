use anyhow::{Context, Result, bail};
use clap::Parser;
use mdpress_cli::build_site;
use mdpress_config::SiteConfig;
use std::{path::PathBuf, process};

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(about = "Generate a static HTML site from Markdown pages")]
struct Cli {
    /// Config file (defaults to ./mdpress.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory of static assets copied into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (cleared before each build)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Prefix for root-relative links, e.g. /my-site/
    #[arg(long)]
    base_path: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,
}

impl Cli {
    fn resolve_config(self) -> Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => match SiteConfig::load_from_path(path)? {
                Some(config) => config,
                None => bail!("Config file not found: {}", path.display()),
            },
            None => SiteConfig::load()?.unwrap_or_else(|| {
                log::info!("No config file found, using defaults");
                SiteConfig::default()
            }),
        };

        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.init {
        let path = cli.config.unwrap_or_else(SiteConfig::config_path);
        SiteConfig::init_at(&path)?;
        log::info!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = cli.resolve_config()?;
    log::info!(
        "Building {} into {}",
        config.content_dir.display(),
        config.output_dir.display()
    );

    let summary = build_site(&config).with_context(|| {
        format!(
            "Failed to build site from {}",
            config.content_dir.display()
        )
    })?;

    log::info!(
        "Copied {} static files, generated {} pages",
        summary.assets_copied,
        summary.pages.len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
