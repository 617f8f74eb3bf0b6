use anyhow::{Context, Result};
use clap::Parser;
use mdsite_config::Config;
use std::path::PathBuf;

mod site;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from a directory of Markdown files")]
struct Cli {
    /// URL prefix the site is served under (overrides the config file)
    basepath: Option<String>,

    /// Config file (defaults to mdsite.toml in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown sources
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory the site is written to; replaced on every run
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory of assets copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Log per-document parsing detail
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Loads the config file (or the default layout) and applies flag overrides.
    fn resolve_config(&self) -> Result<Config> {
        let config_path = self.config.clone().unwrap_or_else(Config::config_path);
        let loaded = Config::load_from_path(&config_path)
            .with_context(|| format!("loading config from {}", config_path.display()))?;

        let mut config = match loaded {
            Some(config) => {
                log::info!("Loaded config from {}", config_path.display());
                config
            }
            None => {
                if self.config.is_some() {
                    anyhow::bail!("config file not found: {}", config_path.display());
                }
                log::debug!("No config file at {}, using defaults", config_path.display());
                Config::default()
            }
        };

        if let Some(content) = &self.content {
            config.content_dir = content.clone();
        }
        if let Some(template) = &self.template {
            config.template_path = template.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(static_dir) = &self.static_dir {
            config.static_dir = static_dir.clone();
        }
        if let Some(basepath) = &self.basepath {
            config.basepath = basepath.clone();
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    let pages = site::build(&config)?;
    log::info!(
        "Generated {} page(s) in {}",
        pages.len(),
        config.output_dir.display()
    );
    Ok(())
}
