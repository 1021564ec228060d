use anyhow::Context;
use clap::Parser;
use log::error;
use logohue::{AverageMode, HomepagePatterns, LogoScraper, ScraperConfig};
use std::path::PathBuf;

/// Find a site's logo and write a swatch of its average color.
#[derive(Parser, Debug)]
#[command(name = "logohue", version, about)]
struct Cli {
    /// Sites to scrape (domain or full URL), processed in order
    #[arg(required = true, value_name = "SITE")]
    sites: Vec<String>,

    /// Directory to write `<unix-seconds>.png` into
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 30000)]
    timeout_ms: u64,

    /// Override the User-Agent header
    #[arg(long)]
    user_agent: Option<String>,

    /// Average in plain RGB order instead of the legacy channel rotation
    #[arg(long)]
    corrected: bool,

    /// Also keep the downloaded logo at this path
    #[arg(long, value_name = "PATH")]
    save_logo: Option<PathBuf>,

    /// Print each report as JSON instead of the swatch path
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> ScraperConfig {
        let defaults = ScraperConfig::default();
        ScraperConfig {
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            timeout_ms: self.timeout_ms,
            output_dir: self.output_dir.clone(),
            average_mode: if self.corrected { AverageMode::Corrected } else { AverageMode::SourceCompat },
            save_logo: self.save_logo.clone(),
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let scraper = LogoScraper::new(cli.config())?;
    let mut patterns = HomepagePatterns::new();

    for site in &cli.sites {
        let report = scraper
            .scrape(site, &mut patterns)
            .with_context(|| format!("scraping {} failed", site))?;

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", report.swatch_path.display());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        eprintln!("logohue: {:#}", e);
        std::process::exit(1);
    }
}
