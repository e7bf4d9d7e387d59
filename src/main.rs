use andresromero_dev::og;
use andresromero_dev::{config, logging, server};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "andresromero-dev")]
#[command(about = "Personal portfolio site server")]
#[command(long_about = "\
Personal portfolio site server

Serves the landing and uses pages plus an on-demand social-preview image
endpoint (GET /og?title=...). The preview card is a pure function of the
title: white 1200x630 canvas, large bold text, PNG output, byte-identical
across hosts thanks to an embedded font.

Run 'andresromero-dev gen-config' to print a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve,
    /// Render a single preview card to a PNG file
    Og {
        /// Title to render (omit for the site default)
        #[arg(long)]
        title: Option<String>,
        /// Output file
        #[arg(long, default_value = "card.png")]
        output: PathBuf,
    },
    /// Validate the config and the preview renderer without binding a socket
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => {
            logging::init();
            let site_config = config::SiteConfig::load_or_default(cli.config.as_deref())?;
            server::serve(site_config).await?;
        }
        Command::Og { title, output } => {
            let title = og::effective_title(title.as_deref());
            let bytes = og::render_png(title)?;
            std::fs::write(&output, &bytes)?;
            println!(
                "Rendered \"{}\" ({}x{}, {} bytes) to {}",
                title,
                og::CARD_WIDTH,
                og::CARD_HEIGHT,
                bytes.len(),
                output.display()
            );
        }
        Command::Check => {
            let site_config = config::SiteConfig::load_or_default(cli.config.as_deref())?;
            println!("==> Config OK (bind {})", site_config.bind_addr());
            let bytes = og::render_png(og::DEFAULT_TITLE)?;
            println!("==> Preview renderer OK ({} byte PNG)", bytes.len());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
