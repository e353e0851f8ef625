mod config;
mod error;
mod render;
mod theme;
mod wifi;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::style::{Stylize, style};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{Config, IconSet},
    render::Renderer,
    wifi::{Collector, Platform, SystemCommandRunner, WifiStatus},
};

const LOG_ENV: &str = "WIFISEG_LOG";

/// A prompt segment showing the current Wi-Fi connection on Windows and WSL
#[derive(Parser, Debug)]
#[command(
    name = "wifiseg",
    author = "Soham Waghmare",
    about = "A prompt segment showing the current Wi-Fi connection on Windows and WSL.\n\nPrints nothing when no Wi-Fi status is available.",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Template to render instead of the configured one
    #[arg(long)]
    template: Option<String>,

    /// Show "WIFI ERR" instead of nothing when netsh fails
    #[arg(long = "display-error")]
    display_error: bool,

    /// Use ASCII icons (no Nerd Fonts required)
    #[arg(long)]
    ascii: bool,

    /// Do not prefix the connection icon
    #[arg(long = "no-icons")]
    no_icons: bool,

    /// Color the output by connection state
    #[arg(long)]
    color: bool,

    /// Print the collected status as JSON
    #[arg(long)]
    json: bool,

    /// Parse a saved `netsh wlan show interfaces` dump instead of running netsh
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .wrap_err("Failed to load configuration")?;

    let wifi = &mut config.wifi;
    if let Some(template) = &args.template {
        wifi.template = Some(template.clone());
    }
    if args.display_error {
        wifi.display_error = true;
    }
    if args.ascii {
        wifi.icon_set = IconSet::Ascii;
    }
    if args.no_icons {
        wifi.show_icons = false;
    }
    Ok(config)
}

fn collect(args: &Args, config: &Config) -> Result<Option<WifiStatus>> {
    if let Some(path) = &args.input {
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        return Ok(Some(wifi::parse(&raw)));
    }

    let runner = SystemCommandRunner::new(config.wifi.command_timeout());
    let collector = Collector::new(&runner, Platform::detect(), config.wifi.display_error);
    Ok(collector.collect())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let args = Args::parse();
    let config = load_config(&args)?;

    let Some(status) = collect(&args, &config)? else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string(&status)?);
        return Ok(());
    }

    let renderer = Renderer::new(config.wifi.template(), config.wifi.icons());
    let text = renderer.render(&status);
    if args.color {
        println!("{}", style(text).with(theme::state_color(&status)));
    } else {
        println!("{text}");
    }
    Ok(())
}
