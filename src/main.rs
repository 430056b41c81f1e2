use clap::Parser;
use tracing::{debug, error};

use servicebay::adapter::inbound::cli::command::{Cli, ColorChoice};
use servicebay::adapter::inbound::cli::output::{self, OutputConfig};
use servicebay::adapter::inbound::cli::session::Session;
use servicebay::adapter::inbound::cli::execute;
use servicebay::infrastructure::config::settings::Config;

fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };
    if let Some(path) = cli.database {
        config.database.path = path;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json_logs {
        config.logging.format = "json".into();
    }

    config.init_logging();
    debug!(config = %cli.config.display(), "servicebay starting");

    let session = Session::new(config);
    if let Err(e) = execute(&session, cli.command) {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
