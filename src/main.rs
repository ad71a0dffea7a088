use anyhow::Result;
use clap::Parser;
use dataprobe::cli::{Cli, Commands};
use dataprobe::formatting::FormattingConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            samples,
            imbalance_threshold,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            let analyze_config = dataprobe::commands::analyze::AnalyzeConfig {
                path,
                format,
                output,
                config,
                samples,
                imbalance_threshold,
                formatting_config: create_formatting_config(plain),
            };
            dataprobe::commands::analyze::handle_analyze(analyze_config)
        }
        Commands::Init { force } => {
            init_logging(0);
            dataprobe::commands::init::init_config(force)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .init();
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
