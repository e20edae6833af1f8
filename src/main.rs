use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use course_runtime::OutputFormat;
use course_runtime::commands;
use course_runtime::config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "course-runtime")]
#[command(about = "Total video runtime and time remaining for a course lecture list")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert duration strings to seconds
    Parse {
        #[arg(required = true, help = "Durations such as 6:28, 1h 30m or \"90 min\"")]
        inputs: Vec<String>,
        #[arg(long, value_enum, help = "Output format")]
        format: Option<OutputFormat>,
    },

    /// Summarize a lecture list once
    Summary {
        #[arg(help = "Page snapshot (JSON) or one lecture label per line; stdin if omitted")]
        file: Option<PathBuf>,
        #[arg(long, help = "Completion percentage shown on the page, e.g. 25%")]
        progress: Option<String>,
        #[arg(long, value_enum, help = "Output format")]
        format: Option<OutputFormat>,
        #[arg(long, help = "Include the calculation details panel")]
        details: bool,
    },

    /// Keep the summary current while the page snapshot changes
    Watch {
        #[arg(help = "Page snapshot file to poll")]
        file: PathBuf,
        #[arg(long, value_enum, help = "Output format")]
        format: Option<OutputFormat>,
        #[arg(long, help = "Include the calculation details panel")]
        details: bool,
    },

    /// Show configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = config::load().unwrap_or_else(|e| {
        if config::config_path().is_ok_and(|path| path.exists()) {
            eprintln!("Warning: Ignoring invalid config ({:#}); using defaults.", e);
        } else {
            log::debug!("No config file, using defaults: {:#}", e);
        }
        config::Config::default()
    });

    match cli.command {
        Commands::Parse { inputs, format } => {
            commands::parse::parse(&inputs, format.unwrap_or(config.display.format))?;
        }
        Commands::Summary {
            file,
            progress,
            format,
            details,
        } => {
            commands::summary::summary(
                file,
                progress,
                format.unwrap_or(config.display.format),
                details || config.display.show_details,
            )?;
        }
        Commands::Watch {
            file,
            format,
            details,
        } => {
            tokio::runtime::Runtime::new()?.block_on(commands::watch::watch(
                &config,
                file,
                format.unwrap_or(config.display.format),
                details || config.display.show_details,
            ))?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
