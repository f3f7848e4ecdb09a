use clap::Parser;
use form_observer_cli::{check, completions};
use form_observer_common::{tracing_setup, SystemConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "form-observer")]
#[command(about = "Validate a form definition and print the merged observer state")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// System configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overrides the configuration file
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate every field of a form definition
    Check {
        /// Form definition (TOML)
        form: PathBuf,

        /// Print the context as JSON
        #[arg(long)]
        json: bool,

        /// Mark every field as touched before validating
        #[arg(long)]
        touch: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SystemConfig::from_file(path)?,
        None => SystemConfig::default(),
    };
    let level = cli.log_level.as_deref().unwrap_or(config.logging.level.as_str());

    match cli.command {
        Commands::Completions { shell } => {
            completions::generate::<Cli>(shell);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { form, json, touch } => {
            tracing_setup::init_tracing_with_level(level)?;

            let options = check::CheckOptions { json, touch };
            let report = check::run(&form, &config.observer, &options).await?;
            print!("{}", report.output);

            Ok(if report.valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
