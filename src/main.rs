//! ScalaFiddle CLI - render fiddle tags and activate fiddles in rendered pages

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scalafiddle::commands;
use scalafiddle::interface::Site;

#[derive(Parser)]
#[command(name = "scalafiddle")]
#[command(author, version, about = "Embed ScalaFiddle widgets in static-site pages", long_about = None)]
struct Cli {
    /// Site configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Site source directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown page with fiddle tags to HTML
    Render {
        /// Markdown page, relative to the site source
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only expand fiddle tags, without converting the page
        #[arg(long)]
        expand_only: bool,
    },

    /// Inject fiddle templates and the activation script into rendered pages
    Integrate {
        /// Dry run - show what would be done without doing it
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Glob patterns of rendered pages
        #[arg(value_name = "PATTERN", required = true)]
        patterns: Vec<String>,
    },

    /// Show how a tag argument string is parsed
    Options {
        /// Raw tag arguments, e.g. 'template="Intro" autorun'
        #[arg(value_name = "ARGS")]
        args: String,
    },

    /// Show the effective scalafiddle configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine site source directory
    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    // Read configuration from file or use defaults
    let site = match cli.config {
        Some(ref path) => {
            scalafiddle::config::read_config_file(path).map(|config| Site::new(config, base_dir))
        }
        None => Site::from_dir(base_dir),
    };
    let site = match site {
        Ok(site) => site,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Render {
            file,
            output,
            expand_only,
        } => {
            let options = commands::RenderOptions {
                file,
                output,
                expand_only,
            };
            commands::render(&site, options)
        }

        Commands::Integrate { dry_run, patterns } => {
            let options = commands::IntegrateOptions { patterns, dry_run };
            commands::integrate(&site, options)
        }

        Commands::Options { args } => commands::options(&args),

        Commands::Config => commands::config(&site),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_template_error() {
                eprintln!(
                    "Templates are read from {}",
                    site.config.fiddle().template_path(&site.source).display()
                );
            }
            ExitCode::FAILURE
        }
    }
}
