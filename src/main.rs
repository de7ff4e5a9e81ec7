use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use shotpath::{PathBuilder, PathError, Platform, ProjectConfig, TaskDescriptor};

#[derive(Parser)]
#[command(name = "shotpath")]
#[command(version)]
#[command(
    about = "Resolve studio pipeline paths from per-project configuration",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every path kind for a task/version/file-type combination
    #[clap(visible_alias = "r")]
    Resolve {
        /// Project configuration document (YAML)
        #[arg(short, long)]
        config: PathBuf,
        /// Project code (defaults to the configuration's id)
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        episode: String,
        #[arg(long)]
        sequence: String,
        #[arg(long)]
        shot: String,
        /// Task/artifact-category name (e.g. comp, lighting)
        #[arg(long)]
        task: String,
        /// Version number (e.g. 15 or v015)
        #[arg(short, long)]
        version: String,
        /// File/artifact type selecting the filename pattern
        #[arg(short, long)]
        file_type: String,
        /// Target platform: windows, linux or macos (defaults to the running platform)
        #[arg(short, long)]
        platform: Option<Platform>,
        /// Delivery client context; enables the submission path
        #[arg(long)]
        client: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a project configuration document, reporting every problem
    #[clap(visible_alias = "v")]
    Validate {
        /// Project configuration document (YAML)
        #[arg(short, long)]
        config: PathBuf,
        /// Print the validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            1
        }
    };
    process::exit(exit_code);
}

fn run(command: Commands) -> Result<i32, PathError> {
    match command {
        Commands::Resolve {
            config,
            project,
            episode,
            sequence,
            shot,
            task,
            version,
            file_type,
            platform,
            client,
            json,
        } => {
            let config = ProjectConfig::load(&config)?;
            let mut descriptor = TaskDescriptor::new(
                project.unwrap_or_else(|| config.id.clone()),
                episode,
                sequence,
                shot,
                task,
            );
            if let Some(client) = client {
                descriptor = descriptor.with_client(client);
            }
            let builder = PathBuilder::new(config)?;
            let platform = platform.unwrap_or_else(Platform::current);
            let result = builder.generate_all_paths(&descriptor, &version, &file_type, platform)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("working_file:   {}", result.working_file_path);
                println!("render_output:  {}", result.render_output_path);
                println!("media_file:     {}", result.media_file_path);
                println!("cache_file:     {}", result.cache_file_path);
                if let Some(submission) = &result.submission_path {
                    println!("submission:     {}", submission);
                }
                println!("filename:       {}", result.filename);
            }
            Ok(0)
        }
        Commands::Validate { config, json } => {
            let report = shotpath::validate_config_file(&config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.valid {
                println!("✅ Configuration is valid");
            } else {
                println!("❌ Configuration is invalid:");
                for error in &report.errors {
                    println!("  - {}", error);
                }
            }
            Ok(if report.valid { 0 } else { 1 })
        }
    }
}
