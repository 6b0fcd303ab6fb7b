//! Clipload CLI - upload a video file for processing
//!
//! ```bash
//! clipload upload clip.mp4                         # POST to the default endpoint
//! clipload upload clip.mp4 --endpoint http://...   # Override the endpoint
//! clipload upload clip.mp4 --json                  # Print the outcome as JSON
//! clipload inspect clip.mp4                        # Show what the form would send
//! ```
//!
//! The endpoint can also be set with `CLIPLOAD_ENDPOINT` (or in `.env`).

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::{Parser, Subcommand};
    use clipload::{
        CliError, CliResult, ClientConfig, FileHandle, HttpTransport, LocalFile, StderrNotifier,
        SubmitSignal, UploadForm, UploadOutcome, VIDEO_ACCEPT,
    };
    use std::path::{Path, PathBuf};
    use std::rc::Rc;
    use tracing_subscriber::EnvFilter;

    #[derive(Parser)]
    #[command(name = "clipload")]
    #[command(about = "Upload a video clip to the processing endpoint", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Select a file and submit it
        Upload {
            /// Video file to upload (omit to see the no-file path)
            file: Option<PathBuf>,

            /// Upload endpoint (default: $CLIPLOAD_ENDPOINT, then the fixed URL)
            #[arg(short, long)]
            endpoint: Option<String>,

            /// Print the outcome as JSON
            #[arg(long)]
            json: bool,
        },

        /// Show the metadata the form would echo and send
        Inspect {
            /// File to inspect
            file: PathBuf,
        },
    }

    pub async fn run() {
        // Load .env file (if present)
        dotenvy::dotenv().ok();

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with_writer(std::io::stderr)
            .init();

        let cli = Cli::parse();

        let result = match cli.command {
            Commands::Upload { file, endpoint, json } => cmd_upload(file.as_deref(), endpoint, json).await,
            Commands::Inspect { file } => cmd_inspect(&file).await,
        };

        if let Err(e) = result {
            // The notifier already showed the no-file notice.
            if !matches!(e, CliError::Form(_)) {
                eprintln!("❌ Error: {}", e);
            }
            std::process::exit(1);
        }
    }

    async fn cmd_upload(file: Option<&Path>, endpoint: Option<String>, json: bool) -> CliResult<()> {
        let form = UploadForm::<LocalFile>::new(endpoint_config(endpoint), Rc::new(HttpTransport::new()), Rc::new(StderrNotifier));

        if let Some(path) = file {
            let local = LocalFile::from_path(path).await?;
            eprintln!("📄 Selected file: {}", local.name());
            form.on_file_chosen(local);
        }

        let outcome = form.on_submit(&SubmitSignal::new()).await?;
        print_outcome(&outcome, json)?;

        if outcome.is_success() {
            Ok(())
        } else {
            Err(CliError::UploadFailed(outcome.to_string()))
        }
    }

    /// A non-blank `--endpoint` wins; otherwise the environment decides.
    fn endpoint_config(flag: Option<String>) -> ClientConfig {
        match flag {
            Some(url) if !url.trim().is_empty() => ClientConfig::from_override(Some(url)),
            _ => ClientConfig::from_env(),
        }
    }

    async fn cmd_inspect(path: &Path) -> CliResult<()> {
        let file = LocalFile::from_path(path).await?;

        println!("📄 {}", file.name());
        println!("   Type: {}", file.mime_type());
        println!("   Size: {} bytes", file.size());
        println!(
            "   Matches {}: {}",
            VIDEO_ACCEPT,
            if file.is_video_hint() { "yes" } else { "no (would still upload)" }
        );
        Ok(())
    }

    fn print_outcome(outcome: &UploadOutcome, json: bool) -> CliResult<()> {
        if json {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        } else {
            println!("{}", outcome);
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    cli::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {}
