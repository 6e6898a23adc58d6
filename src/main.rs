use clap::Parser;
use learnlist::core::config::{self, LearnlistConfig};
use learnlist::{oneshot, tui};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "learnlist", about = "Fetch and browse a list of things to learn")]
struct Args {
    /// List endpoint (default http://localhost:8000/)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Fetch once, print the rendered HTML list to stdout, and exit
    #[arg(long)]
    html: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("learnlist: {e}; using defaults");
        LearnlistConfig::default()
    });
    let config = config::resolve(&file_config, args.endpoint.as_deref());

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    log::info!("learnlist starting up with endpoint: {}", config.endpoint);

    if args.html {
        // One-shot mode: a single fetch, then the rendered page on stdout
        return match oneshot::render_once(tui::build_source(&config)).await {
            Ok(page) => {
                print!("{page}");
                Ok(())
            }
            Err(e) => {
                eprintln!("learnlist: {e}");
                Err(std::io::Error::other(e))
            }
        };
    }

    tui::run(config)
}
