use std::fs::File;
use std::io;
use std::sync::Arc;

use clap::Parser;
use helpdesk::LogLevel;
use helpdesk::core::config::{self, CliOverrides};
use helpdesk::oneshot::{self, OneShot};
use helpdesk::service::HttpAnswerService;
use helpdesk::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "helpdesk", about = "Terminal client for the Smart Helpdesk Bot")]
struct Args {
    /// Answer service endpoint (overrides config file and HELPDESK_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Ask a single question, print the answer and exit
    #[arg(short, long, conflicts_with = "ping")]
    ask: Option<String>,

    /// Check that the answer service is up and exit
    #[arg(long)]
    ping: bool,

    /// Log verbosity for helpdesk.log
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // File logger - the TUI owns the terminal. The effective level is
    // narrowed below once the config is resolved.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("helpdesk.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = config::load_config().map_err(|e| {
        eprintln!("helpdesk: {e}");
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint: args.endpoint,
            log_level: args.log_level.map(Into::into),
        },
    );
    log::set_max_level(resolved.log_level);

    log::info!("Helpdesk starting up with endpoint: {}", resolved.endpoint);

    let service = HttpAnswerService::new(&resolved.endpoint).map_err(|e| {
        eprintln!("helpdesk: {e}");
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    if args.ping {
        match service.probe().await {
            Ok(message) => println!("{message}"),
            Err(e) => {
                eprintln!("helpdesk: {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    if let Some(question) = args.ask {
        let result = oneshot::ask(&service, &question).await;
        match &result {
            OneShot::Answered(answer) => println!("{answer}"),
            OneShot::Failed(message) => eprintln!("{message}"),
            OneShot::Skipped => eprintln!("helpdesk: question is empty, nothing sent"),
        }
        std::process::exit(result.exit_code());
    }

    tui::run(resolved.endpoint, Arc::new(service))
}
