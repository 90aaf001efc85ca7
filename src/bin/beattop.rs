//! beattop - live terminal dashboard for a log-shipping agent.
//!
//! Usage:
//!   beattop                         # poll localhost:5066 every 5 seconds
//!   beattop --host 10.0.0.5 -i 2    # remote agent, 2 second interval
//!   beattop --once                  # print one snapshot as text and exit
//!   beattop --demo                  # synthetic agent, no endpoint needed

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing::{Level, error, info, warn};
use tracing_subscriber::EnvFilter;

use beattop::collector::mock::MockSource;
use beattop::collector::{
    DEFAULT_HOST, DEFAULT_PORT, HttpSource, Poller, PollerConfig, StatsSource,
};
use beattop::storage::StoreWriter;
use beattop::tui::{App, Event, EventHandler};
use beattop::view::DashboardView;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Live terminal dashboard for a log shipper's monitoring endpoint.
#[derive(Parser)]
#[command(name = "beattop", version, about = "Log shipper stats dashboard")]
struct Args {
    /// Agent host.
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Agent monitoring port.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Polling interval in seconds.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,

    /// Log file (default: beattop.log in the temp directory).
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Poll once, print the dashboard as text and exit.
    #[arg(long)]
    once: bool,

    /// Use a built-in synthetic agent instead of the HTTP endpoint.
    #[arg(long)]
    demo: bool,
}

impl Args {
    fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            host: self.host.clone(),
            port: self.port,
            interval: Duration::from_secs(self.interval),
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Where log lines go.
enum LogTarget {
    Stderr,
    File(File),
}

fn init_logging(verbose: u8, quiet: bool, target: LogTarget) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("beattop={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).init(),
    }
}

fn build_source(args: &Args, config: &PollerConfig) -> Box<dyn StatsSource> {
    if args.demo {
        return Box::new(MockSource::typical_agent());
    }
    match HttpSource::new(config) {
        Ok(source) => Box::new(source),
        Err(e) => {
            eprintln!("Error: failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    }
}

/// Single cycle, plain-text output.
fn run_once(args: &Args, config: PollerConfig) {
    let source = build_source(args, &config);
    let mut poller = Poller::new(source, StoreWriter::new(), config.interval);
    match poller.poll_once() {
        Ok(snapshot) => print!("{}", DashboardView::from_snapshot(Some(&snapshot)).to_text()),
        Err(e) => {
            error!("Failed to fetch stats: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    let config = args.poller_config();

    let target = if args.once {
        LogTarget::Stderr
    } else {
        let path = args
            .log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("beattop.log"));
        match File::create(&path) {
            Ok(file) => LogTarget::File(file),
            Err(e) => {
                eprintln!("Error: cannot open log file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    };
    init_logging(args.verbose, args.quiet, target);

    info!("beattop {} starting", env!("CARGO_PKG_VERSION"));

    if args.once {
        run_once(&args, config);
        return;
    }

    let source = build_source(&args, &config);
    let endpoint = source.describe();
    info!(
        "Config: endpoint={}, interval={}s, timeout={}s",
        endpoint, args.interval, args.timeout
    );

    let store = StoreWriter::new();
    let reader = store.reader();
    let events = EventHandler::new();

    let shutdown = events.sender();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = shutdown.send(Event::Shutdown);
    }) {
        warn!("Failed to set signal handler: {}", e);
    }

    let poller = Poller::new(source, store, config.interval).with_listener(events.notifier());
    if let Err(e) = poller.spawn() {
        error!("Failed to start poller thread: {}", e);
        eprintln!("Error: failed to start poller thread: {}", e);
        std::process::exit(1);
    }

    let app = App::new(reader, endpoint);
    if let Err(e) = app.run(events) {
        error!("Terminal error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("beattop exiting");
}
