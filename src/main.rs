use clap::{Parser, Subcommand};
use log::error;
use pods_proximity::config::{Config, OutputFormat};
use pods_proximity::labels::{EnglishLabels, LabelResolver};
use pods_proximity::proximity::decode_hex_input;
use pods_proximity::render::{render_json, render_text};
use pods_proximity::{InputError, PodDevice};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(
    name = "pods-proximity",
    version,
    about = "Decode earbud proximity-pairing advertisements"
)]
struct Args {
    #[arg(long, short = 'd', help = "Enable debug logging")]
    debug: bool,
    #[arg(long, value_enum, help = "Output format (overrides the config file)")]
    format: Option<OutputFormat>,
    #[arg(long, help = "Print the raw payload bytes with each message")]
    raw: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode hex payloads given on the command line.
    Decode {
        /// Inputs are Apple manufacturer data (type/length records), not bare payloads.
        #[arg(long, short = 'm')]
        manufacturer: bool,
        #[arg(required = true)]
        payloads: Vec<String>,
    },
    /// Watch BlueZ for proximity advertisements and print each one.
    Monitor {
        #[arg(long, help = "Adapter name, e.g. hci0")]
        adapter: Option<String>,
    },
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "monitor")]
    #[error("Bluetooth error: {0}")]
    Bluetooth(#[from] bluer::Error),
    #[cfg(feature = "monitor")]
    #[error("failed to start runtime: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(not(feature = "monitor"))]
    #[error("built without the `monitor` feature")]
    MonitorUnavailable,
}

struct Output {
    format: OutputFormat,
    show_raw_data: bool,
    labels: Box<dyn LabelResolver>,
}

impl Output {
    fn print(&self, device: &PodDevice) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Text => println!(
                "{}",
                render_text(device, self.labels.as_ref(), self.show_raw_data)
            ),
            OutputFormat::Json => println!("{}", render_json(device)?),
        }
        Ok(())
    }
}

fn run_decode(output: &Output, payloads: &[String], manufacturer: bool) -> bool {
    let mut all_ok = true;
    for input in payloads {
        let result = decode_hex_input(input, manufacturer)
            .map_err(AppError::from)
            .and_then(|device| output.print(&device));
        if let Err(e) = result {
            error!("{}: {}", input, e);
            all_ok = false;
        }
    }
    all_ok
}

#[cfg(feature = "monitor")]
fn run_monitor(output: &Output, adapter: Option<String>) -> Result<(), AppError> {
    use log::debug;
    use pods_proximity::bluetooth::le::start_le_monitor;
    use tokio::sync::mpsc::unbounded_channel;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let (tx, mut rx) = unbounded_channel();
        let monitor = tokio::spawn(async move { start_le_monitor(adapter.as_deref(), tx).await });

        while let Some(message) = rx.recv().await {
            match message.decode() {
                Ok(device) => {
                    debug!(
                        "{} rssi={:?} at {:?}",
                        message.address, message.rssi, message.received_at
                    );
                    output.print(&device)?;
                }
                Err(e) => debug!("Dropping message from {}: {}", message.address, e),
            }
        }

        match monitor.await {
            Ok(result) => result.map_err(AppError::from),
            Err(e) => {
                error!("Monitor task failed: {}", e);
                Ok(())
            }
        }
    })
}

#[cfg(not(feature = "monitor"))]
fn run_monitor(_output: &Output, _adapter: Option<String>) -> Result<(), AppError> {
    Err(AppError::MonitorUnavailable)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = Config::load();
    let output = Output {
        format: args.format.unwrap_or(config.format),
        show_raw_data: args.raw || config.show_raw_data,
        labels: Box::new(EnglishLabels),
    };

    match args.command {
        Command::Decode {
            manufacturer,
            payloads,
        } => {
            if run_decode(&output, &payloads, manufacturer) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Monitor { adapter } => match run_monitor(&output, adapter.or(config.adapter)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
    }
}
