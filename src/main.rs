use std::sync::Arc;

use actix_web::{App, HttpServer};
use clap::{Parser, Subcommand};
use tokio::sync::mpsc;
use tracing::{error, info};

use ventureforge::api::AppState;
use ventureforge::config::Config;
use ventureforge::shutdown::ShutdownCoordinator;
use ventureforge::simulator::{self, IncrementStrategy, NotificationEvent, NotificationKind, RunState};
use ventureforge::store::JobBoard;
use ventureforge::{configure, logging};

#[derive(Debug, Parser)]
#[command(name = "ventureforge", about = "Mock startup-validation service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,

    /// Run one research simulation in the terminal and print its toasts
    Simulate {
        /// Fixture job id; must be PENDING
        #[arg(long)]
        job: String,

        /// Use a constant increment instead of the random range
        #[arg(long)]
        fixed_increment: Option<f64>,
    },
}

fn invalid_input(message: impl Into<String>) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, message.into())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().map_err(invalid_input)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Simulate { job, fixed_increment } => simulate(config, job, fixed_increment).await,
    }
}

async fn serve(config: Config) -> std::io::Result<()> {
    logging::init(&config.log_dir)?;

    info!("Starting ventureforge application");
    info!("Configuration loaded successfully:");
    info!("  - Max payload size: {} bytes", config.max_payload_size);
    info!("  - Tick interval: {:?}", config.tick_interval);
    info!(
        "  - Increment range: {}..{}",
        config.increment_min, config.increment_max
    );

    let state = AppState::new(config.clone());
    let simulations = state.simulations.clone();

    let server = HttpServer::new(move || App::new().configure(configure(state.clone())));

    info!("Server starting on http://{}:{}", config.host, config.port);

    let server = server.bind((config.host.as_str(), config.port))?.run();

    // Get server handle for graceful shutdown
    let server_handle = server.handle();
    let server_task = tokio::spawn(server);

    let coordinator = ShutdownCoordinator::new(server_handle, server_task, simulations);
    coordinator.wait_for_shutdown().await
}

async fn simulate(config: Config, job_id: String, fixed_increment: Option<f64>) -> std::io::Result<()> {
    logging::init_console();

    let increments = match fixed_increment {
        Some(step) if step > 0.0 => IncrementStrategy::Fixed(step),
        Some(step) => return Err(invalid_input(format!("--fixed-increment must be positive, got {}", step))),
        None => IncrementStrategy::Random {
            min: config.increment_min,
            max: config.increment_max,
        },
    };

    let board = JobBoard::from_fixtures();
    let job = board
        .begin_analysis(&job_id)
        .map_err(|e| invalid_input(e.to_string()))?;

    let (tx, mut rx) = mpsc::unbounded_channel::<NotificationEvent>();
    let handle = simulator::runner::spawn(
        &job,
        config.tick_interval,
        increments.source(),
        board,
        Arc::new(tx),
    );

    println!("Researching {} ({})", job.title, job.id);

    loop {
        tokio::select! {
            event = rx.recv() => {
                let Some(event) = event else { break };
                println!("[{:>3}%] {} {}", event.progress, event.title, event.description);
                if event.kind == NotificationKind::Completed {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                handle.cancel();
                break;
            }
        }
    }

    match handle.wait().await {
        RunState::Completed => Ok(()),
        state => {
            error!("Simulation for job {} ended in state {:?}", job_id, state);
            println!("Simulation stopped ({:?})", state);
            Ok(())
        }
    }
}
