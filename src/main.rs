use std::process::ExitCode;
use std::sync::Arc;

use pulse_server::config::{AppState, Config};
use pulse_server::{logger, server, ServerError};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ServerError> {
    let cfg = Config::load()?;
    logger::init(&cfg).map_err(ServerError::Logger)?;

    // Multi-threaded runtime; worker count from config or CPU cores
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build().map_err(ServerError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), ServerError> {
    let addr = cfg.socket_addr()?;
    let listener =
        server::create_listener(addr).map_err(|source| ServerError::Bind { addr, source })?;

    let state = Arc::new(AppState::new(&cfg));
    logger::log_server_start(&addr);

    server::start_server_loop(listener, state, server::shutdown_signal()).await;
    Ok(())
}
