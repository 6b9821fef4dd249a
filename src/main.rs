use std::sync::Arc;

use nexus_server::config::{AppState, Config};
use nexus_server::server::{self, SignalHandler};
use nexus_server::{logger, views};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg.logging)?;

    // Size the runtime from the workers setting, default is one per core
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;

    let routes = views::routes();
    logger::log_server_start(&addr, &cfg, routes.len());
    let state = Arc::new(AppState::new(cfg, routes));

    let signals = Arc::new(SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    server::start_server_loop(listener, state, signals).await;
    logger::log_info("Server stopped");
    Ok(())
}
