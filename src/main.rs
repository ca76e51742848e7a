use std::sync::Arc;

mod config;
mod handler;
mod http;
mod i18n;
mod logger;
mod navigation;
mod render;
mod server;
mod theses;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional first argument: config file path without extension
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());

    let cfg = config::Config::load_from(&config_path)?;
    logger::init(&cfg)?;

    let state = config::AppState::load(cfg)?;
    logger::log_dataset_loaded(&state.theses, state.config.content.theses_file.as_deref());

    // Build the Tokio runtime, sized by the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = state.config.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(state))
}

async fn async_main(state: config::AppState) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &state.config);

    let signals = Arc::new(server::SignalHandler::new());
    server::start_signal_handler(Arc::clone(&signals));

    server::start_server_loop(listener, Arc::new(state), signals.subscribe()).await;
    Ok(())
}
