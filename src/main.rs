#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    use alden_portfolio::log::{log_event, LogLevel};

    if let Err(error) = alden_portfolio::server::run().await {
        log_event(
            LogLevel::Error,
            "server_failed",
            serde_json::json!({ "error": error.to_string() }),
        );
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    alden_portfolio::frontend::run();
}
