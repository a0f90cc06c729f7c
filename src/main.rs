//! condo-api entry point
//!
//! This is a minimal entrypoint that:
//! 1. Dispatches to the server bootstrap (via http_server::run)
//! 2. Prints fatal errors to stderr
//! 3. Exits with non-zero on failure
//!
//! All logic is delegated to the http_server module.

use condo_api::http_server;

#[tokio::main]
async fn main() {
    if let Err(e) = http_server::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
