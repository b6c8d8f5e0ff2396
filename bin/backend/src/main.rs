//! Unified Backend Binary
//!
//! Combines the dataset query API and live game hosting into a single
//! server. Runs on BIND_ADDR (e.g. 0.0.0.0:8888).

#[tokio::main]
async fn main() {
    mt_core::log();
    mt_server::run().await.unwrap();
}
