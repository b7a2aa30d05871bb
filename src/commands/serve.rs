use std::sync::Arc;

use crate::server;
use crate::services::SessionStore;

pub async fn run(port: u16) {
    println!("🚀 Starting stockdash server on port {}", port);
    println!("   Session state is in-memory and cleared on shutdown");

    let session = Arc::new(SessionStore::new());

    if let Err(e) = server::serve(session, port).await {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
