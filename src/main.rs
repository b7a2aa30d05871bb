#[tokio::main]
async fn main() {
    stockdash::cli::run().await;
}
