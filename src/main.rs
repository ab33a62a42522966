#[tokio::main]
async fn main() {
    sheetbridge::cli::run().await;
}
