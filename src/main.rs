#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Delegate to the runner entry point.
    landing_game::run_with_config().await
}
