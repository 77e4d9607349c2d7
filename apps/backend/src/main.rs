#[tokio::main]
async fn main() -> anyhow::Result<()> {
    advent_backend::run().await
}
