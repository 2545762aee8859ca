#[tokio::main]
async fn main() -> anyhow::Result<()> {
    connectu_lib::run().await
}
