#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wordgym_backend::run().await
}
