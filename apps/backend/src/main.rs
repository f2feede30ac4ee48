#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quiz_viewer_backend::run().await
}
