#[tokio::main]
async fn main() {
    invite_backend::run().await;
}
