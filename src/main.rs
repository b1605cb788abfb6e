#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    popular_repos::host::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    popular_repos::frontend::run();
}
