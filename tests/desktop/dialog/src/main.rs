#[tokio::main]
async fn main() {
    println!("Testing Dialog...");
    promptkit_dialog_demo::run().await;
}
