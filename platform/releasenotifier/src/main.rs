use releasenotifier::logger::init_tracing;
use releasenotifier::run;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Release notification failed: {}", e);
        std::process::exit(1);
    }
}
