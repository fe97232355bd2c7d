use residence_gate::frameworks::server;

#[tokio::main]
async fn main() {
    server::init_runtime();

    if let Err(e) = server::bind_and_run().await {
        tracing::error!(error = %e, "guest gate stopped");
        std::process::exit(1);
    }
}
