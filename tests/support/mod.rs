// Boots one guest gate per test binary and hands out its base URL.
use std::sync::mpsc;
use std::time::Duration;
use tokio::sync::OnceCell;

static BASE_URL: OnceCell<String> = OnceCell::const_new();

pub async fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(start_server).await.as_str()
}

async fn start_server() -> String {
    let (addr_tx, addr_rx) = mpsc::channel();

    // The server gets its own runtime so it outlives each `#[tokio::test]` runtime.
    std::thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                .await
                .expect("bind ephemeral test port");
            let addr = listener.local_addr().expect("get local addr");
            addr_tx.send(addr).expect("publish server addr");
            residence_gate::run(listener).await.expect("server failed");
        });
    });

    let addr = tokio::task::spawn_blocking(move || addr_rx.recv())
        .await
        .expect("join addr receiver")
        .expect("server thread exited before binding");
    let base_url = format!("http://{addr}");

    wait_until_ready(&base_url).await;
    base_url
}

// The gate is ready once the read-only current-guest route answers.
async fn wait_until_ready(base_url: &str) {
    let client = reqwest::Client::new();
    let url = format!("{base_url}/guest/current");

    for _ in 0..100 {
        if let Ok(res) = client.get(&url).send().await {
            if res.status().is_success() {
                return;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    panic!("guest gate did not become ready at {base_url}");
}
