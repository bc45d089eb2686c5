//! Test server wrapper that starts the sample service on a random port

use std::net::SocketAddr;

use faultline_config::{Config, StackConfig};
use faultline_stack::StackFilter;
use tokio_util::sync::CancellationToken;

use super::app;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        install_stack_filter();

        let router = faultline_server::with_error_handling(app::router(), &config.response);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Treat this test binary as the application and its `vendor` module as
/// third-party code
fn install_stack_filter() {
    let own_crate = module_path!().split("::").next().unwrap_or_default();

    // Every test binary installs the same filter; later calls are no-ops
    faultline_stack::install(StackFilter::new(&StackConfig {
        module_prefixes: vec![own_crate.to_owned()],
        exclude_prefixes: vec![format!("{own_crate}::harness::app::vendor")],
        ..StackConfig::default()
    }));
}
