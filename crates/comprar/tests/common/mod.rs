//! Shared harness setup for the integration suites.

use comprar::{HarnessConfig, SessionProvider};
use tempfile::TempDir;

/// A provider over the simulated storefront, with a throwaway session dir.
/// The `TempDir` guard must outlive the provider.
pub async fn provider() -> (SessionProvider, TempDir) {
    init_tracing();
    let dir = TempDir::new().expect("temp dir");
    let config = HarnessConfig::new()
        .with_base_url("https://demo.test")
        .with_state_dir(dir.path());
    let provider = SessionProvider::launch(config).await.expect("launch");
    (provider, dir)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
