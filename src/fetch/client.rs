use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes a prepared request. Implementations decide pooling, timeouts and
/// any header injection.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
