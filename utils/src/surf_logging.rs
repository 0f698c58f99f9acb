use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response};

/// Middleware that logs every request passing through a [`surf::Client`]:
/// method and URL on the way out, status and elapsed time on the way back.
pub struct SurfLogging;

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(&self, req: Request, client: Client, next: Next<'_>) -> surf::Result<Response> {
        let method = req.method();
        let url = req.url().clone();
        log::debug!("-> {} {}", method, url);

        let start = Instant::now();
        let res = next.run(req, client).await?;
        log::debug!("<- {} {} {} ({:?})", method, url, res.status(), start.elapsed());

        Ok(res)
    }
}
