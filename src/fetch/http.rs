//! Blocking HTTP page fetcher backed by `ureq`.
//!
//! Every request carries the configured browser-like `User-Agent`. There is
//! no retry and no timeout override; a non-success status is an error.

use crate::error::{FetchError, FetchResult};
use crate::fetch::PageFetcher;

pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Self {
        let agent = ureq::AgentBuilder::new().user_agent(user_agent).build();
        Self { agent }
    }
}

impl PageFetcher for HttpFetcher {
    fn get(&self, url: &str) -> FetchResult<String> {
        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(status, _) => FetchError::Status {
                url: url.into(),
                status,
            },
            ureq::Error::Transport(transport) => FetchError::Transport {
                url: url.into(),
                message: transport.to_string(),
            },
        })?;

        tracing::debug!(url, status = response.status(), "fetched page");

        response.into_string().map_err(|e| FetchError::Body {
            url: url.into(),
            message: e.to_string(),
        })
    }
}
