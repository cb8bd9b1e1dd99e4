use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName},
    Client, Method, RequestBuilder, StatusCode,
};
use tracing::debug;

use crate::error::ProbeError;

/// What came back from a single probe.
#[derive(Debug)]
pub enum Outcome {
    Responded { status: StatusCode, headers: HeaderMap },
    Failed(ProbeError),
}

#[derive(Debug)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: Outcome,
}

impl ProbeResult {
    pub fn status(&self) -> Option<StatusCode> {
        match &self.outcome {
            Outcome::Responded { status, .. } => Some(*status),
            Outcome::Failed(_) => None,
        }
    }

    pub fn is_status(&self, expected: StatusCode) -> bool {
        self.status() == Some(expected)
    }

    /// Presence of the header only; its value is not looked at.
    pub fn has_header(&self, name: &HeaderName) -> bool {
        match &self.outcome {
            Outcome::Responded { headers, .. } => headers.contains_key(name),
            Outcome::Failed(_) => false,
        }
    }

    pub fn error(&self) -> Option<&ProbeError> {
        match &self.outcome {
            Outcome::Failed(err) => Some(err),
            Outcome::Responded { .. } => None,
        }
    }
}

/// Issues probes one at a time over a shared client, each bounded by `timeout`.
///
/// Transport failures never surface as `Err`; they end up in [`Outcome::Failed`].
pub struct Prober {
    client: Client,
    timeout: Duration,
}

impl Prober {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }

    pub async fn get(&self, url: &str) -> ProbeResult {
        self.send(url, self.client.request(Method::GET, url)).await
    }

    /// Sends a CORS preflight (`OPTIONS`) asking whether `origin` may issue `method` with `headers`.
    pub async fn preflight(&self, url: &str, origin: &str, method: Method, headers: &[&str]) -> ProbeResult {
        let request = self
            .client
            .request(Method::OPTIONS, url)
            .header(reqwest::header::ORIGIN, origin)
            .header(reqwest::header::ACCESS_CONTROL_REQUEST_METHOD, method.as_str())
            .header(reqwest::header::ACCESS_CONTROL_REQUEST_HEADERS, headers.join(","));
        self.send(url, request).await
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> ProbeResult {
        debug!("Probing {url} ...");
        let outcome = match request.timeout(self.timeout).send().await {
            Ok(resp) => {
                let status = resp.status();
                let headers = resp.headers().clone();
                // The request timeout also bounds the body read.
                match resp.bytes().await {
                    Ok(body) => {
                        debug!("{url} answered with {status} ({} bytes)", body.len());
                        Outcome::Responded { status, headers }
                    }
                    Err(err) => {
                        debug!("{url} answered with {status} but the body failed: {err}");
                        Outcome::Failed(ProbeError::from_reqwest(err, self.timeout))
                    }
                }
            }
            Err(err) => {
                debug!("{url} unreachable: {err}");
                Outcome::Failed(ProbeError::from_reqwest(err, self.timeout))
            }
        };
        ProbeResult {
            url: url.to_owned(),
            outcome,
        }
    }
}
