use std::time::Duration;

use clap::Parser;
use once_cell::sync::Lazy;
use reqwest::Url;

/// Checks that the InnerCalm frontend and backend are up and talking to each other
#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {}

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Origin the frontend serves from, sent on the CORS preflight
pub const FRONTEND_ORIGIN: &str = "http://localhost:3000";

pub static BACKEND_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost:8000").expect("Invalid built-in backend URL"));

pub static FRONTEND_URL: Lazy<Url> =
    Lazy::new(|| Url::parse(FRONTEND_ORIGIN).expect("Invalid built-in frontend URL"));

/// The two services under test.
#[derive(Clone, Debug)]
pub struct Targets {
    pub backend: Url,
    pub frontend: Url,
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            backend: BACKEND_URL.clone(),
            frontend: FRONTEND_URL.clone(),
        }
    }
}

impl Targets {
    pub fn backend_endpoint(&self, path: &str) -> String {
        endpoint(&self.backend, path)
    }

    pub fn frontend_endpoint(&self, path: &str) -> String {
        endpoint(&self.frontend, path)
    }

    /// Base URL without the trailing slash `Url` always adds.
    pub fn backend_base(&self) -> &str {
        self.backend.as_str().trim_end_matches('/')
    }

    pub fn frontend_base(&self) -> &str {
        self.frontend.as_str().trim_end_matches('/')
    }
}

fn endpoint(base: &Url, path: &str) -> String {
    format!("{}{}", base.as_str().trim_end_matches('/'), path)
}
