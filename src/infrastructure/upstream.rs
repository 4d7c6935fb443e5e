use std::{
    error::Error as StdError,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use reqwest::{header, StatusCode};
use thiserror::Error;

use crate::{domain::models::ReportQuery, infrastructure::config::Config};

/// A failure to complete the HTTP exchange at all: connection refused, DNS,
/// TLS, a dropped body. Carries the client's own description of the failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportFault {
    message: String,
}

impl TransportFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportFault {
    fn from(value: reqwest::Error) -> Self {
        Self::new(describe_chain(&value))
    }
}

/// Joins an error and its sources with `": "`. reqwest keeps the actual cause
/// (refused, DNS, TLS) out of its top-level message.
fn describe_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !text.ends_with(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub elapsed: Duration,
}

#[async_trait]
pub trait ReportGateway: Send + Sync {
    async fn post(&self, payload: &ReportQuery) -> Result<UpstreamReply, TransportFault>;
}

#[derive(Clone)]
pub struct HttpReportGateway {
    endpoint: String,
    api_key: String,
    http: reqwest::Client,
}

impl HttpReportGateway {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_endpoint.clone(), config.api_key.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReportGateway for HttpReportGateway {
    async fn post(&self, payload: &ReportQuery) -> Result<UpstreamReply, TransportFault> {
        let started = Instant::now();
        // The key goes out exactly as configured; upstream expects no scheme prefix.
        let response = self
            .http
            .post(&self.endpoint)
            .header(header::AUTHORIZATION, &self.api_key)
            .json(payload)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(UpstreamReply {
            status,
            body: body.to_vec(),
            elapsed: started.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::describe_chain;
    use std::{error::Error, fmt, io};

    #[derive(Debug)]
    struct Outer(io::Error);

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request for url (http://127.0.0.1:9/graphql)")
        }
    }

    impl Error for Outer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn appends_each_cause() {
        let err = Outer(io::Error::new(io::ErrorKind::ConnectionRefused, "Connection refused"));

        assert_eq!(
            describe_chain(&err),
            "error sending request for url (http://127.0.0.1:9/graphql): Connection refused"
        );
    }

    #[test]
    fn plain_error_is_unchanged() {
        let err = io::Error::new(io::ErrorKind::Other, "dns error");

        assert_eq!(describe_chain(&err), "dns error");
    }
}
