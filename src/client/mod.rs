//! Client layer: validation gate, HTTP dispatch, and bulk aggregation.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{
    BatchError, BatchPlan, BatchResult, Credentials, DuplicatePolicy, SendFailure, SendOutcome,
    SendRequest, plan_batch, validate_msisdn,
};

const DEFAULT_ENDPOINT: &str = "https://102.23.122.190/hermes/send/sms.php";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_text<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_text<'a>(
        &'a self,
        url: &'a str,
        body: String,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(body)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned when constructing a [`SavannacomClient`].
///
/// Sending never fails with this type: send operations report every problem
/// inside the returned [`SendOutcome`] or [`BatchResult`].
pub enum SavannacomError {
    /// The HTTP client could not be built (TLS backend, invalid user-agent, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured endpoint is not a valid absolute URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
/// Builder for [`SavannacomClient`].
///
/// Use this when you need to customize the endpoint, timeout, user-agent, or
/// certificate checking.
pub struct SavannacomClientBuilder {
    credentials: Credentials,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    accept_invalid_certs: bool,
}

impl SavannacomClientBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
            accept_invalid_certs: true,
        }
    }

    /// Override the send endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Whether to accept the endpoint's certificate without verification.
    ///
    /// Defaults to `true`: the provider serves a self-signed certificate on a bare IP.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build a [`SavannacomClient`].
    pub fn build(self) -> Result<SavannacomClient, SavannacomError> {
        url::Url::parse(&self.endpoint)?;

        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(self.accept_invalid_certs);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SavannacomError::Transport(Box::new(err)))?;

        Ok(SavannacomClient {
            credentials: self.credentials,
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Savannacom client holding the account credentials.
///
/// Every send is total: validation failures, provider rejections, and transport
/// failures all come back as data, never as `Err`.
pub struct SavannacomClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SavannacomClient {
    /// Create a client for the given sender id and username using the default endpoint.
    ///
    /// For more customization, use [`SavannacomClient::builder`].
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, SavannacomError> {
        Self::builder(Credentials::new(id, username)).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SavannacomClientBuilder {
        SavannacomClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one SMS.
    ///
    /// The recipient is validated first; an invalid number is reported as a
    /// `Request not sent` outcome without contacting the provider.
    pub async fn send_sms(&self, recipient: &str, message: &str) -> SendOutcome {
        if let Err(err) = validate_msisdn(recipient) {
            debug!(recipient, error = %err, "recipient rejected before sending");
            return SendOutcome::not_sent(&self.credentials, recipient, message, err.into());
        }

        self.dispatch(recipient, message).await
    }

    /// Send many SMS, one provider call per dispatched entry.
    ///
    /// Invalid recipients are reported in `errors` and skipped. Repeated
    /// recipients are reported in `duplicates` and, with
    /// [`DuplicatePolicy::Skip`], not sent again. All dispatches run
    /// concurrently and the result is built once every one of them settled;
    /// failed dispatches are appended to `errors` after the validation errors,
    /// in dispatch order.
    ///
    /// An empty batch yields a single `N/A` / `No data provided` error.
    pub async fn send_bulk(
        &self,
        entries: Vec<SendRequest>,
        policy: DuplicatePolicy,
    ) -> BatchResult {
        let plan = plan_batch(entries, policy);
        debug!(
            dispatch = plan.dispatch.len(),
            duplicates = plan.duplicates.len(),
            rejected = plan.rejected.len(),
            ?policy,
            "planned bulk send"
        );

        let BatchPlan {
            dispatch,
            duplicates,
            rejected: mut errors,
        } = plan;

        let outcomes = join_all(
            dispatch
                .iter()
                .map(|entry| self.dispatch(&entry.recipient, &entry.message)),
        )
        .await;

        errors.extend(
            dispatch
                .iter()
                .zip(outcomes)
                .filter(|(_, outcome)| !outcome.is_success())
                .map(|(entry, outcome)| {
                    BatchError::new(entry.recipient.clone(), outcome.error_text())
                }),
        );

        BatchResult::new(errors, duplicates)
    }

    /// Post one message and normalize any transport failure into an outcome.
    async fn dispatch(&self, recipient: &str, message: &str) -> SendOutcome {
        debug!(recipient, endpoint = %self.endpoint, "sending sms");
        match self.try_dispatch(recipient, message).await {
            Ok(outcome) => {
                if !outcome.is_success() {
                    warn!(recipient, status = %outcome.status, "provider rejected sms");
                }
                outcome
            }
            Err(failure) => {
                warn!(recipient, error = %failure, "sms not sent");
                SendOutcome::not_sent(&self.credentials, recipient, message, failure)
            }
        }
    }

    async fn try_dispatch(
        &self,
        recipient: &str,
        message: &str,
    ) -> Result<SendOutcome, SendFailure> {
        let body = crate::transport::encode_send_sms_body(&self.credentials, recipient, message)
            .map_err(|err| SendFailure::Transport(err.to_string()))?;

        let response = self
            .http
            .post_text(&self.endpoint, body)
            .await
            .map_err(|err| SendFailure::Transport(err.to_string()))?;

        let decoded = crate::transport::decode_send_sms_json_response(
            &self.credentials,
            recipient,
            message,
            &response.body,
        );

        match decoded {
            Ok(outcome) => Ok(outcome),
            Err(_) if !(200..=299).contains(&response.status) => {
                let body = if response.body.trim().is_empty() {
                    None
                } else {
                    Some(response.body)
                };
                Err(SendFailure::HttpStatus {
                    status: response.status,
                    body,
                })
            }
            Err(err) => Err(SendFailure::Parse(err.to_string())),
        }
    }
}
