//! Contact endpoint integration

use super::model::ContactRequest;
use crate::config::ContactConfig;
use crate::{CoreError, CoreResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionError {
    #[error("endpoint rejected the inquiry with status {status}")]
    Rejected { status: u16 },

    #[error("could not reach the contact endpoint: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        SubmissionError::Transport(e.to_string())
    }
}

/// Receiver of validated inquiries
#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    /// Deliver one inquiry. Any accepted status is `Ok`.
    async fn submit(&self, request: &ContactRequest) -> Result<(), SubmissionError>;
}

/// Posts inquiries as JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpContactEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpContactEndpoint {
    pub fn new(config: &ContactConfig) -> CoreResult<Self> {
        config.validate()?;

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| CoreError::Config(format!("invalid user agent: {}", e)))?;
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            url: config.endpoint_url.clone(),
        })
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ContactEndpoint for HttpContactEndpoint {
    async fn submit(&self, request: &ContactRequest) -> Result<(), SubmissionError> {
        debug!("POST {}", self.url);

        let response = self.client.post(&self.url).json(request).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactForm;
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn spawn_endpoint(status: StatusCode) -> (String, Received) {
        let received: Received = Arc::default();

        let app = Router::new()
            .route(
                "/api/contact",
                post(
                    move |State(store): State<Received>, Json(body): Json<Value>| async move {
                        store.lock().unwrap().push(body);
                        status
                    },
                ),
            )
            .with_state(received.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/api/contact", addr), received)
    }

    fn request() -> ContactRequest {
        ContactForm {
            first_name: "Jo".into(),
            last_name: "Doe".into(),
            email: "a@b.com".into(),
            phone: "1234567890".into(),
            company: "Ac".into(),
            job_title: "Eng".into(),
            business_segment: "technology".into(),
            help_type: "product-info".into(),
            referral_source: "web".into(),
            additional_details: String::new(),
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn test_posts_camel_case_json() {
        let (url, received) = spawn_endpoint(StatusCode::OK).await;
        let endpoint = HttpContactEndpoint::new(&ContactConfig::new(url)).unwrap();

        endpoint.submit(&request()).await.unwrap();

        let bodies = received.lock().unwrap();
        assert_eq!(bodies.len(), 1);
        let body = &bodies[0];
        assert_eq!(body["firstName"], "Jo");
        assert_eq!(body["jobTitle"], "Eng");
        assert_eq!(body["businessSegment"], "technology");
        assert_eq!(body["helpType"], "product-info");
        assert_eq!(body["referralSource"], "web");
        assert_eq!(body["additionalDetails"], "");
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejection() {
        let (url, received) = spawn_endpoint(StatusCode::INTERNAL_SERVER_ERROR).await;
        let endpoint = HttpContactEndpoint::new(&ContactConfig::new(url)).unwrap();

        let err = endpoint.submit(&request()).await.unwrap_err();

        assert_eq!(err, SubmissionError::Rejected { status: 500 });
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint =
            HttpContactEndpoint::with_client(reqwest::Client::new(), format!("http://{}/api/contact", addr));
        let err = endpoint.submit(&request()).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Transport(_)));
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(HttpContactEndpoint::new(&ContactConfig::new("not a url")).is_err());

        let mut config = ContactConfig::new("http://127.0.0.1/api/contact");
        config.user_agent = "Terafence\nSite".into();
        assert!(matches!(HttpContactEndpoint::new(&config), Err(CoreError::Config(_))));
    }
}
