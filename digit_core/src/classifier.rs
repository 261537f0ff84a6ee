use std::fmt::Display;

use log::{error, info};

use crate::config::ClientConfig;
use crate::error::ClassifyError;
use crate::image::GrayScaleImage;

/// Anything that can turn a drawn image into a label.
#[allow(async_fn_in_trait)]
pub trait Classifier {
    type Error: Display;

    async fn read(&self, image: &GrayScaleImage) -> Result<String, Self::Error>;
}

/// Talks to the remote classification endpoint over HTTP.
///
/// Each [`read`](Classifier::read) is a single POST: no retries, no timeout,
/// no caching. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct ClassificationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ClassificationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for ClassificationClient {
    type Error = ClassifyError;

    async fn read(&self, image: &GrayScaleImage) -> Result<String, ClassifyError> {
        info!(
            "Sending {}x{} image to {}",
            image.width(),
            image.height(),
            self.endpoint
        );

        let response = self.http.post(&self.endpoint).json(image).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status {
                url: self.endpoint.clone(),
                status,
            });
        }

        let label = response
            .json::<String>()
            .await
            .map_err(|source| ClassifyError::Decode {
                url: self.endpoint.clone(),
                source,
            })?;
        info!("Classified as {label:?}");
        Ok(label)
    }
}

/// What the result and error areas currently show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Classification {
    /// Nothing has been read yet.
    #[default]
    Idle,
    Result(String),
    Error(String),
}

impl Classification {
    /// Folds a finished request into display state. A success hides any
    /// earlier error and a failure hides any earlier result.
    pub fn from_response<E: Display>(response: Result<String, E>) -> Self {
        match response {
            Ok(label) => Classification::Result(label),
            Err(e) => {
                let message = e.to_string();
                error!("Classification failed: {message}");
                Classification::Error(message)
            }
        }
    }

    pub fn apply<E: Display>(&mut self, response: Result<String, E>) {
        *self = Self::from_response(response);
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            Classification::Result(label) => Some(label),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Classification::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Sends `image` through `classifier` and returns the state to display.
pub async fn classify<C: Classifier>(classifier: &C, image: &GrayScaleImage) -> Classification {
    Classification::from_response(classifier.read(image).await)
}
