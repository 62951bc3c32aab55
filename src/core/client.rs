//! Content API client.

use super::config::SiteConfig;
use super::contact::ContactFormData;
use super::error::{FetchError, SubmitError};
use super::request::SectionRequest;
use super::sections::{BlogsSection, Section};
use super::transport::Transport;

pub const CONTACT_ENDPOINT: &str = "/contact";

/// Talks to one site of the content API over a [`Transport`].
#[derive(Debug, Clone)]
pub struct ContentClient<T> {
    base_url: String,
    site: String,
    transport: T,
}

impl<T: Transport> ContentClient<T> {
    pub fn new(base_url: impl Into<String>, site: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            site: site.into(),
            transport,
        }
    }

    pub fn from_config(config: &SiteConfig, transport: T) -> Self {
        Self::new(&config.api_url, &config.site_identifier, transport)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn section_request<S: Section>(&self) -> SectionRequest {
        SectionRequest::for_section::<S>(&self.site)
    }

    pub fn blog_post_request(&self, id: &str) -> SectionRequest {
        SectionRequest::new(BlogsSection::post_endpoint(id), &self.site, "blog post")
    }

    /// GET the resource and parse it as `S`.
    pub async fn fetch<S: Section>(&self, request: &SectionRequest) -> Result<S, FetchError> {
        request.validate()?;
        let url = request.url(&self.base_url);
        let response = self
            .transport
            .get(&url, &request.query())
            .await
            .map_err(|e| FetchError::Network(e.0))?;

        if !response.is_success() {
            return Err(FetchError::Http {
                resource: request.resource.clone(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| FetchError::Parse {
            resource: request.resource.clone(),
            reason: e.to_string(),
        })
    }

    pub async fn fetch_section<S: Section>(&self) -> Result<S, FetchError> {
        self.fetch(&self.section_request::<S>()).await
    }

    /// POST a lead. Any 2xx counts as accepted; the body is ignored.
    pub async fn submit_lead(&self, lead: &ContactFormData) -> Result<(), SubmitError> {
        let url = format!("{}{}", self.base_url, CONTACT_ENDPOINT);
        let response = self
            .transport
            .post_json(&url, &[("website", self.site.as_str())], lead)
            .await
            .map_err(|e| SubmitError::Network(e.0))?;

        if response.is_success() {
            tracing::info!("lead accepted for {}", self.site);
            Ok(())
        } else {
            Err(SubmitError::rejected(response.status, &response.body))
        }
    }
}
