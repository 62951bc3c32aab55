use super::error::FetchError;
use super::sections::Section;

/// Identifies one JSON resource of the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRequest {
    /// Path below the API base URL, e.g. `/faq`
    pub endpoint: String,
    /// Sent as the `website` query parameter
    pub site_key: String,
    /// Human label used in failure messages, e.g. "FAQ data"
    pub resource: String,
}

impl SectionRequest {
    pub fn new(
        endpoint: impl Into<String>,
        site_key: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            site_key: site_key.into(),
            resource: resource.into(),
        }
    }

    pub fn for_section<S: Section>(site_key: impl Into<String>) -> Self {
        Self::new(S::ENDPOINT, site_key, S::RESOURCE)
    }

    /// Reject requests that would hit the API without a path or a site.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.endpoint.trim().is_empty() {
            return Err(FetchError::InvalidRequest(format!(
                "no endpoint for {}",
                self.resource
            )));
        }
        if self.site_key.trim().is_empty() {
            return Err(FetchError::InvalidRequest(format!(
                "no site identifier for {}",
                self.resource
            )));
        }
        Ok(())
    }

    /// Full URL of the resource below `base_url`, without the query string.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{}{}", base, self.endpoint)
        } else {
            format!("{}/{}", base, self.endpoint)
        }
    }

    pub fn query(&self) -> [(&str, &str); 1] {
        [("website", self.site_key.as_str())]
    }
}
