use crate::error::KeskusError;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default extraction service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://sinceai.onrender.com";

/// Extraction can take minutes for large documents.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Blocking client for the remote extraction service.
///
/// One request per upload: multipart POST of the PDF to
/// `<base-url>/extract`. The raw response body is returned untouched so
/// callers can cache it verbatim before decoding.
pub struct ExtractClient {
    base_url: String,
    http: Client,
}

impl ExtractClient {
    pub fn new(base_url: &str) -> Result<ExtractClient, KeskusError> {
        let trimmed = base_url.trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(KeskusError::InvalidBaseUrl(base_url.to_string()));
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(ExtractClient {
            base_url: trimmed.to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a PDF and return the raw extraction response body.
    pub fn extract(&self, pdf_bytes: Vec<u8>, file_name: &str) -> Result<String, KeskusError> {
        let url = format!("{}/extract", self.base_url);
        info!(%url, size = pdf_bytes.len(), "uploading PDF for extraction");

        let part = Part::bytes(pdf_bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| KeskusError::Service(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| KeskusError::Service(e.to_string()))?;

        if !status.is_success() {
            return Err(KeskusError::ServiceStatus {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        debug!(bytes = body.len(), "extraction response received");
        Ok(body)
    }
}

/// First part of an error body, enough to diagnose without dumping
/// a whole HTML error page into the terminal.
fn snippet(body: &str) -> String {
    const LIMIT: usize = 200;
    if body.chars().count() <= LIMIT {
        body.to_string()
    } else {
        let truncated: String = body.chars().take(LIMIT).collect();
        format!("{truncated}…")
    }
}
