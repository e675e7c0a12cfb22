use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{DocumentParser, DocumentParserError};
use crate::domain::{Document, DocumentSegment};

pub const POLL_TIMEOUT: Duration = Duration::from_secs(300);
pub const INITIAL_BACKOFF: Duration = Duration::from_secs(2);
pub const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Adapter for the hosted parsing service: upload the document, poll the job
/// until it settles, fetch the per-page markdown result.
pub struct CloudParseAdapter {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CloudParseAdapter {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("reqwest client build never fails with valid TLS config");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn submit(&self, data: &[u8], document: &Document) -> Result<String, DocumentParserError> {
        let part = reqwest::multipart::Part::bytes(data.to_vec())
            .file_name(document.filename.clone())
            .mime_str(&document.content_type)
            .map_err(|e| {
                DocumentParserError::ParsingFailed(format!("invalid content type: {e}"))
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/api/parsing/upload", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| DocumentParserError::ParsingFailed(format!("upload failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DocumentParserError::ParsingFailed(format!(
                "upload returned {status}: {text}"
            )));
        }

        let upload: UploadResponse = response.json().await.map_err(|e| {
            DocumentParserError::ParsingFailed(format!("upload response parse failed: {e}"))
        })?;

        Ok(upload.id)
    }

    async fn poll_until_complete(&self, job_id: &str) -> Result<(), DocumentParserError> {
        let poll_future = async {
            let mut backoff = INITIAL_BACKOFF;

            loop {
                let response = self
                    .client
                    .get(format!("{}/api/parsing/job/{}", self.base_url, job_id))
                    .bearer_auth(&self.api_key)
                    .send()
                    .await
                    .map_err(|e| {
                        DocumentParserError::ParsingFailed(format!("poll request failed: {e}"))
                    })?;

                if response.status().as_u16() == 429 {
                    let retry_after = response
                        .headers()
                        .get("Retry-After")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(backoff.as_secs());
                    tokio::time::sleep(Duration::from_secs(retry_after)).await;
                    continue;
                }

                if !response.status().is_success() {
                    let status = response.status();
                    let text = response.text().await.unwrap_or_default();
                    return Err(DocumentParserError::ParsingFailed(format!(
                        "poll returned {status}: {text}"
                    )));
                }

                let job: JobStatusResponse = response.json().await.map_err(|e| {
                    DocumentParserError::ParsingFailed(format!("poll response parse failed: {e}"))
                })?;

                match job.status.as_str() {
                    "SUCCESS" => return Ok(()),
                    "ERROR" | "CANCELED" => {
                        return Err(DocumentParserError::ParsingFailed(format!(
                            "parsing job {} ended with status {}",
                            job_id, job.status
                        )));
                    }
                    _ => {
                        tokio::time::sleep(backoff).await;
                        backoff = (backoff * 2).min(MAX_BACKOFF);
                    }
                }
            }
        };

        tokio::time::timeout(POLL_TIMEOUT, poll_future)
            .await
            .map_err(|_| {
                DocumentParserError::ParsingFailed(format!(
                    "parsing job polling timed out after {}s",
                    POLL_TIMEOUT.as_secs()
                ))
            })?
    }

    async fn fetch_result(&self, job_id: &str) -> Result<Vec<DocumentSegment>, DocumentParserError> {
        let response = self
            .client
            .get(format!(
                "{}/api/parsing/job/{}/result/json",
                self.base_url, job_id
            ))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| DocumentParserError::ParsingFailed(format!("result fetch failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DocumentParserError::ParsingFailed(format!(
                "result fetch returned {status}: {text}"
            )));
        }

        let result: JobResultResponse = response.json().await.map_err(|e| {
            DocumentParserError::ParsingFailed(format!("result parse failed: {e}"))
        })?;

        Ok(result
            .pages
            .into_iter()
            .map(|page| DocumentSegment::new(page.md, Some(page.page)))
            .collect())
    }
}

#[async_trait]
impl DocumentParser for CloudParseAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename
        )
    )]
    async fn parse(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<DocumentSegment>, DocumentParserError> {
        if !document.extension.parseable() {
            return Err(DocumentParserError::UnsupportedExtension(
                document.extension.as_str().to_string(),
            ));
        }

        let job_id = self.submit(data, document).await?;
        tracing::debug!(job_id = %job_id, "Parsing job submitted");

        self.poll_until_complete(&job_id).await?;
        let segments = self.fetch_result(&job_id).await?;

        if segments.iter().all(|segment| segment.text.trim().is_empty()) {
            return Err(DocumentParserError::NoTextFound(document.filename.clone()));
        }

        Ok(segments)
    }
}

#[derive(Deserialize)]
pub struct UploadResponse {
    pub id: String,
}

#[derive(Deserialize)]
pub struct JobStatusResponse {
    pub status: String,
}

#[derive(Deserialize)]
pub struct JobResultResponse {
    pub pages: Vec<ParsedPage>,
}

#[derive(Deserialize)]
pub struct ParsedPage {
    pub page: u32,
    pub md: String,
}
