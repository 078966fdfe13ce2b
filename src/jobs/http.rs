//! reqwest-Adapter zum FixPix-Backend (`/api/images/`).

use super::{GenerationRequest, JobBackend, JobError};
use crate::core::{resolve_media_url, Job, JobId, JobStatus, ProjectHandle, SettingsRecord};
use crate::shared::EditorOptions;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Höchster Upscale-Faktor, den das Backend annimmt.
const MAX_UPSCALE: u8 = 4;

/// Projekt-Antwort des Backends.
#[derive(Debug, Deserialize)]
struct ImageProjectResponse {
    id: serde_json::Value,
    #[serde(default)]
    original_image: Option<String>,
    #[serde(default)]
    processed_image: Option<String>,
    status: JobStatus,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ProcessImageBody<'a> {
    settings: &'a SettingsRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    mask: Option<String>,
}

/// HTTP-Backend für den Produktivbetrieb.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    api_base: String,
    media_base: String,
    token: Option<String>,
}

impl HttpBackend {
    /// Baut einen Client mit dem Request-Timeout aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Result<Self, JobError> {
        let client = Client::builder()
            .timeout(options.request_timeout())
            .build()
            .map_err(|e| JobError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            api_base: options.api_base_url.trim_end_matches('/').to_string(),
            media_base: options.media_base().to_string(),
            token: None,
        })
    }

    /// Bearer-Token für alle folgenden Anfragen.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn images_url(&self) -> String {
        format!("{}/api/images/", self.api_base)
    }

    fn image_url(&self, id: &str) -> String {
        format!("{}/api/images/{}/", self.api_base, id)
    }

    fn process_url(&self, id: &str) -> String {
        format!("{}/api/images/{}/process_image/", self.api_base, id)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn to_job(&self, project: ImageProjectResponse) -> Job {
        Job {
            id: JobId(project_id_string(&project.id)),
            status: project.status,
            result_url: project
                .processed_image
                .filter(|_| project.status == JobStatus::Completed)
                .map(|path| resolve_media_url(&self.media_base, &path)),
            error_message: project.error,
        }
    }
}

impl JobBackend for HttpBackend {
    async fn upload_image(&self, path: &Path) -> Result<ProjectHandle, JobError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| JobError::Io(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image.jpg".to_string());
        let form = Form::new().part("original_image", Part::bytes(bytes).file_name(file_name));

        let response = self
            .authorize(self.client.post(self.images_url()))
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;
        let project: ImageProjectResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        let id = project_id_string(&project.id);
        log::info!("Bild hochgeladen: {} -> Projekt {}", path.display(), id);
        Ok(ProjectHandle {
            original_url: project
                .original_image
                .map(|url| resolve_media_url(&self.media_base, &url))
                .unwrap_or_default(),
            id,
        })
    }

    async fn submit_job(&self, request: &GenerationRequest) -> Result<JobId, JobError> {
        let project_id = request
            .project_id
            .as_deref()
            .ok_or(JobError::MissingProject)?;

        let mut settings = request.settings.clone();
        settings.upscale_x = settings.upscale_x.min(MAX_UPSCALE);
        let mask = match &request.mask {
            Some(mask) => Some(
                mask.to_base64()
                    .map_err(|e| JobError::InvalidResponse(e.to_string()))?,
            ),
            None => None,
        };
        let body = ProcessImageBody {
            settings: &settings,
            mask,
        };

        let response = self
            .authorize(self.client.post(self.process_url(project_id)))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        ensure_success(response).await?;

        log::info!("Verarbeitung angefragt für Projekt {}", project_id);
        // Das Backend pollt über das Projekt, nicht über die Task-ID.
        Ok(JobId(project_id.to_string()))
    }

    async fn job_status(&self, job_id: &JobId) -> Result<Job, JobError> {
        let response = self
            .authorize(self.client.get(self.image_url(&job_id.0)))
            .send()
            .await
            .map_err(transport_error)?;
        let project: ImageProjectResponse = ensure_success(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;
        Ok(self.to_job(project))
    }
}

/// Projekt-IDs kommen je nach Backend als Zahl oder String.
fn project_id_string(id: &serde_json::Value) -> String {
    match id {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn transport_error(err: reqwest::Error) -> JobError {
    if err.is_timeout() {
        JobError::Timeout(err.to_string())
    } else if err.is_connect() {
        JobError::Connection(err.to_string())
    } else if err.is_decode() {
        JobError::InvalidResponse(err.to_string())
    } else if let Some(status) = err.status() {
        JobError::Rejected {
            status: status.as_u16(),
            message: None,
        }
    } else {
        JobError::Connection(err.to_string())
    }
}

async fn ensure_success(response: Response) -> Result<Response, JobError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::warn!("Backend antwortete mit HTTP {}: {}", status.as_u16(), body);
    Err(JobError::Rejected {
        status: status.as_u16(),
        message: error_message_from_body(&body),
    })
}

/// Liest `error` bzw. `detail` aus einer JSON-Fehlerantwort.
fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "detail"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
