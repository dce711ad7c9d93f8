use crate::application::ports::remote_client::{RemoteClient, RemoteError};
use crate::domain::entities::{Need, NeedsOverview, SyncBatchOutcome, VerificationSubmission};
use crate::domain::value_objects::{NeedId, VolunteerId};
use crate::infrastructure::remote::dto::{
    ListNeedsResponse, NeedDto, NeedsOverviewResponse, SingleNeedResponse, SyncRequestBody,
    SyncResponse, VerificationDto, VerifyRequestBody,
};
use crate::shared::config::RemoteConfig;
use crate::shared::error::AppError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// reqwest-backed adapter for the remote need store. Transport only: no
/// retries, no state; a fixed request timeout is classified the same as
/// an unreachable host by the caller.
pub struct HttpRemoteClient {
    client: Client,
    base_url: String,
}

impl HttpRemoteClient {
    pub fn new(config: &RemoteConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| AppError::Network(err.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl RemoteClient for HttpRemoteClient {
    async fn fetch_unverified_needs(&self) -> Result<Vec<Need>, RemoteError> {
        let response: ListNeedsResponse =
            request_json(self.client.get(self.url("/needs/unverified"))).await?;
        response
            .data
            .into_iter()
            .map(NeedDto::into_domain)
            .collect()
    }

    async fn fetch_needs_overview(&self) -> Result<NeedsOverview, RemoteError> {
        let response: NeedsOverviewResponse =
            request_json(self.client.get(self.url("/needs"))).await?;
        let needs = response
            .data
            .into_iter()
            .map(NeedDto::into_domain)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NeedsOverview {
            stats: response.stats.into_domain(),
            needs,
        })
    }

    async fn fetch_need(&self, id: &NeedId) -> Result<Need, RemoteError> {
        let response: SingleNeedResponse =
            request_json(self.client.get(self.url(&format!("/needs/{id}")))).await?;
        response.data.into_domain()
    }

    async fn verify_need(
        &self,
        id: &NeedId,
        volunteer_id: &VolunteerId,
        notes: Option<&str>,
    ) -> Result<Need, RemoteError> {
        let body = VerifyRequestBody {
            volunteer_id: volunteer_id.to_string(),
            notes: notes.unwrap_or_default().to_string(),
        };
        let response: SingleNeedResponse = request_json(
            self.client
                .put(self.url(&format!("/needs/{id}/verify")))
                .json(&body),
        )
        .await?;
        response.data.into_domain()
    }

    async fn sync_verifications(
        &self,
        batch: &[VerificationSubmission],
    ) -> Result<SyncBatchOutcome, RemoteError> {
        let body = SyncRequestBody {
            verifications: batch.iter().map(VerificationDto::from).collect(),
        };
        let response: SyncResponse =
            request_json(self.client.post(self.url("/needs/sync")).json(&body)).await?;
        let results = response
            .results
            .into_iter()
            .map(|result| result.into_domain())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SyncBatchOutcome {
            results,
            message: response.message,
        })
    }
}

async fn request_json<T: DeserializeOwned>(
    builder: reqwest::RequestBuilder,
) -> Result<T, RemoteError> {
    let response = builder.send().await.map_err(classify_transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(classify_transport_error)?;
    if !status.is_success() {
        return Err(classify_status(status, &body));
    }
    serde_json::from_str(&body).map_err(|err| RemoteError::Decode(err.to_string()))
}

fn classify_transport_error(err: reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::Timeout
    } else {
        RemoteError::Unreachable(err.to_string())
    }
}

fn classify_status(status: StatusCode, body: &str) -> RemoteError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::NOT_FOUND => RemoteError::NotFound,
        StatusCode::BAD_REQUEST => RemoteError::InvalidBatch(message),
        _ => RemoteError::Rejected {
            status: status.as_u16(),
            message,
        },
    }
}
