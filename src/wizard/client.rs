//! HTTP client for the submission endpoint
//!
//! Posts the assembled payload and folds the server's answer into a
//! [`ServerReply`]. Transport and decode failures stay `Err`; any HTTP
//! status becomes a reply variant so the controller can route it.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::models::submission::SubmissionPayload;

/// The server's answer to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerReply {
    /// 2xx with the confirmation message
    Success { message: String },
    /// 409, a customer with this PAN already exists
    Conflict { error: String },
    /// Any other status, carrying the server's error text
    Failure { error: String },
}

#[derive(Debug, Deserialize)]
struct ReplyBody {
    message: Option<String>,
    error: Option<String>,
}

pub async fn submit_form(
    client: &reqwest::Client,
    base_url: &str,
    payload: &SubmissionPayload,
) -> Result<ServerReply, reqwest::Error> {
    tracing::debug!("Posting submission for {}", payload.company_name);

    let response = client
        .post(format!("{base_url}/submit-form"))
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    let body: ReplyBody = response.json().await?;

    if status.is_success() {
        return Ok(ServerReply::Success {
            message: body.message.unwrap_or_default(),
        });
    }
    if status == StatusCode::CONFLICT {
        return Ok(ServerReply::Conflict {
            error: body.error.unwrap_or_default(),
        });
    }

    tracing::warn!("Submission rejected with {}", status);
    Ok(ServerReply::Failure {
        error: body
            .error
            .or(body.message)
            .unwrap_or_else(|| "Unknown error".to_string()),
    })
}
