use contracts::domain::a001_pizza_order::aggregate::{OrderReply, OrderRequest};
use contracts::domain::a001_pizza_order::submission::{reply_result, SubmissionError};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Send the order. One request, no retry.
pub async fn submit_order(request: &OrderRequest) -> Result<OrderReply, SubmissionError> {
    let response = Request::post(&api_url("/api/order"))
        .json(request)
        .map_err(|e| SubmissionError::Serialize(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    // A body that cannot be read is treated as empty; the status still decides.
    let text = response.text().await.unwrap_or_default();

    reply_result(response.ok(), response.status(), &text)
}
