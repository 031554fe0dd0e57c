use thiserror::Error;

use super::aggregate::OrderReply;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for your order!";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Something went wrong";

/// Результат последней попытки отправки заказа
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    None,
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Success(m) => Some(m),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Failure(m) => Some(m),
            _ => None,
        }
    }

    pub fn from_result(result: Result<OrderReply, SubmissionError>) -> Self {
        match result {
            Ok(reply) => SubmissionOutcome::Success(
                non_empty(reply.message).unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
            ),
            Err(e) => e.into(),
        }
    }
}

/// Ошибка отправки заказа
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("failed to serialize order: {0}")]
    Serialize(String),
    #[error("failed to send order: {0}")]
    Network(String),
    #[error("order rejected with HTTP {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

impl From<SubmissionError> for SubmissionOutcome {
    fn from(e: SubmissionError) -> Self {
        let message = match e {
            SubmissionError::Rejected { message, .. } => non_empty(message),
            SubmissionError::Serialize(_) | SubmissionError::Network(_) => None,
        };
        SubmissionOutcome::Failure(message.unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()))
    }
}

/// Split a raw HTTP reply by status.
///
/// `ok` is the 2xx check; `body` may be empty or not JSON at all.
pub fn reply_result(ok: bool, status: u16, body: &str) -> Result<OrderReply, SubmissionError> {
    let message = parse_message(body);
    if ok {
        Ok(OrderReply { message })
    } else {
        Err(SubmissionError::Rejected { status, message })
    }
}

/// `message` из тела ответа, если тело является JSON-объектом с непустым полем
fn parse_message(body: &str) -> Option<String> {
    serde_json::from_str::<OrderReply>(body)
        .ok()
        .and_then(|reply| non_empty(reply.message))
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(ok: bool, status: u16, body: &str) -> SubmissionOutcome {
        SubmissionOutcome::from_result(reply_result(ok, status, body))
    }

    #[test]
    fn test_success_reply_with_message() {
        assert_eq!(
            outcome(true, 201, r#"{"message":"Order #42 placed"}"#),
            SubmissionOutcome::Success("Order #42 placed".to_string())
        );
    }

    #[test]
    fn test_success_reply_defaults() {
        for body in ["", "{}", "not json", r#"{"message":""}"#, r#"{"message":null}"#] {
            assert_eq!(
                outcome(true, 200, body),
                SubmissionOutcome::Success(DEFAULT_SUCCESS_MESSAGE.to_string()),
                "body {:?}",
                body
            );
        }
    }

    #[test]
    fn test_failure_reply() {
        assert_eq!(
            reply_result(false, 500, r#"{"message":"Out of dough"}"#),
            Err(SubmissionError::Rejected {
                status: 500,
                message: Some("Out of dough".to_string()),
            })
        );
        assert_eq!(
            outcome(false, 500, r#"{"message":"Out of dough"}"#),
            SubmissionOutcome::Failure("Out of dough".to_string())
        );
        assert_eq!(
            outcome(false, 502, "<html>502</html>"),
            SubmissionOutcome::Failure(DEFAULT_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_errors_become_failures() {
        let rejected = SubmissionError::Rejected {
            status: 500,
            message: Some("Out of dough".to_string()),
        };
        assert_eq!(rejected.to_string(), "order rejected with HTTP 500");
        assert_eq!(
            SubmissionOutcome::from(rejected),
            SubmissionOutcome::Failure("Out of dough".to_string())
        );
        assert_eq!(
            SubmissionOutcome::from(SubmissionError::Network("connection refused".to_string())),
            SubmissionOutcome::Failure(DEFAULT_FAILURE_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_from_result() {
        let ok = SubmissionOutcome::from_result(Ok(OrderReply { message: None }));
        assert_eq!(ok.success_message(), Some(DEFAULT_SUCCESS_MESSAGE));
        assert!(ok.is_success());
        let err = SubmissionOutcome::from_result(Err(SubmissionError::Rejected {
            status: 400,
            message: None,
        }));
        assert_eq!(err.failure_message(), Some(DEFAULT_FAILURE_MESSAGE));
    }
}
