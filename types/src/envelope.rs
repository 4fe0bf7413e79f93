use serde::{Deserialize, Serialize};

/// Envelope the indexer wraps every payload in. The HTTP status line is
/// not authoritative; `status_code` is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_envelope() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"statusCode":200,"data":[1,2]}"#).unwrap();

        assert_eq!(envelope.status_code, 200);
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data, Some(vec![1, 2]));
    }

    #[test]
    fn decodes_error_envelope_without_data() {
        let envelope: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"statusCode":404,"message":"tx not found"}"#).unwrap();

        assert_eq!(envelope.status_code, 404);
        assert_eq!(envelope.message.as_deref(), Some("tx not found"));
        assert!(envelope.data.is_none());
    }
}
