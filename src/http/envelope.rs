//! Response envelope: every payload travels next to first-failure data
//! capture (FFDC) fields that report remote exceptions.

use crate::error::{HttpError, SdkError};
use serde::Deserialize;
use std::collections::HashMap;

const INVALID_PARAMETER_EXCEPTION: &str = "InvalidParameterException";
const USER_NOT_AUTHORIZED_EXCEPTION: &str = "UserNotAuthorizedException";
const PROPERTY_SERVER_EXCEPTION: &str = "PropertyServerException";

/// A typed payload flattened alongside the FFDC fields.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(flatten)]
    pub ffdc: Ffdc,
    #[serde(flatten)]
    pub payload: T,
}

/// Exception details the service attaches to every response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ffdc {
    #[serde(rename = "relatedHTTPCode", default)]
    pub related_http_code: Option<u16>,
    #[serde(default)]
    pub exception_class_name: Option<String>,
    #[serde(default)]
    pub exception_error_message: Option<String>,
    #[serde(default)]
    pub action_description: Option<String>,
    #[serde(default)]
    pub exception_system_action: Option<String>,
    #[serde(default)]
    pub exception_user_action: Option<String>,
    #[serde(default)]
    pub exception_properties: Option<HashMap<String, serde_json::Value>>,
}

impl Ffdc {
    /// True when the envelope reports a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self.related_http_code, Some(code) if !(200..300).contains(&code))
            || self.exception_class_name.is_some()
    }

    /// Classify a reported failure into one of the three SDK error classes.
    ///
    /// The exception class name wins over the numeric code.
    pub fn into_error(self) -> SdkError {
        let code = self.related_http_code.unwrap_or(500);
        let class = self.exception_class_name.clone().unwrap_or_default();
        let message = self
            .exception_error_message
            .clone()
            .or_else(|| self.action_description.clone())
            .unwrap_or_else(|| format!("request failed with code {}", code));

        let is_invalid = class.ends_with(INVALID_PARAMETER_EXCEPTION);
        let is_unauthorized = class.ends_with(USER_NOT_AUTHORIZED_EXCEPTION);
        let is_server = class.ends_with(PROPERTY_SERVER_EXCEPTION);

        if is_invalid || (!is_unauthorized && !is_server && code == 400) {
            return SdkError::InvalidParameter {
                parameter: self.property("parameterName"),
                message,
            };
        }

        if is_unauthorized || (!is_server && matches!(code, 401 | 403)) {
            return SdkError::NotAuthorized {
                user_id: self.property("userId"),
                message,
            };
        }

        SdkError::PropertyServer(HttpError::Remote {
            related_http_code: code,
            exception_class_name: if class.is_empty() {
                PROPERTY_SERVER_EXCEPTION.to_string()
            } else {
                class
            },
            message,
        })
    }

    fn property(&self, key: &str) -> String {
        self.exception_properties
            .as_ref()
            .and_then(|props| props.get(key))
            .and_then(|v| v.as_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

/// Map a non-2xx HTTP status onto an SDK error, preferring FFDC details in the body.
pub fn status_error(status: u16, body: String) -> SdkError {
    if let Ok(mut ffdc) = serde_json::from_str::<Ffdc>(&body) {
        if ffdc.is_failure() {
            ffdc.related_http_code.get_or_insert(status);
            return ffdc.into_error();
        }
    }

    match status {
        400 => SdkError::InvalidParameter {
            parameter: "unknown".to_string(),
            message: body,
        },
        401 | 403 => SdkError::NotAuthorized {
            user_id: "unknown".to_string(),
            message: body,
        },
        _ => SdkError::PropertyServer(HttpError::Status { status, body }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::element::wire::GuidResponse;

    #[test]
    fn test_success_envelope_carries_payload() {
        let json = r#"{"class": "GUIDResponse", "relatedHTTPCode": 200, "guid": "g-1"}"#;
        let env: Envelope<GuidResponse> = serde_json::from_str(json).unwrap();
        assert!(!env.ffdc.is_failure());
        assert_eq!(env.payload.guid.unwrap().as_str(), "g-1");
    }

    #[test]
    fn test_invalid_parameter_by_class_name() {
        let json = r#"{
            "relatedHTTPCode": 400,
            "exceptionClassName": "org.odpi.openmetadata.frameworks.connectors.ffdc.InvalidParameterException",
            "exceptionErrorMessage": "The qualifiedName is null",
            "exceptionProperties": {"parameterName": "qualifiedName"}
        }"#;
        let env: Envelope<GuidResponse> = serde_json::from_str(json).unwrap();
        assert!(env.ffdc.is_failure());
        match env.ffdc.into_error() {
            SdkError::InvalidParameter { parameter, message } => {
                assert_eq!(parameter, "qualifiedName");
                assert_eq!(message, "The qualifiedName is null");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_not_authorized_by_class_name() {
        let ffdc = Ffdc {
            related_http_code: Some(500),
            exception_class_name: Some("x.UserNotAuthorizedException".to_string()),
            exception_properties: Some(HashMap::from([(
                "userId".to_string(),
                serde_json::json!("erinoverview"),
            )])),
            ..Default::default()
        };
        match ffdc.into_error() {
            SdkError::NotAuthorized { user_id, .. } => assert_eq!(user_id, "erinoverview"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_failure_is_property_server() {
        let ffdc = Ffdc {
            related_http_code: Some(500),
            action_description: Some("getHost".to_string()),
            ..Default::default()
        };
        let err = ffdc.into_error();
        assert!(err.is_property_server());
        assert!(err.to_string().contains("getHost"));
    }

    #[test]
    fn test_status_error_without_ffdc_body() {
        assert!(status_error(400, "bad".to_string()).is_invalid_parameter());
        assert!(status_error(403, "no".to_string()).is_not_authorized());
        assert!(status_error(502, "gateway".to_string()).is_property_server());
    }

    #[test]
    fn test_status_error_prefers_ffdc_body() {
        let body = r#"{"exceptionClassName": "InvalidParameterException", "exceptionProperties": {"parameterName": "hostGUID"}}"#;
        match status_error(500, body.to_string()) {
            SdkError::InvalidParameter { parameter, .. } => assert_eq!(parameter, "hostGUID"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
