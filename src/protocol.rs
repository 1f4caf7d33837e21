//! Response envelope handling for FlightXML2 JSON replies.
//!
//! A reply body is either the payload itself or
//! `{"<Method>Result": {"data": <payload>, ...}}`, with either level possibly
//! missing. Domain failures come back as a normal 200 response whose payload
//! is an object with an `"error"` key.

use crate::client::ClientError;
use crate::types::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Outcome of a call that reached the server and returned JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// Decoded payload.
    Data(T),
    /// The server rejected the request (unknown airport, bad argument, ...).
    Error(String),
}

impl<T> Reply<T> {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            Self::Data(_) => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(v) => Some(v),
            Self::Error(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(v) => Some(v),
            Self::Error(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Reply<U> {
        match self {
            Self::Data(v) => Reply::Data(f(v)),
            Self::Error(msg) => Reply::Error(msg),
        }
    }

    /// Fold a domain error into [`ClientError::Api`].
    pub fn into_result(self) -> Result<T, ClientError> {
        match self {
            Self::Data(v) => Ok(v),
            Self::Error(msg) => Err(ClientError::Api(msg)),
        }
    }
}

/// Strip the `"<method>Result"` and `"data"` wrappers, whichever are present.
pub fn unwrap_envelope(method: &str, body: Value) -> Value {
    let key = format!("{}Result", method);

    let inner = match body {
        Value::Object(mut map) => match map.remove(&key) {
            Some(inner) => inner,
            None => return Value::Object(map),
        },
        other => return other,
    };

    match inner {
        Value::Object(mut map) => match map.remove("data") {
            Some(data) => data,
            None => Value::Object(map),
        },
        other => other,
    }
}

/// Error text if `payload` is a domain error object.
pub fn error_message(payload: &Value) -> Option<String> {
    match payload.get("error")? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Unwrap `body` and decode the payload for `method`.
pub fn decode_reply<T: DeserializeOwned>(method: Method, body: Value) -> Result<Reply<T>, ClientError> {
    let payload = unwrap_envelope(method.as_str(), body);

    if payload.is_object() {
        if let Some(msg) = error_message(&payload) {
            return Ok(Reply::Error(msg));
        }
    }

    serde_json::from_value(payload)
        .map(Reply::Data)
        .map_err(|source| ClientError::InvalidResponse { method, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_full_envelope() {
        let body = json!({
            "AllAirlinesResult": { "data": ["AAL", "SWA"] }
        });
        assert_eq!(unwrap_envelope("AllAirlines", body), json!(["AAL", "SWA"]));
    }

    #[test]
    fn test_unwrap_result_without_data() {
        let body = json!({
            "MetarExResult": { "next_offset": 1, "metar": [] }
        });
        assert_eq!(
            unwrap_envelope("MetarEx", body),
            json!({ "next_offset": 1, "metar": [] })
        );
    }

    #[test]
    fn test_unwrap_scalar_result() {
        let body = json!({ "GetFlightIDResult": "SWA1234-1709294400-schedule-0000" });
        assert_eq!(
            unwrap_envelope("GetFlightID", body),
            json!("SWA1234-1709294400-schedule-0000")
        );
    }

    #[test]
    fn test_unwrap_missing_wrappers() {
        let bare = json!({ "name": "Nashville Intl" });
        assert_eq!(unwrap_envelope("AirportInfo", bare.clone()), bare);

        // A different method's key is not unwrapped.
        let other = json!({ "AirlineInfoResult": { "name": "Southwest" } });
        assert_eq!(unwrap_envelope("AirportInfo", other.clone()), other);

        assert_eq!(unwrap_envelope("AllAirports", json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_data_only_checked_on_objects() {
        // A string that happens to contain "data" is left alone.
        let body = json!({ "MetarResult": "KBNA metadata 011253Z" });
        assert_eq!(unwrap_envelope("Metar", body), json!("KBNA metadata 011253Z"));
    }

    #[test]
    fn test_decode_domain_error() {
        let body = json!({ "error": "INVALID ARGUMENT airportCode" });
        let reply: Reply<Value> = decode_reply(Method::AirportInfo, body).unwrap();
        assert!(reply.is_error());
        assert_eq!(reply.error(), Some("INVALID ARGUMENT airportCode"));
        assert!(matches!(reply.into_result(), Err(ClientError::Api(_))));
    }

    #[test]
    fn test_decode_non_string_error() {
        let body = json!({ "error": { "code": 7 } });
        let reply: Reply<Value> = decode_reply(Method::TailOwner, body).unwrap();
        assert_eq!(reply.error(), Some(r#"{"code":7}"#));
    }

    #[test]
    fn test_decode_data() {
        let body = json!({ "AllAirportsResult": { "data": ["KBNA", "KATL"] } });
        let reply: Reply<Vec<String>> = decode_reply(Method::AllAirports, body).unwrap();
        assert_eq!(reply.data().map(Vec::len), Some(2));
        assert_eq!(reply.map(|v| v[0].clone()), Reply::Data("KBNA".to_string()));
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let body = json!({ "AllAirportsResult": { "data": { "unexpected": true } } });
        let err = decode_reply::<Vec<String>>(Method::AllAirports, body).unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidResponse { method: Method::AllAirports, .. }
        ));
    }
}
