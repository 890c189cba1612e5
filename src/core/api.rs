//! HTTP client for the user endpoints of the backend.
//!
//! Thin `fetch` wrappers; all identity logic lives server-side. Error
//! responses carry a human-readable `detail` string which is surfaced to
//! the user verbatim, everything else degrades to a generic message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use crate::core::config::ApiConfig;
use crate::core::session::User;

/// Body for `POST /api/users/login`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Body for `POST /api/users/register`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
}

/// Response of `GET /api/users/check/{username}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub available: bool,
}

/// Error body shape used by the backend.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    detail: Option<String>,
}

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend rejected the request with a `detail` message.
    #[error("{0}")]
    Backend(String),
    /// The request never produced a usable response.
    #[error("network request failed: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to show the user: the backend `detail` verbatim when
    /// present, otherwise a generic failure message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend(detail) => detail.clone(),
            _ => "Error al procesar la solicitud".to_string(),
        }
    }
}

impl ErrorResponse {
    fn into_error(self) -> ApiError {
        match self.detail {
            Some(detail) => ApiError::Backend(detail),
            None => ApiError::Network("request rejected by the server".to_string()),
        }
    }
}

/// Log in with a username or email. Returns the user record the backend
/// treats as the session's identity.
#[cfg(target_arch = "wasm32")]
pub async fn login(username_or_email: &str, password: &str) -> Result<User, ApiError> {
    let request = LoginRequest {
        username_or_email: username_or_email.to_string(),
        password: password.to_string(),
    };
    let url = ApiConfig::from_env().api_url("/api/users/login");
    post_json(&url, &request).await
}

/// Register a new account. The backend responds with the same user
/// record shape as login.
#[cfg(target_arch = "wasm32")]
pub async fn register(request: &RegisterRequest) -> Result<User, ApiError> {
    let url = ApiConfig::from_env().api_url("/api/users/register");
    post_json(&url, request).await
}

/// Check whether a username is still available.
#[cfg(target_arch = "wasm32")]
pub async fn check_username(username: &str) -> Result<bool, ApiError> {
    let url = ApiConfig::from_env().api_url(&format!("/api/users/check/{}", username));
    let response: AvailabilityResponse = get_json(&url).await?;
    Ok(response.available)
}

#[cfg(target_arch = "wasm32")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: for<'de> Deserialize<'de>,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(
        &serde_json::to_string(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .into(),
    );

    let req = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    req.headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

    if resp.ok() {
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(serde_wasm_bindgen::from_value::<ErrorResponse>(json)
            .map(ErrorResponse::into_error)
            .unwrap_or_else(|e| ApiError::Decode(e.to_string())))
    }
}

#[cfg(target_arch = "wasm32")]
async fn get_json<T>(url: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");

    let req = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&req))
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(format!("{:?}", e)))?)
        .await
        .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

    if resp.ok() {
        serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(serde_wasm_bindgen::from_value::<ErrorResponse>(json)
            .map(ErrorResponse::into_error)
            .unwrap_or_else(|e| ApiError::Decode(e.to_string())))
    }
}

// Native stubs - backend calls only exist in the browser.

#[cfg(not(target_arch = "wasm32"))]
pub async fn login(_username_or_email: &str, _password: &str) -> Result<User, ApiError> {
    Err(ApiError::Network(
        "backend calls are only available in the browser".to_string(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn register(_request: &RegisterRequest) -> Result<User, ApiError> {
    Err(ApiError::Network(
        "backend calls are only available in the browser".to_string(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn check_username(_username: &str) -> Result<bool, ApiError> {
    Err(ApiError::Network(
        "backend calls are only available in the browser".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_matches_wire_contract() {
        let request = LoginRequest {
            username_or_email: "alice@x.com".to_string(),
            password: "secreta".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username_or_email": "alice@x.com",
                "password": "secreta",
            })
        );
    }

    #[test]
    fn register_request_matches_wire_contract() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            email: "a@x.com".to_string(),
            full_name: "Alice Aguilar".to_string(),
            password: "secreta".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "alice",
                "email": "a@x.com",
                "full_name": "Alice Aguilar",
                "password": "secreta",
            })
        );
    }

    #[test]
    fn availability_response_parses() {
        let response: AvailabilityResponse =
            serde_json::from_str(r#"{"available": false}"#).unwrap();
        assert!(!response.available);
    }

    #[test]
    fn backend_detail_is_surfaced_verbatim() {
        let response: ErrorResponse =
            serde_json::from_str(r#"{"detail": "Credenciales inválidas"}"#).unwrap();
        let error = response.into_error();

        assert_eq!(error, ApiError::Backend("Credenciales inválidas".to_string()));
        assert_eq!(error.user_message(), "Credenciales inválidas");
    }

    #[test]
    fn missing_detail_falls_back_to_generic_message() {
        let response: ErrorResponse = serde_json::from_str("{}").unwrap();
        let error = response.into_error();

        assert_eq!(error.user_message(), "Error al procesar la solicitud");
    }

    #[test]
    fn transport_errors_use_generic_message() {
        let error = ApiError::Network("connection refused".to_string());
        assert_eq!(error.user_message(), "Error al procesar la solicitud");
    }
}
