//! Request helpers for user-scoped API calls
//!
//! Every request the app makes on behalf of a user carries an
//! `X-User-Id` header. The backend expects the literal value
//! `anonymous` when nobody is logged in, not a missing header.

/// Header carrying the client-side correlation id (the username).
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Value sent while no user is logged in.
pub const ANONYMOUS_USER_ID: &str = "anonymous";

/// Value for the `X-User-Id` header given the current user id.
pub fn user_id_header_value(user_id: Option<&str>) -> String {
    user_id.unwrap_or(ANONYMOUS_USER_ID).to_string()
}

/// Add the `X-User-Id` header to a `web_sys::Request`.
#[cfg(target_arch = "wasm32")]
pub fn add_user_id_header(
    request: &web_sys::Request,
    user_id: Option<&str>,
) -> Result<(), String> {
    request
        .headers()
        .set(USER_ID_HEADER, &user_id_header_value(user_id))
        .map_err(|_| "Failed to set X-User-Id header".to_string())
}

/// Native stub - there are no outgoing requests outside the browser.
#[cfg(not(target_arch = "wasm32"))]
pub fn add_user_id_header<T>(_request: &T, _user_id: Option<&str>) -> Result<(), String> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_requests_carry_the_username() {
        assert_eq!(user_id_header_value(Some("alice")), "alice");
    }

    #[test]
    fn anonymous_requests_carry_the_literal_default() {
        // The backend keys on the literal string, so the header is never
        // omitted for anonymous users.
        assert_eq!(user_id_header_value(None), "anonymous");
    }
}
