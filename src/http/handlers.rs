//! Route handlers.
//!
//! Each handler is a thin adapter: at most one store query, serialized as
//! JSON. Successful responses are always 200; the `IP Address` field
//! carries the address resolved once at startup (possibly empty).

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<String>,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
}

#[derive(Debug, Serialize)]
pub struct GroupsResponse {
    pub groups: Vec<String>,
    #[serde(rename = "IP Address")]
    pub ip_address: String,
}

/// Query parameters for the credential check. Absent parameters read as
/// empty strings.
#[derive(Debug, Deserialize)]
pub struct AuthParams {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pwd: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub authenticated: bool,
}

/// Handler for `GET /hello`. Liveness and IP echo; never touches a store.
pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello World!",
        ip_address: state.local_ip.clone(),
    })
}

/// Handler for `GET /users`. Returns every name in the user table.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = state.users.list_user_names().await?;
    Ok(Json(UsersResponse {
        users,
        ip_address: state.local_ip.clone(),
    }))
}

/// Handler for `GET /groups`. Returns every member of the group set.
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<Json<GroupsResponse>, ApiError> {
    let groups = state.groups.list_groups().await?;
    Ok(Json(GroupsResponse {
        groups,
        ip_address: state.local_ip.clone(),
    }))
}

/// Handler for `GET /auth?user=&pwd=`. Credential check, 200 for both
/// outcomes; only a store fault produces an error status.
pub async fn auth(
    State(state): State<AppState>,
    Query(params): Query<AuthParams>,
) -> Result<Json<AuthResponse>, ApiError> {
    let authenticated = state.users.check_auth(&params.user, &params.pwd).await?;
    Ok(Json(AuthResponse { authenticated }))
}

/// Handler for `GET /metrics`. Renders the Prometheus exposition text.
pub async fn metrics(State(state): State<AppState>) -> String {
    state.metrics.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    #[test]
    fn test_hello_response_field_names() {
        let response = HelloResponse {
            message: "Hello World!",
            ip_address: "10.1.2.3".into(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "Hello World!");
        assert_eq!(value["IP Address"], "10.1.2.3");
    }

    #[test]
    fn test_users_response_field_names() {
        let response = UsersResponse {
            users: vec!["alice".into(), "bob".into()],
            ip_address: String::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["users"], serde_json::json!(["alice", "bob"]));
        assert_eq!(value["IP Address"], "");
    }

    #[test]
    fn test_auth_params_present() {
        let uri: Uri = "/auth?user=alice&pwd=wonderland".parse().unwrap();
        let Query(params) = Query::<AuthParams>::try_from_uri(&uri).unwrap();
        assert_eq!(params.user, "alice");
        assert_eq!(params.pwd, "wonderland");
    }

    #[test]
    fn test_auth_params_default_to_empty() {
        let uri: Uri = "/auth".parse().unwrap();
        let Query(params) = Query::<AuthParams>::try_from_uri(&uri).unwrap();
        assert_eq!(params.user, "");
        assert_eq!(params.pwd, "");
    }

    #[test]
    fn test_auth_response_shape() {
        let value = serde_json::to_value(AuthResponse { authenticated: false }).unwrap();
        assert_eq!(value, serde_json::json!({ "authenticated": false }));
    }
}
