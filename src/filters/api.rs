//! Proxy integration: one Lambda serving the whole `/filters` resource.
//!
//! | Method | Path                | Store call |
//! |--------|---------------------|------------|
//! | POST   | `/filters`          | put        |
//! | GET    | `/filters`          | scan       |
//! | GET    | `/filters/{userId}` | get        |
//! | DELETE | `/filters/{userId}` | delete     |
//! | PATCH  | `/filters/{userId}` | update     |

use lambda_http::http::{Method, StatusCode};
use lambda_http::{Request, RequestExt, Response};
use tracing::{info, warn};

use crate::common::errors::Error;
use crate::common::utils::{extract_request, json_response, not_found};
use crate::filters::item::{CreateFiltersRequest, UpdateFiltersRequest, USER_ID};
use crate::filters::store::FilterStore;

const RESOURCE: &str = "filters";

/// True when `path` ends in `/filters` or `/filters/{userId}`. A stage name
/// may precede the resource.
fn on_resource(path: &str, user_id: Option<&str>) -> bool {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    if user_id.is_some() {
        segments.next();
    }

    segments.next() == Some(RESOURCE)
}

#[tracing::instrument(skip(store))]
pub async fn route(request: Request, store: &dyn FilterStore) -> Result<Response<String>, Error> {
    let user_id = request.path_parameters().first(USER_ID).map(String::from);
    let method = request.method().clone();

    if !on_resource(request.uri().path(), user_id.as_deref()) {
        warn!("No route for {} {}", method, request.uri().path());
        return Err(Error::HttpError(not_found()?));
    }

    let body = match (method, user_id) {
        (Method::POST, None) => {
            let create = extract_request::<CreateFiltersRequest>(&request)?;
            serde_json::to_string(&store.put(create.into()).await?)?
        }
        (Method::GET, None) => serde_json::to_string(&store.scan().await?)?,
        (Method::GET, Some(user_id)) => serde_json::to_string(&store.get(&user_id).await?)?,
        (Method::DELETE, Some(user_id)) => {
            serde_json::to_string(&store.delete(&user_id).await?)?
        }
        (Method::PATCH, Some(user_id)) => {
            let update = extract_request::<UpdateFiltersRequest>(&request)?;
            serde_json::to_string(&store.update(&user_id, update.filters).await?)?
        }
        (method, user_id) => {
            warn!("No route for {} with userId {:?}", method, user_id);
            return Err(Error::HttpError(not_found()?));
        }
    };

    info!("Request handled");
    Ok(json_response(StatusCode::OK, body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::utils::{BAD_INPUT_BODY, NOT_FOUND_BODY};
    use crate::filters::item::{Filter, FilterRecord};
    use crate::filters::testing::{CapturingStore, Call, FailingStore};
    use lambda_http::Body;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn request(method: Method, user_id: Option<&str>, body: &str) -> Request {
        let uri = match user_id {
            Some(user_id) => format!("/filters/{}", user_id),
            None => "/filters".to_string(),
        };
        request_to(method, &uri, user_id, body)
    }

    fn request_to(method: Method, uri: &str, user_id: Option<&str>, body: &str) -> Request {
        let request = lambda_http::http::Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        match user_id {
            Some(user_id) => request.with_path_parameters(HashMap::from([(
                USER_ID.to_string(),
                user_id.to_string(),
            )])),
            None => request,
        }
    }

    async fn respond(request: Request, store: &dyn FilterStore) -> Response<String> {
        match route(request, store).await {
            Ok(val) => val,
            Err(Error::HttpError(val)) => val,
            Err(Error::LambdaError(err)) => panic!("unexpected lambda error: {}", err),
        }
    }

    fn body(response: &Response<String>) -> Value {
        serde_json::from_str(response.body()).unwrap()
    }

    #[tokio::test]
    async fn post_creates_record() {
        let store = CapturingStore::default();
        let payload = r#"{"user_id": "A4dce9f0", "filters": [{"name": "city", "values": ["Toronto"]}]}"#;

        let response = respond(request(Method::POST, None, payload), &store).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(body(&response), json!({}));
        assert_eq!(
            store.calls(),
            vec![Call::Put(FilterRecord {
                user_id: "A4dce9f0".into(),
                filters: vec![serde_json::from_value::<Filter>(
                    json!({"name": "city", "values": ["Toronto"]})
                )
                .unwrap()],
            })]
        );
    }

    #[tokio::test]
    async fn get_without_user_lists_table() {
        let store = CapturingStore::default();

        let response = respond(request(Method::GET, None, ""), &store).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.calls(), vec![Call::Scan]);
        assert_eq!(
            body(&response),
            json!({"Items": [{"userId": "A4dce9f0", "filters": []}], "Count": 1, "ScannedCount": 1})
        );
    }

    #[tokio::test]
    async fn get_with_user_reads_item() {
        let store = CapturingStore::default();

        let response = respond(request(Method::GET, Some("A4dce9f0"), ""), &store).await;

        assert_eq!(store.calls(), vec![Call::Get("A4dce9f0".into())]);
        assert_eq!(
            body(&response),
            json!({"Item": {"userId": "A4dce9f0", "filters": []}})
        );
    }

    #[tokio::test]
    async fn delete_and_patch_target_path_user() {
        let store = CapturingStore::default();

        respond(request(Method::DELETE, Some("A4dce9f0"), ""), &store).await;
        let response = respond(
            request(Method::PATCH, Some("A4dce9f0"), r#"{"filters": []}"#),
            &store,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            store.calls(),
            vec![
                Call::Delete("A4dce9f0".into()),
                Call::Update("A4dce9f0".into(), vec![]),
            ]
        );
    }

    #[tokio::test]
    async fn malformed_body_is_bad_input() {
        let store = CapturingStore::default();

        let response = respond(request(Method::POST, None, r#"{"filters": "city"}"#), &store).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), BAD_INPUT_BODY);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let store = CapturingStore::default();

        let response = respond(request(Method::PUT, None, ""), &store).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), NOT_FOUND_BODY);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn other_resources_are_not_found() {
        let store = CapturingStore::default();

        let response = respond(request_to(Method::GET, "/anything", None, ""), &store).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = respond(
            request_to(Method::DELETE, "/users/A4dce9f0", Some("A4dce9f0"), ""),
            &store,
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn stage_prefix_is_accepted() {
        let store = CapturingStore::default();

        let response = respond(request_to(Method::GET, "/prod/filters/", None, ""), &store).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.calls(), vec![Call::Scan]);
    }

    #[test]
    fn resource_match_checks_trailing_segments() {
        assert!(on_resource("/filters", None));
        assert!(on_resource("/filters/A4dce9f0", Some("A4dce9f0")));
        assert!(!on_resource("/filters/A4dce9f0", None));
        assert!(!on_resource("/", None));
    }

    #[tokio::test]
    async fn store_failure_fails_invocation() {
        let result = route(request(Method::GET, None, ""), &FailingStore).await;

        assert!(matches!(result, Err(Error::LambdaError(_))));
    }
}
