use lambda_http::http::StatusCode;
use lambda_http::{Error as LambdaError, Request, RequestPayloadExt, Response};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::common::errors::Error;

pub const BAD_INPUT_BODY: &str = r#"{"error": "Bad input!"}"#;
pub const NOT_FOUND_BODY: &str = r#"{"error": "Not found"}"#;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_HEADERS: &str = "Content-Type,Authorization,X-Amz-Date,X-Api-Key,X-Amz-Security-Token";

/// Deserializes the JSON payload of a proxy request.
///
/// An empty or malformed payload becomes [`Error::HttpError`] carrying the
/// `400` bad-input response.
pub fn extract_request<T: DeserializeOwned>(request: &Request) -> Result<T, Error> {
    match request.payload::<T>() {
        Ok(Some(val)) => Ok(val),
        Ok(None) => {
            warn!("Request payload is empty");
            Err(Error::HttpError(bad_input()?))
        }
        Err(err) => {
            warn!("Malformed request payload: {}", err);
            Err(Error::HttpError(bad_input()?))
        }
    }
}

pub fn bad_input() -> Result<Response<String>, LambdaError> {
    json_response(StatusCode::BAD_REQUEST, BAD_INPUT_BODY.into())
}

pub fn not_found() -> Result<Response<String>, LambdaError> {
    json_response(StatusCode::NOT_FOUND, NOT_FOUND_BODY.into())
}

/// Builds a JSON response with the CORS headers every route exposes.
pub fn json_response(status: StatusCode, body: String) -> Result<Response<String>, LambdaError> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .body(body)
        .map_err(Box::new)?;

    Ok(response)
}
