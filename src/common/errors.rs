use lambda_http::{Error as LambdaError, Response};

use crate::filters::store::StoreError;

/// Outcome of a proxy request that did not produce a success response.
///
/// `HttpError` carries a response that should still be returned to the
/// caller (bad input, unknown route). `LambdaError` fails the invocation.
#[derive(Debug)]
pub enum Error {
    HttpError(Response<String>),
    LambdaError(LambdaError),
}

impl From<LambdaError> for Error {
    fn from(err: LambdaError) -> Self {
        Error::LambdaError(err)
    }
}

impl From<lambda_http::http::Error> for Error {
    fn from(err: lambda_http::http::Error) -> Self {
        Error::LambdaError(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::LambdaError(Box::new(err))
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::LambdaError(Box::new(err))
    }
}
