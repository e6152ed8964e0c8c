//! Query-string extraction for filter structs

use axum::{
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::convert::Infallible;

/// Like `Query`, but never rejects the request.
///
/// A repeated key keeps its first value and unknown keys are dropped by the
/// filter itself. Anything that still fails to parse leaves the filter at
/// its default, so no predicate is applied.
#[derive(Debug, Clone, Default)]
pub struct Filters<T>(pub T);

impl<T, S> FromRequestParts<S> for Filters<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parse(&parts.uri)))
    }
}

fn parse<T: DeserializeOwned + Default>(uri: &Uri) -> T {
    let pairs = match Query::<Vec<(String, String)>>::try_from_uri(uri) {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable query string");
            return T::default();
        }
    };

    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring unusable filter parameters");
        T::default()
    })
}
