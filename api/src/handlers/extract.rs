//! Request extractors
//!
//! Wrappers around axum's extractors whose rejections become [`AppError`],
//! so malformed bodies, paths and queries get the same JSON error body as
//! every other failure.

use std::fmt;
use std::str::FromStr;

use axum::extract::{FromRequest, FromRequestParts};
use serde::{de, Deserialize, Deserializer};

use crate::error::AppError;

/// JSON body extractor
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// Query string extractor
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Treat a missing or blank query value as absent, otherwise parse it.
///
/// `?course_id=` arrives as an empty string, which plain `Option<u64>`
/// refuses to deserialize.
pub fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
