//! # HTTP logging configuration.
//!
//! Passthrough configuration records bound from the service's settings file
//! and consumed by the host's HTTP logging middleware. Absent values mean
//! "use host defaults"; nothing here emits log records itself.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Top-level logging section of the service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_logging: Option<HttpLoggingOptions>,
}

/// Options for the HTTP request/response logging middleware.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpLoggingOptions {
    /// Parts of the HTTP exchange to log. `None` leaves the host default set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_fields: Option<BTreeSet<HttpLoggingField>>,
}

/// An individually loggable part of an HTTP exchange.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum HttpLoggingField {
    RequestPath,
    RequestQuery,
    RequestProtocol,
    RequestMethod,
    RequestScheme,
    ResponseStatusCode,
    RequestHeaders,
    ResponseHeaders,
    RequestBody,
    ResponseBody,
    Duration,
}

impl HttpLoggingOptions {
    /// Request line properties and request headers.
    #[must_use]
    pub fn request_properties_and_headers() -> BTreeSet<HttpLoggingField> {
        use HttpLoggingField::*;
        [
            RequestPath,
            RequestQuery,
            RequestProtocol,
            RequestMethod,
            RequestScheme,
            RequestHeaders,
        ]
        .into()
    }

    /// Response status and response headers.
    #[must_use]
    pub fn response_properties_and_headers() -> BTreeSet<HttpLoggingField> {
        use HttpLoggingField::*;
        [ResponseStatusCode, ResponseHeaders].into()
    }

    /// Every loggable field, bodies included.
    #[must_use]
    pub fn all() -> BTreeSet<HttpLoggingField> {
        use HttpLoggingField::*;
        [
            RequestPath,
            RequestQuery,
            RequestProtocol,
            RequestMethod,
            RequestScheme,
            ResponseStatusCode,
            RequestHeaders,
            ResponseHeaders,
            RequestBody,
            ResponseBody,
            Duration,
        ]
        .into()
    }
}
