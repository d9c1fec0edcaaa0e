// ABOUTME: HTTP middleware layers shared across the router
// ABOUTME: CORS policy allowing any origin with credentials support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer
///
/// The extension calls from arbitrary origins with credentials, so the
/// request origin is mirrored back rather than using a wildcard (a wildcard
/// origin cannot be combined with `allow_credentials`).
#[must_use]
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
