//! Security headers middleware
//!
//! Adds browser hardening headers to every response. The default content
//! security policy admits the weather page's inline style and script plus
//! audio and animation files from `'self'` or any HTTPS origin.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue, header, header::InvalidHeaderValue},
    response::Response,
};
use infrastructure::ServerConfig;
use tower::{Layer, Service};

/// Policy used by [`SecurityHeadersLayer::new`]
pub const DEFAULT_CSP: &str = "default-src 'self'; style-src 'self' 'unsafe-inline'; \
     script-src 'self' 'unsafe-inline'; media-src 'self' https:; connect-src 'self' https:; \
     img-src 'self' data: https:; frame-ancestors 'none'";

const STATIC_HEADERS: [(&str, &str); 4] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    (
        "permissions-policy",
        "camera=(), geolocation=(), microphone=(), payment=(), usb=()",
    ),
];

/// Layer that adds security headers to all responses
#[derive(Clone, Debug)]
pub struct SecurityHeadersLayer {
    csp: HeaderValue,
}

impl SecurityHeadersLayer {
    /// Layer with [`DEFAULT_CSP`]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            csp: HeaderValue::from_static(DEFAULT_CSP),
        }
    }

    /// Replace the content security policy
    #[must_use]
    pub fn with_csp(mut self, csp: HeaderValue) -> Self {
        self.csp = csp;
        self
    }

    /// Layer using `server.content_security_policy`, or [`DEFAULT_CSP`]
    pub fn from_config(config: &ServerConfig) -> Result<Self, InvalidHeaderValue> {
        let layer = Self::new();
        match config.content_security_policy.as_deref() {
            Some(policy) => Ok(layer.with_csp(HeaderValue::from_str(policy)?)),
            None => Ok(layer),
        }
    }
}

impl Default for SecurityHeadersLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for SecurityHeadersLayer {
    type Service = SecurityHeaders<S>;

    fn layer(&self, inner: S) -> Self::Service {
        SecurityHeaders {
            inner,
            csp: self.csp.clone(),
        }
    }
}

/// Middleware service that adds security headers
#[derive(Clone, Debug)]
pub struct SecurityHeaders<S> {
    inner: S,
    csp: HeaderValue,
}

impl<S> Service<Request> for SecurityHeaders<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let mut inner = self.inner.clone();
        let csp = self.csp.clone();

        Box::pin(async move {
            let mut response = inner.call(req).await?;
            let headers = response.headers_mut();

            for (name, value) in STATIC_HEADERS {
                headers.insert(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                );
            }
            headers.insert(header::CONTENT_SECURITY_POLICY, csp);

            // Weather changes; never serve a stale page or reading
            if !headers.contains_key(header::CACHE_CONTROL) {
                headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, routing::get};
    use tower::ServiceExt;

    use super::*;

    async fn test_handler() -> &'static str {
        "ok"
    }

    async fn get_response(layer: SecurityHeadersLayer) -> Response {
        Router::new()
            .route("/test", get(test_handler))
            .layer(layer)
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn adds_static_headers() {
        let response = get_response(SecurityHeadersLayer::new()).await;

        for (name, value) in STATIC_HEADERS {
            assert_eq!(
                response.headers().get(name),
                Some(&HeaderValue::from_static(value)),
                "{name}"
            );
        }
    }

    #[tokio::test]
    async fn default_csp_allows_inline_page_assets() {
        let response = get_response(SecurityHeadersLayer::default()).await;

        let csp = response
            .headers()
            .get(header::CONTENT_SECURITY_POLICY)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(csp.contains("script-src 'self' 'unsafe-inline'"));
        assert!(csp.contains("frame-ancestors 'none'"));
    }

    #[tokio::test]
    async fn custom_csp_replaces_default() {
        let layer =
            SecurityHeadersLayer::new().with_csp(HeaderValue::from_static("default-src 'none'"));
        let response = get_response(layer).await;

        assert_eq!(
            response.headers().get(header::CONTENT_SECURITY_POLICY),
            Some(&HeaderValue::from_static("default-src 'none'"))
        );
    }

    #[tokio::test]
    async fn configured_csp_is_sent() {
        let config = ServerConfig {
            content_security_policy: Some("default-src 'self'; media-src *".to_string()),
            ..ServerConfig::default()
        };
        let response = get_response(SecurityHeadersLayer::from_config(&config).unwrap()).await;

        assert_eq!(
            response.headers().get(header::CONTENT_SECURITY_POLICY),
            Some(&HeaderValue::from_static("default-src 'self'; media-src *"))
        );
    }

    #[tokio::test]
    async fn unset_policy_falls_back_to_default() {
        let layer = SecurityHeadersLayer::from_config(&ServerConfig::default()).unwrap();
        let response = get_response(layer).await;

        assert_eq!(
            response.headers().get(header::CONTENT_SECURITY_POLICY),
            Some(&HeaderValue::from_static(DEFAULT_CSP))
        );
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let config = ServerConfig {
            content_security_policy: Some("default-src\n'self'".to_string()),
            ..ServerConfig::default()
        };
        assert!(SecurityHeadersLayer::from_config(&config).is_err());
    }

    #[tokio::test]
    async fn adds_no_store_cache_control() {
        let response = get_response(SecurityHeadersLayer::new()).await;

        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("no-store"))
        );
    }

    #[tokio::test]
    async fn preserves_existing_cache_control() {
        async fn handler_with_cache() -> ([(HeaderName, &'static str); 1], &'static str) {
            ([(header::CACHE_CONTROL, "public, max-age=3600")], "cached response")
        }

        let response = Router::new()
            .route("/test", get(handler_with_cache))
            .layer(SecurityHeadersLayer::new())
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::CACHE_CONTROL),
            Some(&HeaderValue::from_static("public, max-age=3600"))
        );
    }
}
