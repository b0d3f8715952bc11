//! Pulls resolver inputs out of an HTTP request.

use axum::extract::Request;
use axum::http::header::{COOKIE, HOST};
use axum::http::HeaderMap;
use brand_core::{RequestContext, OVERRIDE_COOKIE};

/// Host header, falling back to the URI authority (HTTP/2 carries no Host header).
pub fn request_host(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| request.uri().authority().map(|a| a.as_str()))
}

/// Value of the first cookie named `name` across all `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim().trim_matches('"'))
}

pub fn request_context(request: &Request) -> RequestContext<'_> {
    RequestContext {
        host: request_host(request),
        override_cookie: cookie_value(request.headers(), OVERRIDE_COOKIE),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request(headers: &[(&str, &str)]) -> Request {
        let mut builder = axum::http::Request::builder().uri("/api/brand");
        for (k, v) in headers {
            builder = builder.header(*k, *v);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn reads_host_header() {
        let req = request(&[("host", "shop.tooly.com:443")]);
        assert_eq!(request_host(&req), Some("shop.tooly.com:443"));
    }

    #[test]
    fn falls_back_to_uri_authority() {
        let req = axum::http::Request::builder()
            .uri("https://www.synthlab.com/api/brand")
            .body(Body::empty())
            .unwrap();
        assert_eq!(request_host(&req), Some("www.synthlab.com"));
    }

    #[test]
    fn no_host_at_all() {
        assert_eq!(request_host(&request(&[])), None);
    }

    #[test]
    fn finds_cookie_among_others() {
        let req = request(&[("cookie", "theme=dark; brand_override=abc.def.ghi; cart=1")]);
        assert_eq!(
            cookie_value(req.headers(), OVERRIDE_COOKIE),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn finds_cookie_in_second_header() {
        let req = request(&[("cookie", "theme=dark"), ("cookie", "brand_override=tok")]);
        assert_eq!(cookie_value(req.headers(), OVERRIDE_COOKIE), Some("tok"));
    }

    #[test]
    fn cookie_name_must_match_exactly() {
        let req = request(&[("cookie", "xbrand_override=tok; brand_override_old=tok2")]);
        assert_eq!(cookie_value(req.headers(), OVERRIDE_COOKIE), None);
    }

    #[test]
    fn context_carries_both_inputs() {
        let req = request(&[("host", "tooly.com"), ("cookie", "brand_override=t")]);
        let ctx = request_context(&req);
        assert_eq!(ctx.host, Some("tooly.com"));
        assert_eq!(ctx.override_cookie, Some("t"));
    }
}
