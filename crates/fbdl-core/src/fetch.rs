//! Client for the third-party extraction endpoint.
//!
//! One GET per call, no retries. The blocking libcurl transfer runs on the
//! tokio blocking pool so the caller only suspends at the await.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use url::Url;

use crate::config::FbdlConfig;
use crate::error::ResolveError;
use crate::http::{self, HttpOptions};
use crate::model::VideoResult;
use crate::normalize::normalize;

/// Bytes left alone by JavaScript's `encodeURIComponent`; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct Fetcher {
    endpoint: Url,
    opts: HttpOptions,
}

impl Fetcher {
    pub fn new(endpoint: &str, opts: HttpOptions) -> anyhow::Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| anyhow::anyhow!("invalid endpoint '{endpoint}': {e}"))?;
        Ok(Self { endpoint, opts })
    }

    pub fn from_config(cfg: &FbdlConfig) -> anyhow::Result<Self> {
        Self::new(&cfg.endpoint, cfg.http_options())
    }

    /// Endpoint URL with `video_url` as the percent-encoded `url` query parameter.
    pub fn request_url(&self, video_url: &str) -> Url {
        let encoded = utf8_percent_encode(video_url, URI_COMPONENT);
        let query = match self.endpoint.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&url={encoded}"),
            _ => format!("url={encoded}"),
        };
        let mut url = self.endpoint.clone();
        url.set_query(Some(&query));
        url
    }

    /// Query the endpoint for `video_url` and normalize the answer.
    pub async fn fetch_info(&self, video_url: &str) -> Result<VideoResult, ResolveError> {
        let request = self.request_url(video_url);
        let opts = self.opts;
        tracing::debug!(url = %request, "querying extraction endpoint");

        let response = tokio::task::spawn_blocking(move || http::get(request.as_str(), &opts))
            .await
            .map_err(|e| ResolveError::Network(format!("request task failed: {e}")))?
            .map_err(|e| ResolveError::Network(format!("{e:#}")))?;

        if !response.is_success() {
            return Err(ResolveError::Network(format!(
                "API request failed with status {}",
                response.status
            )));
        }

        parse_api_response(&response.body)
    }
}

/// Check the `{ status, data }` envelope and normalize `data`.
pub fn parse_api_response(body: &[u8]) -> Result<VideoResult, ResolveError> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| ResolveError::Api(format!("response is not valid JSON: {e}")))?;

    if !json.get("status").is_some_and(is_truthy) {
        return Err(ResolveError::Api(
            "API returned an unsuccessful response".to_string(),
        ));
    }

    let data = json
        .get("data")
        .filter(|d| is_truthy(d))
        .ok_or_else(|| ResolveError::Api("No data found in API response".to_string()))?;

    Ok(normalize(data))
}

/// JavaScript truthiness, which the endpoint's `status` flag follows.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QualityTag;
    use serde_json::json;

    #[test]
    fn request_url_encodes_video_url() {
        let f = Fetcher::new("https://api.example.com/", HttpOptions::default()).unwrap();
        let url = f.request_url("https://www.facebook.com/watch?v=123&t=4");
        assert_eq!(
            url.as_str(),
            "https://api.example.com/?url=https%3A%2F%2Fwww.facebook.com%2Fwatch%3Fv%3D123%26t%3D4"
        );
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, "https://www.facebook.com/watch?v=123&t=4");
    }

    #[test]
    fn request_url_matches_uri_component_encoding() {
        let f = Fetcher::new("https://api.example.com/", HttpOptions::default()).unwrap();
        let input = "https://www.facebook.com/x/posts/a b(1)!~*'";
        assert!(crate::validate::validate(input));
        let url = f.request_url(input);
        assert_eq!(
            url.query(),
            Some("url=https%3A%2F%2Fwww.facebook.com%2Fx%2Fposts%2Fa%20b(1)!~*'")
        );
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs[0].1, input);
    }

    #[test]
    fn request_url_keeps_existing_endpoint_query() {
        let f = Fetcher::new("https://api.example.com/?key=abc", HttpOptions::default()).unwrap();
        let url = f.request_url("https://fb.com/watch?v=1");
        assert_eq!(
            url.query(),
            Some("key=abc&url=https%3A%2F%2Ffb.com%2Fwatch%3Fv%3D1")
        );
    }

    #[test]
    fn invalid_endpoint_rejected() {
        assert!(Fetcher::new("not a url", HttpOptions::default()).is_err());
    }

    #[test]
    fn truthiness_follows_javascript() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn parse_success_normalizes_data() {
        let body = br#"{"status":true,"data":{"url":"http://cdn/v.mp4","quality":"HD"}}"#;
        let r = parse_api_response(body).unwrap();
        assert!(r.has_quality(QualityTag::Hd));
        assert!(r.has_quality(QualityTag::Sd));
    }

    #[test]
    fn parse_rejects_falsy_or_missing_status() {
        for body in [
            br#"{"status":false,"data":{"url":"x"}}"#.as_slice(),
            br#"{"status":0,"data":{"url":"x"}}"#.as_slice(),
            br#"{"data":{"url":"x"}}"#.as_slice(),
        ] {
            assert!(matches!(parse_api_response(body), Err(ResolveError::Api(_))));
        }
    }

    #[test]
    fn parse_rejects_missing_data_and_bad_json() {
        assert!(matches!(
            parse_api_response(br#"{"status":true}"#),
            Err(ResolveError::Api(_))
        ));
        assert!(matches!(
            parse_api_response(br#"{"status":true,"data":null}"#),
            Err(ResolveError::Api(_))
        ));
        assert!(matches!(
            parse_api_response(b"<html>oops</html>"),
            Err(ResolveError::Api(_))
        ));
    }

    #[test]
    fn parse_empty_data_object_yields_no_variants() {
        let r = parse_api_response(br#"{"status":"ok","data":{}}"#).unwrap();
        assert!(r.success);
        assert!(r.variants.is_empty());
    }
}
