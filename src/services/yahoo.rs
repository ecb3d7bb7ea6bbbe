//! Client for the Yahoo Finance v8 chart endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::constants::{HTTP_TIMEOUT_SECS, HTTP_USER_AGENT};
use crate::error::{Error, Result};
use crate::models::{Interval, PricePoint, PriceSeries};

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Historical price fetcher over the Yahoo chart API.
///
/// One request per (symbol, range, interval); no retries, no caching. An
/// empty result set is returned as an empty series so the caller can decide
/// how to surface the "no data" condition.
pub struct YahooClient {
    client: reqwest::Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(CHART_BASE_URL.to_string())
    }

    /// Create a client against a custom endpoint (used by tests)
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "Invalid base_url: must start with http:// or https://, got: '{}'",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(HTTP_USER_AGENT)
            .build()
            .map_err(|e| Error::Provider(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Fetch adjusted close history for a symbol over `[start, end)`.
    ///
    /// Prefers the adjusted close column, falling back to raw close when the
    /// provider omits it. Null observations are dropped.
    pub async fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<PriceSeries> {
        let period1 = start
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0);
        let period2 = end
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or(0);

        let url = format!(
            "{}/{}?period1={}&period2={}&interval={}&events=div%2Csplit",
            self.base_url,
            symbol,
            period1,
            period2,
            interval.to_provider_format()
        );

        debug!("Fetching history: url={}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Provider(format!("Request failed for '{}': {}", symbol, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            // A 404 from the chart endpoint means an unknown symbol; report
            // it as an empty series rather than a hard provider failure
            if status == reqwest::StatusCode::NOT_FOUND {
                warn!("Symbol '{}' not found at provider", symbol);
                return Ok(PriceSeries::from_points(symbol, Vec::new()));
            }
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read response body".to_string());
            return Err(Error::Provider(format!(
                "Provider returned status {} for '{}': {}",
                status, symbol, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Provider(format!("Failed to read response body: {}", e)))?;

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| Error::Parse(format!("Failed to parse provider response: {}", e)))?;

        let series = Self::parse_chart_response(symbol, &json)?;
        info!(
            "Fetched {} observations for '{}' ({} to {}, {})",
            series.len(),
            symbol,
            start,
            end,
            interval
        );

        Ok(series)
    }

    /// Parse a chart API payload into a price series.
    ///
    /// Shape: `chart.result[0]` holds `timestamp[]` plus
    /// `indicators.adjclose[0].adjclose[]` and `indicators.quote[0].close[]`.
    fn parse_chart_response(symbol: &str, json: &Value) -> Result<PriceSeries> {
        if let Some(err) = json["chart"]["error"].as_object() {
            let description = err
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or("unknown provider error");
            return Err(Error::Provider(format!(
                "Provider rejected '{}': {}",
                symbol, description
            )));
        }

        let result = match json["chart"]["result"].get(0) {
            Some(r) => r,
            None => return Ok(PriceSeries::from_points(symbol, Vec::new())),
        };

        let timestamps = match result["timestamp"].as_array() {
            Some(t) => t,
            None => return Ok(PriceSeries::from_points(symbol, Vec::new())),
        };

        // Adjusted close when available, raw close otherwise
        let adjclose = result["indicators"]["adjclose"][0]["adjclose"].as_array();
        let close = result["indicators"]["quote"][0]["close"].as_array();
        let prices = match adjclose.or(close) {
            Some(p) => p,
            None => return Ok(PriceSeries::from_points(symbol, Vec::new())),
        };

        let mut points = Vec::with_capacity(timestamps.len());
        for (ts, price) in timestamps.iter().zip(prices) {
            let (Some(ts), Some(price)) = (ts.as_i64(), price.as_f64()) else {
                // Null observation (unfilled candle), skip it
                continue;
            };
            let Some(date) = DateTime::<Utc>::from_timestamp(ts, 0).map(|dt| dt.date_naive())
            else {
                continue;
            };
            points.push(PricePoint::new(date, price));
        }

        Ok(PriceSeries::from_points(symbol, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(YahooClient::with_base_url("ftp://example.com".to_string()).is_err());
        assert!(YahooClient::with_base_url("https://example.com/".to_string()).is_ok());
    }

    #[test]
    fn test_parse_chart_response() {
        let json: Value = serde_json::from_str(
            r#"{
                "chart": {
                    "result": [{
                        "timestamp": [1704067200, 1704153600, 1704240000],
                        "indicators": {
                            "quote": [{"close": [184.0, 185.5, null]}],
                            "adjclose": [{"adjclose": [183.5, 185.0, null]}]
                        }
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let series = YahooClient::parse_chart_response("AAPL", &json).unwrap();
        // Null third observation is dropped, adjclose preferred over close
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![183.5, 185.0]);
    }

    #[test]
    fn test_parse_chart_response_missing_adjclose_falls_back() {
        let json: Value = serde_json::from_str(
            r#"{
                "chart": {
                    "result": [{
                        "timestamp": [1704067200],
                        "indicators": {"quote": [{"close": [184.0]}]}
                    }],
                    "error": null
                }
            }"#,
        )
        .unwrap();

        let series = YahooClient::parse_chart_response("AAPL", &json).unwrap();
        assert_eq!(series.closes(), vec![184.0]);
    }

    #[test]
    fn test_parse_chart_response_empty_result() {
        let json: Value =
            serde_json::from_str(r#"{"chart": {"result": [], "error": null}}"#).unwrap();
        let series = YahooClient::parse_chart_response("NOPE", &json).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_parse_chart_response_provider_error() {
        let json: Value = serde_json::from_str(
            r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}}"#,
        )
        .unwrap();

        match YahooClient::parse_chart_response("GONE", &json) {
            Err(Error::Provider(msg)) => assert!(msg.contains("delisted")),
            other => panic!("expected Provider error, got {:?}", other),
        }
    }
}
