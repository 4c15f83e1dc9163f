use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::{ApiKey, Location},
    error::Error,
    model::Conditions,
};

use super::ConditionsProvider;

const BASE_URL: &str = "http://api.wunderground.com";

/// Client for the Weather Underground conditions endpoint.
#[derive(Debug, Clone)]
pub struct WundergroundClient {
    base_url: String,
    http: Client,
}

impl WundergroundClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL.to_string())
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: Client::new(),
        }
    }

    fn conditions_url(&self, api_key: &ApiKey, location: &Location) -> String {
        format!(
            "{}/api/{}/conditions/q/{}/{}.json",
            self.base_url,
            api_key.as_str(),
            location.state,
            location.city,
        )
    }
}

impl Default for WundergroundClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConditionsProvider for WundergroundClient {
    async fn fetch_conditions(
        &self,
        api_key: &ApiKey,
        location: &Location,
    ) -> Result<String, Error> {
        let url = self.conditions_url(api_key, location);

        // Any received response is handed back whole, error statuses
        // included; Wunderground reports problems such as a bad key in the
        // body itself.
        let res = self.http.get(&url).send().await?;
        let body = res.text().await?;

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct WuCurrentObservation {
    temp_f: f64,
}

#[derive(Debug, Deserialize)]
struct WuConditionsResponse {
    current_observation: WuCurrentObservation,
}

/// Extract the current temperature from a raw conditions body.
///
/// Every shape problem collapses into the same error kind: invalid JSON, a
/// missing `current_observation` object, or a missing or non-numeric
/// `temp_f`.
pub fn parse_conditions(body: &str) -> Result<Conditions, Error> {
    let parsed: WuConditionsResponse = serde_json::from_str(body)?;

    Ok(Conditions {
        temp_f: parsed.current_observation.temp_f,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn conditions_url_substitutes_key_and_location() {
        let client = WundergroundClient::new();
        let url = client.conditions_url(&ApiKey::new("TESTKEY"), &Location::default());

        assert_eq!(
            url,
            "http://api.wunderground.com/api/TESTKEY/conditions/q/MN/Minneapolis.json"
        );
    }

    #[test]
    fn parses_nested_temp() {
        let body = r#"{"current_observation":{"temp_f": 55.2}}"#;

        let conditions = parse_conditions(body).expect("body must parse");
        assert_eq!(conditions.temp_f, 55.2);
    }

    #[test]
    fn parsing_is_idempotent() {
        let body = r#"{"current_observation":{"temp_f": 72.0}}"#;

        let first = parse_conditions(body).expect("body must parse");
        let second = parse_conditions(body).expect("body must parse");
        assert_eq!(first, second);
    }

    #[test]
    fn ignores_extra_fields() {
        let body = r#"{
            "response": {"version": "0.1"},
            "current_observation": {"temp_f": 12.5, "wind_mph": 4.0}
        }"#;

        let conditions = parse_conditions(body).expect("body must parse");
        assert_eq!(conditions.temp_f, 12.5);
    }

    #[test]
    fn missing_current_observation_is_a_format_error() {
        let err = parse_conditions(r#"{"foo": "bar"}"#).unwrap_err();

        assert!(matches!(err, Error::ResponseFormat(_)));
    }

    #[test]
    fn non_numeric_temp_is_a_format_error() {
        let err = parse_conditions(r#"{"current_observation":{"temp_f": "warm"}}"#).unwrap_err();

        assert!(matches!(err, Error::ResponseFormat(_)));
    }

    #[test]
    fn invalid_json_is_a_format_error() {
        let err = parse_conditions("this is not json").unwrap_err();

        assert!(matches!(err, Error::ResponseFormat(_)));
    }

    #[tokio::test]
    async fn fetches_the_raw_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/TESTKEY/conditions/q/MN/Minneapolis.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"current_observation":{"temp_f": 41.0}}"#,
            ))
            .mount(&mock_server)
            .await;

        let client = WundergroundClient::with_base_url(mock_server.uri());
        let body = client
            .fetch_conditions(&ApiKey::new("TESTKEY"), &Location::default())
            .await
            .expect("fetch must succeed");

        assert_eq!(body, r#"{"current_observation":{"temp_f": 41.0}}"#);
    }

    #[tokio::test]
    async fn error_statuses_still_yield_the_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_string(r#"{"error": {"type": "keynotfound"}}"#),
            )
            .mount(&mock_server)
            .await;

        let client = WundergroundClient::with_base_url(mock_server.uri());
        let body = client
            .fetch_conditions(&ApiKey::new("BADKEY"), &Location::default())
            .await
            .expect("a received response is never a fetch error");

        assert_eq!(body, r#"{"error": {"type": "keynotfound"}}"#);
    }

    #[tokio::test]
    async fn transport_failure_is_a_network_error() {
        // Bind a listener to grab a free port, then drop it so connecting fails.
        let uri = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };

        let client = WundergroundClient::with_base_url(uri);
        let err = client
            .fetch_conditions(&ApiKey::new("TESTKEY"), &Location::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Network(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
