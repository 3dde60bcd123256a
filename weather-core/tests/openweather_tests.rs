//! Integration tests for the OpenWeather provider using WireMock.
//!
//! These mock the OpenWeather API to verify request shape, normalization,
//! and failure handling without real network calls.

use serde_json::json;
use weather_core::{OpenWeatherProvider, WeatherProvider};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn provider(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new("test-key".to_string()).with_base_url(server.uri())
}

fn current_response() -> serde_json::Value {
    json!({
        "coord": { "lat": 48.8566, "lon": 2.3522 },
        "weather": [{ "id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d" }],
        "main": { "temp": 18.4, "feels_like": 17.9, "humidity": 62 },
        "wind": { "speed": 3.1, "deg": 240 },
        "name": "Paris"
    })
}

/// A 5-day/3-hour feed: 40 entries, 8 per day.
fn forecast_response() -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..40)
        .map(|i| {
            json!({
                "dt": 1_724_900_000 + i * 10_800,
                "dt_txt": format!("2026-08-{:02} {:02}:00:00", 25 + i / 8, (i % 8) * 3),
                "main": { "temp": 10.0 + i as f64, "humidity": 55 },
                "weather": [{ "description": "light rain", "icon": "10d" }]
            })
        })
        .collect();

    json!({ "city": { "name": "Paris", "country": "FR" }, "list": list })
}

#[tokio::test]
async fn current_conditions_normalizes_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_response()))
        .expect(1)
        .mount(&server)
        .await;

    let current = provider(&server)
        .current_conditions("Paris")
        .await
        .expect("fetch should succeed");

    assert!((current.temperature - 18.4).abs() < f64::EPSILON);
    assert_eq!(current.description, "scattered clouds");
    assert_eq!(current.humidity, 62);
    assert!((current.wind_speed - 3.1).abs() < f64::EPSILON);
    assert!((current.lat - 48.8566).abs() < f64::EPSILON);
    assert!((current.lon - 2.3522).abs() < f64::EPSILON);
    assert_eq!(current.icon, "03d");
}

#[tokio::test]
async fn current_conditions_fails_on_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "city not found" })),
        )
        .mount(&server)
        .await;

    let err = provider(&server)
        .current_conditions("Nowhere")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn current_conditions_fails_on_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .current_conditions("Paris")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("parse"));
}

#[tokio::test]
async fn current_conditions_fails_when_weather_entry_missing() {
    let server = MockServer::start().await;

    let mut body = current_response();
    body["weather"] = json!([]);

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let err = provider(&server)
        .current_conditions("Paris")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("no weather entry"));
}

#[tokio::test]
async fn forecast_downsamples_to_one_entry_per_day() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = provider(&server)
        .forecast("Paris")
        .await
        .expect("fetch should succeed");

    assert_eq!(forecast.len(), 5);

    // Entries come from indices 0, 8, 16, 24, 32 of the feed.
    for (day, index) in forecast.iter().zip([0u32, 8, 16, 24, 32]) {
        assert!((day.temp - (10.0 + f64::from(index))).abs() < f64::EPSILON);
        assert_eq!(day.desc, "light rain");
        assert_eq!(day.date, format!("2026-08-{:02}", 25 + index / 8));
    }
}

#[tokio::test]
async fn forecast_fails_on_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = provider(&server).forecast("Paris").await.unwrap_err();
    assert!(err.to_string().contains("500"));
}
