//! Export handlers: all stored records as JSON or as a CSV attachment.

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use weather_core::WeatherRecord;

use crate::{error::ApiError, state::AppState};

/// All records as a JSON array.
///
/// GET /export/json
pub async fn export_json(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherRecord>>, ApiError> {
    let records = state.store.scan().await?;
    Ok(Json(records))
}

/// All records as a CSV file attachment. Columns are the keys of a
/// record; nested values are carried as JSON text.
///
/// GET /export/csv
pub async fn export_csv(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = state.store.scan().await?;
    if records.is_empty() {
        return Err(ApiError::EmptyStore);
    }

    let csv = records_to_csv(&records)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"weather.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// Field names of `WeatherRecord`, in declaration order.
const COLUMNS: [&str; 6] = ["location", "current", "forecast", "timestamp", "lat", "lon"];

fn records_to_csv(records: &[WeatherRecord]) -> Result<String, ApiError> {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push_str("\r\n");

    for record in records {
        let current = serde_json::to_string(&record.current)
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        let forecast = serde_json::to_string(&record.forecast)
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        let row = [
            csv_field(&record.location),
            csv_field(&current),
            csv_field(&forecast),
            csv_field(&record.timestamp.to_rfc3339()),
            record.lat.to_string(),
            record.lon.to_string(),
        ];
        out.push_str(&row.join(","));
        out.push_str("\r\n");
    }

    Ok(out)
}

/// RFC 4180 quoting: wrap fields containing separators or quotes, and
/// double any embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_core::{CurrentConditions, WeatherRecord};

    fn record(location: &str) -> WeatherRecord {
        WeatherRecord::new(
            location,
            CurrentConditions {
                temperature: 18.4,
                description: "scattered clouds".to_string(),
                humidity: 62,
                wind_speed: 3.1,
                lat: 48.85,
                lon: 2.35,
                icon: "03d".to_string(),
            },
            vec![],
        )
    }

    #[test]
    fn csv_header_is_the_record_keys() {
        let csv = records_to_csv(&[record("Paris")]).expect("csv should render");
        let header = csv.lines().next().expect("csv should have a header");
        assert_eq!(header, "location,current,forecast,timestamp,lat,lon");
    }

    #[test]
    fn csv_has_one_row_per_record() {
        let csv = records_to_csv(&[record("Paris"), record("Lyon")]).expect("csv should render");
        assert_eq!(csv.lines().count(), 3);
        assert!(csv.lines().nth(1).expect("row").starts_with("Paris,"));
    }

    #[test]
    fn csv_field_quotes_embedded_separators() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn nested_values_are_json_text() {
        let csv = records_to_csv(&[record("Oslo")]).expect("csv should render");
        let row = csv.lines().nth(1).expect("row");
        assert!(row.contains("scattered clouds"));
    }
}
