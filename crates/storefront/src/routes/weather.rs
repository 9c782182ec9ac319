//! Mock weather endpoint for the farming dashboard.
//!
//! Serves canned reports for a handful of Indian cities. A real deployment
//! would proxy a weather provider here; the payload shape is what the
//! dashboard widgets consume.

use axum::{Json, extract::Query, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Query parameters for the weather lookup.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub location: Option<String>,
}

/// Current conditions for a city.
#[derive(Debug, Serialize)]
pub struct CurrentConditions {
    pub temp: i32,
    pub condition: &'static str,
    pub humidity: u32,
    pub wind: u32,
    pub icon: &'static str,
}

/// One day of the five-day forecast.
#[derive(Debug, Serialize)]
pub struct DayForecast {
    pub day: &'static str,
    pub temp: i32,
    pub icon: &'static str,
}

/// The full weather payload for a city.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub forecast: Vec<DayForecast>,
    pub farming_tips: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct WeatherError {
    error: &'static str,
}

/// Serve the mock weather report for a city.
///
/// Unknown cities fall back to Mumbai; a missing `location` parameter is
/// a 400.
#[instrument]
pub async fn lookup(Query(query): Query<WeatherQuery>) -> impl IntoResponse {
    let Some(location) = query.location.filter(|location| !location.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(WeatherError {
                error: "Location parameter is required",
            }),
        )
            .into_response();
    };

    Json(report_for(&location)).into_response()
}

fn report_for(location: &str) -> WeatherReport {
    match location {
        "Delhi" => delhi(),
        "Bangalore" => bangalore(),
        "Kolkata" => kolkata(),
        "Chennai" => chennai(),
        _ => mumbai(),
    }
}

fn day(day: &'static str, temp: i32, icon: &'static str) -> DayForecast {
    DayForecast { day, temp, icon }
}

fn mumbai() -> WeatherReport {
    WeatherReport {
        current: CurrentConditions {
            temp: 32,
            condition: "Partly Cloudy",
            humidity: 75,
            wind: 12,
            icon: "cloud-sun",
        },
        forecast: vec![
            day("Mon", 33, "sun"),
            day("Tue", 32, "cloud-sun"),
            day("Wed", 31, "cloud"),
            day("Thu", 30, "cloud-rain"),
            day("Fri", 31, "cloud-sun"),
        ],
        farming_tips: vec![
            "Consider early morning or evening irrigation to reduce water loss due to evaporation.",
            "Monitor for increased pest activity due to high humidity levels.",
            "Good time to plant leafy vegetables before the rain on Thursday.",
            "Ensure proper drainage systems are in place for the upcoming rainfall.",
        ],
    }
}

fn delhi() -> WeatherReport {
    WeatherReport {
        current: CurrentConditions {
            temp: 38,
            condition: "Sunny",
            humidity: 45,
            wind: 8,
            icon: "sun",
        },
        forecast: vec![
            day("Mon", 39, "sun"),
            day("Tue", 40, "sun"),
            day("Wed", 39, "sun"),
            day("Thu", 37, "cloud-sun"),
            day("Fri", 36, "cloud-sun"),
        ],
        farming_tips: vec![
            "Increase frequency of irrigation due to high temperatures.",
            "Consider shade cloth for sensitive crops to prevent sun damage.",
            "Early morning harvesting recommended to maintain produce freshness.",
            "Monitor soil moisture levels closely in these dry conditions.",
        ],
    }
}

fn bangalore() -> WeatherReport {
    WeatherReport {
        current: CurrentConditions {
            temp: 26,
            condition: "Pleasant",
            humidity: 65,
            wind: 10,
            icon: "cloud-sun",
        },
        forecast: vec![
            day("Mon", 27, "cloud-sun"),
            day("Tue", 28, "sun"),
            day("Wed", 27, "cloud-sun"),
            day("Thu", 26, "cloud"),
            day("Fri", 25, "cloud-rain"),
        ],
        farming_tips: vec![
            "Ideal conditions for planting most vegetables and flowering plants.",
            "Good time for grafting and propagation activities.",
            "Light irrigation recommended for established plants.",
            "Prepare for light rainfall expected by end of week.",
        ],
    }
}

fn kolkata() -> WeatherReport {
    WeatherReport {
        current: CurrentConditions {
            temp: 34,
            condition: "Humid",
            humidity: 80,
            wind: 6,
            icon: "cloud",
        },
        forecast: vec![
            day("Mon", 34, "cloud"),
            day("Tue", 35, "cloud-sun"),
            day("Wed", 33, "cloud-rain"),
            day("Thu", 32, "cloud-rain"),
            day("Fri", 33, "cloud"),
        ],
        farming_tips: vec![
            "High humidity may increase fungal disease risk - monitor crops closely.",
            "Consider fungicide application before expected rainfall.",
            "Ensure adequate spacing between plants for air circulation.",
            "Good time for rice paddy preparation with upcoming rain.",
        ],
    }
}

fn chennai() -> WeatherReport {
    WeatherReport {
        current: CurrentConditions {
            temp: 36,
            condition: "Hot",
            humidity: 70,
            wind: 14,
            icon: "sun",
        },
        forecast: vec![
            day("Mon", 36, "sun"),
            day("Tue", 37, "sun"),
            day("Wed", 36, "cloud-sun"),
            day("Thu", 35, "cloud-sun"),
            day("Fri", 35, "cloud"),
        ],
        farming_tips: vec![
            "Mulch around plants to retain soil moisture in the heat.",
            "Coastal winds may dry foliage quickly - check irrigation twice daily.",
            "Harvest early in the day before temperatures peak.",
            "Delay transplanting seedlings until the midweek cloud cover.",
        ],
    }
}
