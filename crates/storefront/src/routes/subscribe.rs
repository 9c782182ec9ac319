//! Newsletter subscription endpoint.
//!
//! Accepts a form-posted email address, validates it, logs it, and reports
//! success. Nothing is stored and no mail is sent.

use axum::{Form, Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use krishi_jyothi_core::Email;

/// Newsletter subscription form body.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubscribeOk {
    success: bool,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct SubscribeErr {
    error: &'static str,
}

/// Handle a newsletter subscription.
#[instrument(skip(form))]
pub async fn subscribe(Form(form): Form<SubscribeForm>) -> impl IntoResponse {
    let Some(raw) = form.email.filter(|email| !email.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubscribeErr {
                error: "Email is required",
            }),
        )
            .into_response();
    };

    let Ok(email) = Email::parse(&raw) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(SubscribeErr {
                error: "Please enter a valid email address",
            }),
        )
            .into_response();
    };

    tracing::info!(email = %email, "Newsletter subscription");
    Json(SubscribeOk {
        success: true,
        message: "Successfully subscribed to newsletter",
    })
    .into_response()
}
