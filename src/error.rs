use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            200..=299 => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        invalid_input_error(rejection.to_string())
    }
}

impl From<QueryRejection> for Error {
    fn from(rejection: QueryRejection) -> Self {
        invalid_input_error(rejection.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "code": self.code,
            "message": self.message,
        }));

        (self.status(), body).into_response()
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error(message: impl Into<String>) -> Error {
    Error {
        code: 101,
        message: message.into(),
    }
}

pub fn invalid_car_type_error() -> Error {
    Error {
        code: 102,
        message: "invalid car type".into(),
    }
}

pub fn duplicate_booking_error() -> Error {
    Error {
        code: 103,
        message: "booking already exists".into(),
    }
}

pub fn booking_not_found_error() -> Error {
    Error {
        code: 200,
        message: "booking not found".into(),
    }
}

pub fn no_pricing_error() -> Error {
    Error {
        code: 201,
        message: "no pricing available for this route".into(),
    }
}

pub fn env_var_error(err: env::VarError) -> Error {
    tracing::error!(%err, "environment variable error");

    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(err: T) -> Error {
    tracing::error!(?err, "database error");

    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::error!(%err, "reqwest error");

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn config_error(name: &str) -> Error {
    tracing::error!(name, "invalid configuration value");

    Error {
        code: 6,
        message: format!("invalid configuration value for {}", name),
    }
}
