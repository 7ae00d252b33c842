use actix_web::{http::StatusCode, HttpResponse, HttpResponseBuilder};
use ks_error::Error;
use ks_pagination::Paginator;
use serde::Serialize;

pub mod record;

#[derive(Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<Paginator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl Response {
    pub fn data<T: Serialize>(
        status_code: &StatusCode,
        pagination: Option<Paginator>,
        data: T,
    ) -> HttpResponse {
        match serde_json::to_value(data) {
            Ok(data) => HttpResponseBuilder::new(*status_code).json(Self {
                error: None,
                pagination,
                data: Some(data),
            }),
            Err(err) => Self::error(&Error::InternalServerError(err.to_string())),
        }
    }

    pub fn error(err: &Error) -> HttpResponse {
        let status_code = match err {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::MalformedToken(_)
            | Error::InherentlyInvalidDirection
            | Error::DirectionMismatch { .. }
            | Error::AmbiguousDirection
            | Error::InvalidLimit { .. }
            | Error::InvalidToken(_)
            | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        Self::error_raw(&status_code, &err.to_string())
    }

    pub fn error_raw(status_code: &StatusCode, message: &str) -> HttpResponse {
        match status_code.is_server_error() {
            true => ks_log::error(None, message),
            false => ks_log::debug(None, format!("{} {message}", status_code.as_u16())),
        }

        HttpResponseBuilder::new(*status_code).json(Self {
            error: Some(ErrorRes {
                status: match status_code.canonical_reason() {
                    Some(status_code) => status_code.to_owned(),
                    None => "Unknown".to_owned(),
                },
                message: message.to_owned(),
            }),
            pagination: None,
            data: None,
        })
    }
}

#[derive(Serialize)]
pub struct ErrorRes {
    status: String,
    message: String,
}
