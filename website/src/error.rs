use axum::http::{self, StatusCode};
use axum::{
    body::Body,
    extract::rejection::{FormRejection, QueryRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use snafu::{Backtrace, ErrorCompat, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Error reading config file: {}", source))]
    ConfigFile {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Error parsing config file: {}", source))]
    ConfigParse {
        source: toml::de::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Config error: {}", msg))]
    Config { msg: String },

    #[snafu(display("Unable to bind to {}: {}", addr, source))]
    Bind {
        addr: String,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Server error: {}", source))]
    Serve {
        source: std::io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", source))]
    Db {
        source: db::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Failed to render template: {}", source))]
    Template {
        source: askama::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Response builder error: {}", source))]
    ResponseBuilder {
        source: http::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", msg))]
    NotFound { msg: String },

    #[snafu(display("{}", msg))]
    FormRejection {
        msg: String,
        source: FormRejection,
        backtrace: Backtrace,
    },

    #[snafu(display("{}", msg))]
    QueryRejection {
        msg: String,
        source: QueryRejection,
        backtrace: Backtrace,
    },
}

/// Allow Error to be converted to StatusCode
impl From<&Error> for StatusCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::FormRejection { .. } => StatusCode::BAD_REQUEST,
            Error::QueryRejection { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Allow errors to be rendered as response
impl IntoResponse for Error {
    fn into_response(self) -> Response<Body> {
        let status_code = StatusCode::from(&self);
        let title = status_code
            .canonical_reason()
            .unwrap_or("Error")
            .to_string();
        let message = format!("{}", self);
        let mut backtrace: Option<String> = None;
        if let Some(bt) = ErrorCompat::backtrace(&self) {
            backtrace = Some(format!("{}", bt));
        }

        // The response mapper renders the actual page from ErrorInfo
        let mut res = Response::new(Body::empty());
        *res.status_mut() = status_code;

        res.extensions_mut().insert(ErrorInfo {
            status_code,
            title,
            message,
            backtrace,
        });

        res
    }
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Clone, Debug)]
pub struct ErrorInfo {
    pub status_code: StatusCode,
    pub title: String,
    pub message: String,
    pub backtrace: Option<String>,
}
