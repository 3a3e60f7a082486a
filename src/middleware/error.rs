use std::fmt;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::database::table_names::{DESIGNER_TABLE_NAME, MEMBER_TABLE_NAME, PRODUCT_TABLE_NAME};
use crate::middleware::ctx::Ctx;
use crate::models::response::{BaseResponse, ResponseStatus};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CtxError {
    pub error: AppError,
    pub req_id: Uuid,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    AuthFailNoMemberId,
    EntityFailIdNotFound { table: String, id: i64 },
    UnsupportedLikeTarget { target: String },
    SearchKeywordTooShort { min: usize },
    Serde { source: String },
    SurrealDb { source: String },
}

/// CtxError carries the req_id reported back to the client and implements IntoResponse.
pub type CtxResult<T> = core::result::Result<T, CtxError>;
/// Any error raised below the route layer, before a req_id is attached.
pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl AppError {
    pub fn not_found(table: &str, id: i64) -> Self {
        Self::EntityFailIdNotFound {
            table: table.to_string(),
            id,
        }
    }

    pub fn status(&self) -> ResponseStatus {
        match self {
            Self::EntityFailIdNotFound { table, .. } => match table.as_str() {
                MEMBER_TABLE_NAME => ResponseStatus::MembersIllegalId,
                DESIGNER_TABLE_NAME => ResponseStatus::DesignersIllegalId,
                PRODUCT_TABLE_NAME => ResponseStatus::ProductsIllegalId,
                _ => ResponseStatus::InvalidRequest,
            },
            Self::UnsupportedLikeTarget { .. } => ResponseStatus::UnsupportedLikeTarget,
            Self::SearchKeywordTooShort { .. } => ResponseStatus::SearchKeywordLengthTooShort,
            Self::AuthFailNoMemberId => ResponseStatus::MemberIdentityMissing,
            Self::Generic { .. } | Self::Serde { .. } => ResponseStatus::InvalidRequest,
            Self::SurrealDb { .. } => ResponseStatus::InternalServerError,
        }
    }
}

// for slightly less verbose error mappings
impl CtxError {
    pub fn from<T: Into<AppError>>(ctx: &Ctx) -> impl FnOnce(T) -> CtxError + '_ {
        |err| CtxError {
            req_id: ctx.req_id(),
            error: err.into(),
        }
    }
}

impl From<AppError> for CtxError {
    fn from(value: AppError) -> Self {
        CtxError {
            req_id: Uuid::new_v4(),
            error: value,
        }
    }
}

impl From<surrealdb::Error> for CtxError {
    fn from(value: surrealdb::Error) -> Self {
        AppError::from(value).into()
    }
}

const INTERNAL: &str = "Internal error";

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::AuthFailNoMemberId => write!(f, "Member identity is missing"),
            Self::EntityFailIdNotFound { table, id } => {
                write!(f, "Record id= {table}:{id} not found")
            }
            Self::UnsupportedLikeTarget { target } => {
                write!(f, "Like target '{target}' is not supported")
            }
            Self::SearchKeywordTooShort { min } => {
                write!(f, "Search keyword must have at least {min} characters")
            }
            Self::Serde { source } => write!(f, "Serde error - {source}"),
            Self::SurrealDb { .. } => write!(f, "{INTERNAL}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponseBody {
    pub error: String,
    pub req_id: String,
}

// REST error response
impl IntoResponse for CtxError {
    fn into_response(self) -> axum::response::Response {
        let status = self.error.status();
        let status_code = StatusCode::from_u16(status.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(req_id = %self.req_id, error = ?self.error, "request failed");
        } else {
            tracing::warn!(req_id = %self.req_id, error = %self.error, "request rejected");
        }

        let body = BaseResponse::failure(
            status,
            ErrorResponseBody {
                error: self.error.to_string(),
                req_id: self.req_id.to_string(),
            },
        );
        let mut response = (status_code, Json(body)).into_response();
        // Insert the real Error into the response - for the logger
        response.extensions_mut().insert(self.error);
        response
    }
}

// External Errors
impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde {
            source: value.to_string(),
        }
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        Self::SurrealDb {
            source: value.to_string(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(value: PathRejection) -> Self {
        Self::Generic {
            description: value.body_text(),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(value: QueryRejection) -> Self {
        Self::Generic {
            description: value.body_text(),
        }
    }
}

impl From<CtxError> for AppError {
    fn from(value: CtxError) -> Self {
        value.error
    }
}
