use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use super::error::{AppError, AppResult, CtxError, CtxResult};
use crate::middleware::mw_ctx::CtxState;

/// Header the upstream auth gateway sets to the authenticated member id.
pub const MEMBER_ID_HEADER: &str = "x-member-id";

#[derive(Clone, Debug)]
pub struct Ctx {
    result_member_id: AppResult<i64>,
    req_id: Uuid,
}

impl Ctx {
    pub fn new(result_member_id: AppResult<i64>) -> Self {
        Self {
            result_member_id,
            req_id: Uuid::new_v4(),
        }
    }

    pub fn req_id(&self) -> Uuid {
        self.req_id
    }

    pub fn member_id(&self) -> CtxResult<i64> {
        self.result_member_id
            .clone()
            .map_err(|error| self.to_ctx_error(error))
    }

    pub fn to_ctx_error(&self, error: AppError) -> CtxError {
        CtxError {
            error,
            req_id: self.req_id,
        }
    }
}

fn parse_member_id(parts: &Parts) -> AppResult<i64> {
    parts
        .headers
        .get(MEMBER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok())
        .ok_or(AppError::AuthFailNoMemberId)
}

#[async_trait]
impl FromRequestParts<Arc<CtxState>> for Ctx {
    type Rejection = CtxError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &Arc<CtxState>,
    ) -> Result<Self, Self::Rejection> {
        // one Ctx per request, shared with the other extractors
        if let Some(ctx) = parts.extensions.get::<Ctx>() {
            return Ok(ctx.clone());
        }
        let ctx = Ctx::new(parse_member_id(parts));
        parts.extensions.insert(ctx.clone());
        Ok(ctx)
    }
}
