use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxError};
use crate::middleware::mw_ctx::CtxState;

/// `Path` whose rejection is answered with the `BaseResponse` envelope.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T> FromRequestParts<Arc<CtxState>> for ApiPath<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = CtxError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<CtxState>,
    ) -> Result<Self, Self::Rejection> {
        let ctx = Ctx::from_request_parts(parts, state).await?;
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| ctx.to_ctx_error(AppError::from(err)))?;
        Ok(Self(value))
    }
}

/// `Query` whose rejection is answered with the `BaseResponse` envelope.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T> FromRequestParts<Arc<CtxState>> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = CtxError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<CtxState>,
    ) -> Result<Self, Self::Rejection> {
        let ctx = Ctx::from_request_parts(parts, state).await?;
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|err| ctx.to_ctx_error(AppError::from(err)))?;
        Ok(Self(value))
    }
}
