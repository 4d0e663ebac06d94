// admin-console/src/extractors/json.rs

use axum::extract::{rejection::JsonRejection, FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;
use crate::utils::error_helper::convert_validation_errors;

/// JSON ボディを取り出す（形式エラーは 400 のエンベロープになる）
async fn read_json<T, S>(req: Request, state: &S) -> Result<(T, String), AppError>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    let path = req.uri().path().to_string();
    let Json(value) = Json::<T>::from_request(req, state)
        .await
        .map_err(|rejection: JsonRejection| {
            tracing::warn!(path = %path, error = %rejection.body_text(), "Invalid JSON body");
            AppError::BadRequest(rejection.body_text())
        })?;
    Ok((value, path))
}

/// JSON ボディを取り出し、`validator` のルールで検証する
///
/// 形式エラー・検証エラーはどちらも 400 のエンベロープとして返る。
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (value, path) = read_json::<T, S>(req, state).await?;

        value
            .validate()
            .map_err(|e| convert_validation_errors(e, &path))?;

        Ok(ValidatedJson(value))
    }
}

/// 検証ルールを持たない JSON ボディ
#[derive(Debug, Clone, Default)]
pub struct EnvelopeJson<T>(pub T);

impl<T, S> FromRequest<S> for EnvelopeJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (value, _) = read_json::<T, S>(req, state).await?;
        Ok(EnvelopeJson(value))
    }
}
