use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Handler failures, rendered as `{"error": "<message>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Informe cidade e país.")]
    MissingCityOrCountry,

    #[error("Informe pelo menos uma cidade.")]
    MissingCities,

    #[error("Cidade não encontrada.")]
    CityNotFound,

    #[error("Erro ao obter dados do clima.")]
    WeatherUnavailable,

    #[error("Erro ao consultar API para múltiplas cidades.")]
    BatchUnavailable,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCityOrCountry | ApiError::MissingCities => StatusCode::BAD_REQUEST,
            ApiError::CityNotFound => StatusCode::NOT_FOUND,
            ApiError::WeatherUnavailable | ApiError::BatchUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
