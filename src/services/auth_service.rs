use gloo_net::http::Request;

use crate::models::{LoginRequest, LoginResponse};
use crate::services::error::ApiError;
use crate::utils::API_BASE_URL;

/// Inicia sesión como administrador y devuelve el token emitido.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let url = format!("{}/admin/login", API_BASE_URL);
    let request_body = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    log::info!("🔐 Iniciando sesión para: {}", email);

    let response = Request::post(&url)
        .json(&request_body)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Invalida el token actual en el backend.
pub async fn logout(token: &str) -> Result<(), ApiError> {
    let url = format!("{}/admin/logout", API_BASE_URL);

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    log::info!("👋 Sesión cerrada en el backend");
    Ok(())
}
