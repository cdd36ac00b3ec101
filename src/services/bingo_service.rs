use gloo_net::http::Request;

use crate::models::BingoConfig;
use crate::services::error::ApiError;
use crate::utils::API_BASE_URL;

/// Obtiene la configuración actual del bingo.
pub async fn get_bingo_config(token: &str) -> Result<BingoConfig, ApiError> {
    let url = format!("{}/bingo/get/admin", API_BASE_URL);

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    response
        .json::<BingoConfig>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Sube la configuración completa al backend (upsert total, sin diffs).
pub async fn update_bingo_config(token: &str, config: &BingoConfig) -> Result<(), ApiError> {
    let url = format!("{}/bingo/update", API_BASE_URL);

    log::info!(
        "📝 Actualizando configuración del bingo: {} líneas, {} compras por línea",
        config.total_lines,
        config.max_purchases_per_line
    );

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(config)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    Ok(())
}

/// Reinicia el bingo: borra todas las compras de todas las líneas.
pub async fn reset_lines(token: &str) -> Result<(), ApiError> {
    let url = format!("{}/bingo/reset", API_BASE_URL);

    log::info!("🔄 Reiniciando todas las líneas");

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    Ok(())
}
