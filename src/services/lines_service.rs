use gloo_net::http::Request;

use crate::models::{LineStateUpdate, Purchase};
use crate::services::error::ApiError;
use crate::utils::API_BASE_URL;

/// Obtiene todos los registros de compra vigentes.
pub async fn get_current_lines(token: &str) -> Result<Vec<Purchase>, ApiError> {
    let url = format!("{}/lines/current/admin", API_BASE_URL);

    let response = Request::get(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let purchases = response
        .json::<Vec<Purchase>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;

    log::info!("📋 Compras obtenidas: {}", purchases.len());

    Ok(purchases)
}

/// Cambia el estado de varias compras en una sola llamada.
/// El lote es todo-o-nada desde el punto de vista del cliente.
pub async fn update_line_states(
    token: &str,
    updates: &[LineStateUpdate],
) -> Result<(), ApiError> {
    let url = format!("{}/lines/update", API_BASE_URL);

    log::info!("✏️ Actualizando estado de {} compras", updates.len());

    let response = Request::post(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(&updates)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    Ok(())
}

/// Anula varias compras en una sola llamada; las celdas quedan disponibles.
pub async fn cancel_line_purchases(token: &str, ids: &[u64]) -> Result<(), ApiError> {
    let url = format!("{}/lines", API_BASE_URL);

    log::info!("🗑️ Anulando {} compras", ids.len());

    let response = Request::delete(&url)
        .header("Authorization", &format!("Bearer {}", token))
        .json(&ids)
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await?;

    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    Ok(())
}
