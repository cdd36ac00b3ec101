use web_sys::{window, Storage};

use crate::utils::constants::STORAGE_KEY_TOKEN;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Token persistido, o `None` si no hay sesión guardada.
/// El token se guarda como string plano, no como JSON.
pub fn load_token() -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(STORAGE_KEY_TOKEN).ok()?
}

pub fn save_token(token: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(STORAGE_KEY_TOKEN, token)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn clear_token() -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(STORAGE_KEY_TOKEN)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}
