/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api (por defecto)
/// - Producción: via API_BASE_URL env var (.env)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Clave de localStorage donde se persiste el token de sesión.
pub const STORAGE_KEY_TOKEN: &str = "token";
