use thiserror::Error;

/// Error normalizado de cualquier llamada al backend.
/// Toda falla remota cae en una de estas tres categorías; ninguna
/// se propaga como panic hasta la capa de render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Falla de transporte (red caída, DNS, CORS...).
    #[error("Error de red: {0}")]
    Network(String),
    /// Respuesta HTTP con status no exitoso.
    #[error("HTTP {0}")]
    Http(u16),
    /// El cuerpo JSON no se pudo interpretar.
    #[error("Error interpretando la respuesta: {0}")]
    Parse(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_category() {
        assert_eq!(ApiError::Http(500).to_string(), "HTTP 500");
        assert!(ApiError::Network("timeout".into())
            .to_string()
            .contains("timeout"));
    }
}
