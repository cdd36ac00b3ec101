use web_sys::window;
use yew::prelude::*;

use crate::services::auth_service;
use crate::utils::{clear_token, load_token, save_token};

/// Estado de sesión compartido con el resto de la app.
/// El token vive acá, no en lecturas sueltas de localStorage.
#[derive(Clone, PartialEq)]
pub struct AuthState {
    pub is_logged_in: bool,
    pub token: Option<String>,
}

pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let state = use_state(|| AuthState {
        is_logged_in: false,
        token: None,
    });

    // Check login status on mount
    // Un token persistido se asume válido hasta que una llamada falle.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Some(token) = load_token() {
                log::info!("✅ Token encontrado, sesión restaurada");
                state.set(AuthState {
                    is_logged_in: true,
                    token: Some(token),
                });
            }
            || ()
        });
    }

    // Login callback
    let login = {
        let state = state.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::login(&email, &password).await {
                    Ok(response) => {
                        if let Err(e) = save_token(&response.token) {
                            log::error!("❌ Error guardando token: {}", e);
                        }
                        log::info!("✅ Login exitoso: {}", email);
                        state.set(AuthState {
                            is_logged_in: true,
                            token: Some(response.token),
                        });
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("An error occurred during login.");
                        }
                    }
                }
            });
        })
    };

    // Logout callback
    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            let Some(token) = current.token else {
                // Sin token no hay nada que invalidar
                state.set(AuthState {
                    is_logged_in: false,
                    token: None,
                });
                return;
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth_service::logout(&token).await {
                    Ok(()) => {
                        let _ = clear_token();
                        log::info!("👋 Logout");
                        state.set(AuthState {
                            is_logged_in: false,
                            token: None,
                        });
                    }
                    Err(e) => {
                        // El token queda como está; la sesión sigue viva
                        log::error!("❌ Error en logout: {}", e);
                        if let Some(win) = window() {
                            let _ = win.alert_with_message("An error occurred during logout.");
                        }
                    }
                }
            });
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
    }
}
