use web_sys::window;
use yew::prelude::*;

use crate::models::BingoConfig;
use crate::services::bingo_service;

/// Campos editables del formulario de configuración.
/// Los numéricos se mantienen como String: están vacíos mientras no
/// llega la configuración del servidor.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct BingoConfigFields {
    pub max_lines_per_user: String,
    pub max_purchases_per_line: String,
    pub line_price: String,
    pub total_lines: String,
    pub active: bool,
}

impl BingoConfigFields {
    pub fn from_config(config: &BingoConfig) -> Self {
        Self {
            max_lines_per_user: config.max_lines_per_user.to_string(),
            max_purchases_per_line: config.max_purchases_per_line.to_string(),
            line_price: config.line_price.to_string(),
            total_lines: config.total_lines.to_string(),
            active: config.active,
        }
    }

    /// `None` mientras algún campo numérico esté vacío o no parsee;
    /// en ese caso no se sube nada al backend.
    pub fn to_config(&self) -> Option<BingoConfig> {
        Some(BingoConfig {
            max_lines_per_user: self.max_lines_per_user.trim().parse().ok()?,
            max_purchases_per_line: self.max_purchases_per_line.trim().parse().ok()?,
            line_price: self.line_price.trim().parse().ok()?,
            total_lines: self.total_lines.trim().parse().ok()?,
            active: self.active,
        })
    }
}

pub struct UseBingoConfigHandle {
    pub fields: UseStateHandle<BingoConfigFields>,
    pub set_max_lines_per_user: Callback<String>,
    pub set_max_purchases_per_line: Callback<String>,
    pub set_line_price: Callback<String>,
    pub set_total_lines: Callback<String>,
    pub set_active: Callback<bool>,
}

/// Sincronización de la configuración del bingo con el backend:
/// fetch al autenticarse, push completo en cada edición posterior.
#[hook]
pub fn use_bingo_config(is_logged_in: bool, token: Option<String>) -> UseBingoConfigHandle {
    let fields = use_state(BingoConfigFields::default);

    // Ref para evitar el push en la primera renderización tras el fetch
    let is_first_update = use_mut_ref(|| true);

    // Fetch al loguearse, reset al desloguearse
    {
        let fields = fields.clone();
        let is_first_update = is_first_update.clone();
        let token = token.clone();
        use_effect_with(is_logged_in, move |logged_in| {
            if *logged_in {
                if let Some(token) = token {
                    wasm_bindgen_futures::spawn_local(async move {
                        match bingo_service::get_bingo_config(&token).await {
                            Ok(config) => {
                                log::info!("📋 Configuración del bingo cargada");
                                *is_first_update.borrow_mut() = true;
                                fields.set(BingoConfigFields::from_config(&config));
                            }
                            Err(e) => {
                                log::error!("❌ Error cargando configuración: {}", e);
                                if let Some(win) = window() {
                                    let _ = win.alert_with_message(
                                        "An error occurred while fetching bingo info.",
                                    );
                                }
                            }
                        }
                    });
                }
            } else {
                *is_first_update.borrow_mut() = true;
                fields.set(BingoConfigFields::default());
            }
            || ()
        });
    }

    // Push completo en cada cambio de campo (sin coalescing).
    // Se suprime mientras haya campos vacíos y en el primer cambio
    // posterior a la carga, que es el que dispara el propio fetch.
    {
        let token = token.clone();
        use_effect_with(((*fields).clone(), is_logged_in), move |(fields, logged_in)| {
            if *logged_in {
                if let Some(config) = fields.to_config() {
                    let first = *is_first_update.borrow();
                    if first {
                        *is_first_update.borrow_mut() = false;
                    } else if let Some(token) = token {
                        wasm_bindgen_futures::spawn_local(async move {
                            match bingo_service::update_bingo_config(&token, &config).await {
                                Ok(()) => {
                                    log::info!("✅ Configuración actualizada");
                                }
                                Err(e) => {
                                    // El valor local editado no se revierte
                                    log::error!("❌ Error actualizando configuración: {}", e);
                                    if let Some(win) = window() {
                                        let _ = win.alert_with_message(
                                            "An error occurred while updating bingo info.",
                                        );
                                    }
                                }
                            }
                        });
                    }
                }
            }
            || ()
        });
    }

    let set_max_lines_per_user = {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut current = (*fields).clone();
            current.max_lines_per_user = value;
            fields.set(current);
        })
    };

    let set_max_purchases_per_line = {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut current = (*fields).clone();
            current.max_purchases_per_line = value;
            fields.set(current);
        })
    };

    let set_line_price = {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut current = (*fields).clone();
            current.line_price = value;
            fields.set(current);
        })
    };

    let set_total_lines = {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut current = (*fields).clone();
            current.total_lines = value;
            fields.set(current);
        })
    };

    let set_active = {
        let fields = fields.clone();
        Callback::from(move |value: bool| {
            let mut current = (*fields).clone();
            current.active = value;
            fields.set(current);
        })
    };

    UseBingoConfigHandle {
        fields,
        set_max_lines_per_user,
        set_max_purchases_per_line,
        set_line_price,
        set_total_lines,
        set_active,
    }
}
