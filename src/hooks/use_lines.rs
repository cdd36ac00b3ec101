use web_sys::window;
use yew::prelude::*;

use crate::models::{LineStateUpdate, Purchase, PurchaseState};
use crate::services::{bingo_service, lines_service};

/// Compra que ocupa la celda (línea, columna), si existe.
/// La celda se resuelve siempre por el par explícito, nunca por la
/// posición del registro dentro de la lista.
pub fn purchase_at(purchases: &[Purchase], line_id: u32, column: u32) -> Option<&Purchase> {
    purchases
        .iter()
        .find(|p| p.line_id == line_id && p.column == column)
}

/// Reescribe el estado de exactamente las compras listadas.
pub fn apply_state_change(
    purchases: &[Purchase],
    ids: &[u64],
    new_state: PurchaseState,
) -> Vec<Purchase> {
    purchases
        .iter()
        .map(|p| {
            if ids.contains(&p.id) {
                let mut updated = p.clone();
                updated.state = new_state;
                updated
            } else {
                p.clone()
            }
        })
        .collect()
}

/// Elimina las compras anuladas; sus celdas quedan disponibles.
pub fn remove_purchases(purchases: &[Purchase], ids: &[u64]) -> Vec<Purchase> {
    purchases
        .iter()
        .filter(|p| !ids.contains(&p.id))
        .cloned()
        .collect()
}

pub fn is_selected(selected: &[Purchase], id: u64) -> bool {
    selected.iter().any(|s| s.id == id)
}

/// Agrega la compra a la selección si no está, la quita si ya está.
pub fn toggled(selected: &[Purchase], purchase: &Purchase) -> Vec<Purchase> {
    if is_selected(selected, purchase.id) {
        selected.iter().filter(|s| s.id != purchase.id).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(purchase.clone());
        next
    }
}

pub struct UseLinesHandle {
    pub lines: UseStateHandle<Vec<Purchase>>,
    pub selected: UseStateHandle<Vec<Purchase>>,
    pub toggle_select: Callback<Purchase>,
    pub clear_selection: Callback<()>,
    pub confirm_state_change: Callback<PurchaseState>,
    pub reset: Callback<()>,
}

/// Motor de grilla y selección: lista autoritativa de compras,
/// selección local y transiciones de estado en lote.
/// Lo local se muta recién después de la confirmación del servidor.
#[hook]
pub fn use_lines(is_logged_in: bool, token: Option<String>) -> UseLinesHandle {
    let lines = use_state(Vec::<Purchase>::new);
    let selected = use_state(Vec::<Purchase>::new);

    // Fetch al loguearse, limpiar al desloguearse
    {
        let lines = lines.clone();
        let selected = selected.clone();
        let token = token.clone();
        use_effect_with(is_logged_in, move |logged_in| {
            if *logged_in {
                if let Some(token) = token {
                    wasm_bindgen_futures::spawn_local(async move {
                        match lines_service::get_current_lines(&token).await {
                            Ok(purchases) => {
                                lines.set(purchases);
                            }
                            Err(e) => {
                                log::error!("❌ Error cargando las líneas: {}", e);
                                lines.set(Vec::new());
                                if let Some(win) = window() {
                                    let _ = win.alert_with_message(
                                        "An error occurred while fetching current lines.",
                                    );
                                }
                            }
                        }
                    });
                }
            } else {
                lines.set(Vec::new());
                selected.set(Vec::new());
            }
            || ()
        });
    }

    let toggle_select = {
        let selected = selected.clone();
        Callback::from(move |purchase: Purchase| {
            selected.set(toggled(&selected, &purchase));
        })
    };

    let clear_selection = {
        let selected = selected.clone();
        Callback::from(move |_| {
            selected.set(Vec::new());
        })
    };

    // Transición en lote sobre toda la selección.
    // "available" anula las compras (la celda queda libre); cualquier
    // otro estado se reescribe en su lugar.
    let confirm_state_change = {
        let lines = lines.clone();
        let selected = selected.clone();
        let token = token.clone();
        Callback::from(move |new_state: PurchaseState| {
            if selected.is_empty() {
                return;
            }
            let Some(token) = token.clone() else {
                return;
            };

            let lines = lines.clone();
            let selected = selected.clone();
            let current_lines = (*lines).clone();
            let ids: Vec<u64> = selected.iter().map(|s| s.id).collect();

            wasm_bindgen_futures::spawn_local(async move {
                if new_state == PurchaseState::Available {
                    match lines_service::cancel_line_purchases(&token, &ids).await {
                        Ok(()) => {
                            lines.set(remove_purchases(&current_lines, &ids));
                            selected.set(Vec::new());
                        }
                        Err(e) => {
                            // La selección queda intacta para reintentar
                            log::error!("❌ Error anulando compras: {}", e);
                            if let Some(win) = window() {
                                let _ = win.alert_with_message(
                                    "An error occurred while cancelling line.",
                                );
                            }
                        }
                    }
                    return;
                }

                let updates: Vec<LineStateUpdate> = ids
                    .iter()
                    .map(|&id| LineStateUpdate {
                        id,
                        state: new_state,
                    })
                    .collect();

                match lines_service::update_line_states(&token, &updates).await {
                    Ok(()) => {
                        lines.set(apply_state_change(&current_lines, &ids, new_state));
                        selected.set(Vec::new());
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando compras: {}", e);
                        if let Some(win) = window() {
                            let _ =
                                win.alert_with_message("An error occurred while updating line.");
                        }
                    }
                }
            });
        })
    };

    let reset = {
        let lines = lines.clone();
        Callback::from(move |_| {
            let Some(token) = token.clone() else {
                return;
            };
            let lines = lines.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match bingo_service::reset_lines(&token).await {
                    Ok(()) => {
                        lines.set(Vec::new());
                    }
                    Err(e) => {
                        log::error!("❌ Error reiniciando líneas: {}", e);
                        if let Some(win) = window() {
                            let _ = win
                                .alert_with_message("An error occurred while resetting lines.");
                        }
                    }
                }
            });
        })
    };

    UseLinesHandle {
        lines,
        selected,
        toggle_select,
        clear_selection,
        confirm_state_change,
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PurchaseUser;

    fn purchase(id: u64, line_id: u32, column: u32, state: PurchaseState, name: &str) -> Purchase {
        Purchase {
            id,
            line_id,
            column,
            state,
            user: PurchaseUser {
                id: id * 10,
                name: name.to_string(),
            },
        }
    }

    #[test]
    fn cell_lookup_uses_the_explicit_pair() {
        // Registros fuera de orden a propósito: la posición no importa
        let purchases = vec![
            purchase(2, 1, 1, PurchaseState::Purchased, "Bea"),
            purchase(1, 1, 0, PurchaseState::Requested, "Ana"),
            purchase(3, 2, 0, PurchaseState::Requested, "Carlos"),
        ];

        assert_eq!(purchase_at(&purchases, 1, 0).unwrap().id, 1);
        assert_eq!(purchase_at(&purchases, 1, 1).unwrap().id, 2);
        assert_eq!(purchase_at(&purchases, 2, 0).unwrap().id, 3);
        assert!(purchase_at(&purchases, 2, 1).is_none());
        assert!(purchase_at(&purchases, 3, 0).is_none());
    }

    #[test]
    fn grid_has_total_lines_by_max_purchases_cells() {
        let purchases = vec![purchase(1, 1, 0, PurchaseState::Requested, "Ana")];
        let total_lines = 3u32;
        let max_per_line = 2u32;

        let mut occupied = 0;
        let mut cells = 0;
        for line_id in 1..=total_lines {
            for column in 0..max_per_line {
                cells += 1;
                if purchase_at(&purchases, line_id, column).is_some() {
                    occupied += 1;
                }
            }
        }
        assert_eq!(cells, 6);
        assert_eq!(occupied, 1);
    }

    #[test]
    fn toggle_is_an_idempotent_pair() {
        let p = purchase(1, 1, 0, PurchaseState::Requested, "Ana");

        let once = toggled(&[], &p);
        assert_eq!(once.len(), 1);
        assert!(is_selected(&once, 1));

        let twice = toggled(&once, &p);
        assert!(twice.is_empty());
    }

    #[test]
    fn toggle_only_touches_the_given_purchase() {
        let a = purchase(1, 1, 0, PurchaseState::Requested, "Ana");
        let b = purchase(2, 2, 0, PurchaseState::Purchased, "Bea");

        let selection = toggled(&toggled(&[], &a), &b);
        assert_eq!(selection.len(), 2);

        let after = toggled(&selection, &a);
        assert_eq!(after.len(), 1);
        assert!(is_selected(&after, 2));
        assert!(!is_selected(&after, 1));
    }

    #[test]
    fn state_change_updates_exactly_the_listed_ids() {
        let purchases = vec![
            purchase(1, 1, 0, PurchaseState::Requested, "Ana"),
            purchase(2, 1, 1, PurchaseState::Requested, "Bea"),
            purchase(3, 2, 0, PurchaseState::Requested, "Carlos"),
        ];

        let updated = apply_state_change(&purchases, &[1, 3], PurchaseState::Purchased);
        assert_eq!(updated[0].state, PurchaseState::Purchased);
        assert_eq!(updated[1].state, PurchaseState::Requested);
        assert_eq!(updated[2].state, PurchaseState::Purchased);
        assert_eq!(updated.len(), 3);
    }

    #[test]
    fn cancelling_removes_the_purchases_entirely() {
        let purchases = vec![
            purchase(1, 1, 0, PurchaseState::Purchased, "Ana"),
            purchase(2, 1, 1, PurchaseState::Requested, "Bea"),
        ];

        let remaining = remove_purchases(&purchases, &[1]);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        // La celda anulada queda disponible
        assert!(purchase_at(&remaining, 1, 0).is_none());
    }

    #[test]
    fn full_transition_scenario() {
        // totalLines=3, maxPurchasesPerLine=2, una compra reservada
        let mut purchases = vec![purchase(1, 1, 0, PurchaseState::Requested, "Ana")];
        assert_eq!(
            purchase_at(&purchases, 1, 0).unwrap().state,
            PurchaseState::Requested
        );
        assert!(purchase_at(&purchases, 1, 1).is_none());

        // Confirmar "purchased" sobre la selección {1}
        purchases = apply_state_change(&purchases, &[1], PurchaseState::Purchased);
        assert_eq!(
            purchase_at(&purchases, 1, 0).unwrap().state,
            PurchaseState::Purchased
        );

        // Confirmar "available": la compra desaparece de la grilla
        purchases = remove_purchases(&purchases, &[1]);
        assert!(purchases.is_empty());
        for line_id in 1..=3 {
            for column in 0..2 {
                assert!(purchase_at(&purchases, line_id, column).is_none());
            }
        }
    }
}
