use yew::prelude::*;

use super::{BingoInfoForm, ChangeStateModal, LinesGrid, LinesMenu};
use crate::hooks::{use_bingo_config, use_lines};
use crate::models::Purchase;

#[derive(Properties, PartialEq)]
pub struct ControlPanelProps {
    pub is_logged_in: bool,
    pub token: Option<String>,
    pub on_logout: Callback<()>,
}

/// El modal queda abierto mientras la transición no prospere: el motor
/// vacía la selección recién en la rama de éxito, así que un lote
/// fallido deja el modal en pantalla para reintentar.
fn confirm_modal_visible(is_confirm_open: bool, selected: &[Purchase]) -> bool {
    is_confirm_open && !selected.is_empty()
}

#[function_component(ControlPanel)]
pub fn control_panel(props: &ControlPanelProps) -> Html {
    let config = use_bingo_config(props.is_logged_in, props.token.clone());
    let engine = use_lines(props.is_logged_in, props.token.clone());

    let is_confirm_state_change = use_state(|| false);

    // Ref a la grilla: lo usan "Centrar" y la captura de pantalla
    let lines_ref = use_node_ref();

    // Cerrar el modal recién cuando la selección se vacía (éxito del
    // lote o cierre manual), nunca antes de conocer el resultado
    {
        let is_confirm_state_change = is_confirm_state_change.clone();
        use_effect_with(engine.selected.is_empty(), move |selection_empty| {
            if *selection_empty {
                is_confirm_state_change.set(false);
            }
            || ()
        });
    }

    let on_toggle = {
        let toggle_select = engine.toggle_select.clone();
        Callback::from(move |purchase: Purchase| {
            toggle_select.emit(purchase);
        })
    };

    let on_open_confirm = {
        let is_confirm_state_change = is_confirm_state_change.clone();
        Callback::from(move |_| {
            is_confirm_state_change.set(true);
        })
    };

    // Cerrar el modal descarta la selección
    let on_close_confirm = {
        let clear_selection = engine.clear_selection.clone();
        Callback::from(move |_| {
            clear_selection.emit(());
        })
    };

    let on_confirm = {
        let confirm_state_change = engine.confirm_state_change.clone();
        Callback::from(move |new_state| {
            confirm_state_change.emit(new_state);
        })
    };

    let on_reset = {
        let reset = engine.reset.clone();
        Callback::from(move |_| {
            reset.emit(());
        })
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_| {
            on_logout.emit(());
        })
    };

    html! {
        <section class="control-panel">
            <h1>{"Panel de control"}</h1>
            <BingoInfoForm
                fields={(*config.fields).clone()}
                set_max_lines_per_user={config.set_max_lines_per_user.clone()}
                set_max_purchases_per_line={config.set_max_purchases_per_line.clone()}
                set_line_price={config.set_line_price.clone()}
                set_total_lines={config.set_total_lines.clone()}
                set_active={config.set_active.clone()}
            />
            <LinesMenu lines_ref={lines_ref.clone()} />
            <LinesGrid
                total_lines={config.fields.total_lines.clone()}
                max_purchases_per_line={config.fields.max_purchases_per_line.clone()}
                lines={(*engine.lines).clone()}
                selected={(*engine.selected).clone()}
                on_toggle={on_toggle}
                lines_ref={lines_ref}
            />
            if !engine.selected.is_empty() {
                <div class="confirm-state-change-button-container">
                    <button
                        class="confirm-state-change-button"
                        onclick={on_open_confirm}
                    >
                        {"Cambiar Estado"}
                    </button>
                </div>
            }
            if confirm_modal_visible(*is_confirm_state_change, &engine.selected) {
                <ChangeStateModal
                    selected={(*engine.selected).clone()}
                    on_confirm={on_confirm}
                    on_close={on_close_confirm}
                />
            }
            <button class="lines-restart-button" onclick={on_reset}>
                {"Reiniciar líneas"}
            </button>
            <button class="logout-button" onclick={on_logout}>
                {"Cerrar Sesion"}
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PurchaseState, PurchaseUser};

    fn purchase(id: u64) -> Purchase {
        Purchase {
            id,
            line_id: 1,
            column: 0,
            state: PurchaseState::Requested,
            user: PurchaseUser {
                id: id * 10,
                name: format!("user-{}", id),
            },
        }
    }

    #[test]
    fn modal_stays_open_when_the_batch_fails() {
        // Tras un lote fallido el motor deja la selección intacta,
        // así que el modal sigue visible para reintentar
        let still_selected = vec![purchase(1), purchase(2)];
        assert!(confirm_modal_visible(true, &still_selected));
    }

    #[test]
    fn modal_closes_once_the_selection_empties() {
        // Éxito del lote o cierre manual: selección vacía, modal fuera
        assert!(!confirm_modal_visible(true, &[]));
    }

    #[test]
    fn modal_needs_an_explicit_open() {
        let selected = vec![purchase(1)];
        assert!(!confirm_modal_visible(false, &selected));
    }
}
