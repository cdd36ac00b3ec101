use yew::prelude::*;

use crate::models::{Purchase, PurchaseState};

#[derive(Properties, PartialEq)]
pub struct ChangeStateModalProps {
    pub selected: Vec<Purchase>,
    pub on_confirm: Callback<PurchaseState>,
    pub on_close: Callback<()>,
}

#[function_component(ChangeStateModal)]
pub fn change_state_modal(props: &ChangeStateModalProps) -> Html {
    let summary = if props.selected.len() == 1 {
        let purchase = &props.selected[0];
        format!(
            "Has seleccionado la línea {} y al usuario {}",
            purchase.line_id, purchase.user.name
        )
    } else {
        let pairs: Vec<String> = props
            .selected
            .iter()
            .map(|s| format!("({}, {})", s.line_id, s.user.name))
            .collect();
        format!(
            "Has seleccionado los siguientes registros (linea, usuario): {}",
            pairs.join(", ")
        )
    };

    let confirm = |state: PurchaseState| {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(state))
    };

    html! {
        <div class="change-state-modal">
            <span class="close" onclick={props.on_close.reform(|_| ())}>
                {"×"}
            </span>
            <p>{summary}</p>
            <ul>
                <li>
                    <button onclick={confirm(PurchaseState::Purchased)}>
                        {"Marcar como pagada"}
                    </button>
                </li>
                <li>
                    <button onclick={confirm(PurchaseState::Requested)}>
                        {"Marcar como reservada"}
                    </button>
                </li>
                <li>
                    <button onclick={confirm(PurchaseState::Available)}>
                        {"Anular compra"}
                    </button>
                </li>
            </ul>
        </div>
    }
}
