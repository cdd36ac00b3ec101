use yew::prelude::*;

use crate::hooks::{is_selected, purchase_at};
use crate::models::Purchase;

#[derive(Properties, PartialEq)]
pub struct LinesGridProps {
    /// Campos crudos del formulario; la grilla no renderiza filas
    /// mientras no parseen.
    pub total_lines: String,
    pub max_purchases_per_line: String,
    pub lines: Vec<Purchase>,
    pub selected: Vec<Purchase>,
    pub on_toggle: Callback<Purchase>,
    pub lines_ref: NodeRef,
}

#[function_component(LinesGrid)]
pub fn lines_grid(props: &LinesGridProps) -> Html {
    let total_lines: u32 = props.total_lines.trim().parse().unwrap_or(0);
    let max_per_line: u32 = props.max_purchases_per_line.trim().parse().unwrap_or(0);

    html! {
        <ul id="lines" class="lines" ref={props.lines_ref.clone()}>
            { for (1..=total_lines).map(|line_id| {
                html! {
                    <li key={line_id}>
                        <span>{format!("{}.", line_id)}</span>
                        <ul class="users">
                            { for (0..max_per_line).map(|column| {
                                match purchase_at(&props.lines, line_id, column) {
                                    Some(purchase) => {
                                        let selected = is_selected(&props.selected, purchase.id);
                                        let class = classes!(
                                            purchase.state.as_class(),
                                            selected.then_some("selected"),
                                        );
                                        let on_toggle = {
                                            let on_toggle = props.on_toggle.clone();
                                            let purchase = purchase.clone();
                                            Callback::from(move |_| {
                                                on_toggle.emit(purchase.clone());
                                            })
                                        };
                                        html! {
                                            <li key={column} class={class}>
                                                <button onclick={on_toggle}>
                                                    {purchase.user.name.clone()}
                                                </button>
                                            </li>
                                        }
                                    }
                                    None => html! {
                                        <li key={column} class="available">
                                            <button>{"Disponible"}</button>
                                        </li>
                                    },
                                }
                            }) }
                        </ul>
                    </li>
                }
            }) }
        </ul>
    }
}
