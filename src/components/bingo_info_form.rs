use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::BingoConfigFields;

#[derive(Properties, PartialEq)]
pub struct BingoInfoFormProps {
    pub fields: BingoConfigFields,
    pub set_max_lines_per_user: Callback<String>,
    pub set_max_purchases_per_line: Callback<String>,
    pub set_line_price: Callback<String>,
    pub set_total_lines: Callback<String>,
    pub set_active: Callback<bool>,
}

fn input_value(set: &Callback<String>) -> Callback<InputEvent> {
    let set = set.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        set.emit(input.value());
    })
}

#[function_component(BingoInfoForm)]
pub fn bingo_info_form(props: &BingoInfoFormProps) -> Html {
    let on_active_change = {
        let set_active = props.set_active.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_active.emit(input.checked());
        })
    };

    html! {
        <div class="bingo-info">
            <h2>{"Información del bingo"}</h2>
            <form class="bingo-form">
                <label>
                    {"Numero de lineas máximas por usuario:"}
                    <input
                        type="number"
                        value={props.fields.max_lines_per_user.clone()}
                        oninput={input_value(&props.set_max_lines_per_user)}
                    />
                </label>
                <label>
                    {"Cantidad de líneas:"}
                    <input
                        type="number"
                        value={props.fields.max_purchases_per_line.clone()}
                        oninput={input_value(&props.set_max_purchases_per_line)}
                    />
                </label>
                <label>
                    {"Precio por línea:"}
                    <input
                        type="number"
                        value={props.fields.line_price.clone()}
                        oninput={input_value(&props.set_line_price)}
                    />
                </label>
                <label>
                    {"Líneas totales:"}
                    <input
                        type="number"
                        value={props.fields.total_lines.clone()}
                        oninput={input_value(&props.set_total_lines)}
                    />
                </label>
                <label>
                    {"Estado de la página:"}
                    <div class="checkbox-container">
                        <input
                            type="checkbox"
                            checked={props.fields.active}
                            onchange={on_active_change}
                        />
                        {" "}
                        { if props.fields.active { "Activa" } else { "Inactiva" } }
                    </div>
                </label>
            </form>
        </div>
    }
}
