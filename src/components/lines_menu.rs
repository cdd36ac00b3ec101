use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::utils::capture_element;

#[derive(Properties, PartialEq)]
pub struct LinesMenuProps {
    pub lines_ref: NodeRef,
}

/// Menú de la grilla: centrado por scroll y captura de pantalla.
/// La captura es solo una exportación visual, no toca el modelo.
#[function_component(LinesMenu)]
pub fn lines_menu(props: &LinesMenuProps) -> Html {
    let screenshot_url = use_state(|| None::<String>);

    let on_center = {
        let lines_ref = props.lines_ref.clone();
        Callback::from(move |_| {
            if let Some(element) = lines_ref.cast::<Element>() {
                element.scroll_into_view();
            }
        })
    };

    let on_capture = {
        let screenshot_url = screenshot_url.clone();
        Callback::from(move |_| {
            let screenshot_url = screenshot_url.clone();
            let closure = Closure::wrap(Box::new(move |data_url: JsValue| {
                if let Some(url) = data_url.as_string() {
                    log::info!("📸 Captura de la grilla lista");
                    screenshot_url.set(Some(url));
                }
            }) as Box<dyn FnMut(JsValue)>);

            capture_element("lines", closure.as_ref().unchecked_ref());
            closure.forget();
        })
    };

    let on_download = {
        let screenshot_url = screenshot_url.clone();
        Callback::from(move |_| {
            screenshot_url.set(None);
        })
    };

    html! {
        <ul class="lines-menu">
            <li>
                <button class="center-lines-button" onclick={on_center}>
                    {"Centrar"}
                </button>
            </li>
            <li>
                <button class="take-screenshot-button" onclick={on_capture}>
                    {"Capturar pantalla"}
                </button>
            </li>
            if let Some(url) = (*screenshot_url).clone() {
                <li class="screenshot-container">
                    <a
                        href={url.clone()}
                        download="lines-screenshot.png"
                        onclick={on_download}
                    >
                        <h3>{"Descargar"}</h3>
                        <img src={url} alt="Captura de la grilla" />
                    </a>
                </li>
            }
        </ul>
    }
}
