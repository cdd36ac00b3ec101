use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<(String, String)>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Por favor, completa todos los campos");
                    }
                    return;
                }

                on_login.emit((email, password));
            }
        })
    };

    html! {
        <section class="login">
            <h1>{"Iniciar Sesión"}</h1>
            <form class="login-form" onsubmit={on_submit}>
                <label for="email">{"Correo:"}</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    ref={email_ref}
                    required=true
                />
                <label for="password">{"Contraseña:"}</label>
                <input
                    type="password"
                    id="password"
                    name="password"
                    ref={password_ref}
                    required=true
                />
                <button type="submit">{"Iniciar Sesión"}</button>
            </form>
        </section>
    }
}
