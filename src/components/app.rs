use yew::prelude::*;

use super::{ControlPanel, LoginScreen};
use crate::hooks::use_auth;

#[function_component(App)]
pub fn app() -> Html {
    let auth = use_auth();

    if auth.state.is_logged_in {
        html! {
            <ControlPanel
                is_logged_in={auth.state.is_logged_in}
                token={auth.state.token.clone()}
                on_logout={auth.logout}
            />
        }
    } else {
        html! {
            <LoginScreen on_login={auth.login} />
        }
    }
}
