//! Smoke tests que necesitan un navegador real (localStorage, DOM).
//! Se corren con `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use bingo_admin::components::lines_grid::LinesGridProps;
use bingo_admin::components::LinesGrid;
use bingo_admin::models::{Purchase, PurchaseState, PurchaseUser};
use bingo_admin::utils::{clear_token, load_token, save_token};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use yew::{Callback, NodeRef};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn token_round_trips_through_local_storage() {
    let _ = clear_token();
    assert!(load_token().is_none());

    save_token("tok-abc123").expect("guardar token");
    assert_eq!(load_token().as_deref(), Some("tok-abc123"));

    clear_token().expect("limpiar token");
    assert!(load_token().is_none());
}

#[wasm_bindgen_test]
async fn grid_mounts_with_total_lines_by_max_purchases_cells() {
    let document = web_sys::window().unwrap().document().unwrap();
    let mount = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&mount).unwrap();

    let props = LinesGridProps {
        total_lines: "3".to_string(),
        max_purchases_per_line: "2".to_string(),
        lines: vec![Purchase {
            id: 1,
            line_id: 1,
            column: 0,
            state: PurchaseState::Requested,
            user: PurchaseUser {
                id: 10,
                name: "Ana".to_string(),
            },
        }],
        selected: Vec::new(),
        on_toggle: Callback::noop(),
        lines_ref: NodeRef::default(),
    };

    yew::Renderer::<LinesGrid>::with_root_and_props(mount.clone(), props).render();

    // Dejar que el scheduler de yew pinte
    TimeoutFuture::new(50).await;

    let rows = mount.query_selector_all("ul.lines > li").unwrap();
    assert_eq!(rows.length(), 3);

    let cells = mount.query_selector_all("ul.users > li").unwrap();
    assert_eq!(cells.length(), 6);

    let occupied = mount.query_selector_all("ul.users > li.requested").unwrap();
    assert_eq!(occupied.length(), 1);

    let free = mount.query_selector_all("ul.users > li.available").unwrap();
    assert_eq!(free.length(), 5);
}
