use bingo_admin::components::change_state_modal::ChangeStateModalProps;
use bingo_admin::components::lines_grid::LinesGridProps;
use bingo_admin::components::{ChangeStateModal, LinesGrid};
use bingo_admin::models::{Purchase, PurchaseState, PurchaseUser};
use futures::executor::block_on;
use yew::{Callback, LocalServerRenderer, NodeRef};

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

fn grid_props(lines: Vec<Purchase>, selected: Vec<Purchase>) -> LinesGridProps {
    LinesGridProps {
        total_lines: "3".to_string(),
        max_purchases_per_line: "2".to_string(),
        lines,
        selected,
        on_toggle: Callback::noop(),
        lines_ref: NodeRef::default(),
    }
}

#[test]
fn grid_renders_total_lines_rows_of_max_purchases_cells() {
    let props = grid_props(
        vec![purchase(1, 1, 0, PurchaseState::Requested, "Ana")],
        Vec::new(),
    );
    let html = block_on(LocalServerRenderer::<LinesGrid>::with_props(props).render());

    // 3 filas, 6 celdas: 1 ocupada por Ana y 5 disponibles
    assert_eq!(html.matches("class=\"users\"").count(), 3);
    assert_eq!(html.matches("Disponible").count(), 5);
    assert_eq!(html.matches("Ana").count(), 1);
    assert!(html.contains("requested"));
}

#[test]
fn grid_keys_cells_by_line_and_column() {
    // Registros desordenados: la celda sale del par (línea, columna)
    let props = grid_props(
        vec![
            purchase(2, 2, 1, PurchaseState::Purchased, "Bea"),
            purchase(1, 2, 0, PurchaseState::Requested, "Ana"),
        ],
        Vec::new(),
    );
    let html = block_on(LocalServerRenderer::<LinesGrid>::with_props(props).render());

    let ana = html.find("Ana").expect("Ana renderizada");
    let bea = html.find("Bea").expect("Bea renderizada");
    assert!(ana < bea, "la columna 0 se renderiza antes que la columna 1");
    assert_eq!(html.matches("Disponible").count(), 4);
}

#[test]
fn grid_marks_selected_cells() {
    let selected = purchase(1, 1, 0, PurchaseState::Requested, "Ana");
    let props = grid_props(vec![selected.clone()], vec![selected]);
    let html = block_on(LocalServerRenderer::<LinesGrid>::with_props(props).render());

    assert!(html.contains("requested selected"));
}

#[test]
fn grid_renders_no_rows_while_config_is_unparsed() {
    let mut props = grid_props(Vec::new(), Vec::new());
    props.total_lines = String::new();
    let html = block_on(LocalServerRenderer::<LinesGrid>::with_props(props).render());

    assert_eq!(html.matches("class=\"users\"").count(), 0);
    assert_eq!(html.matches("Disponible").count(), 0);
}

#[test]
fn modal_singular_summary_names_line_and_user() {
    let props = ChangeStateModalProps {
        selected: vec![purchase(1, 2, 0, PurchaseState::Requested, "Ana")],
        on_confirm: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChangeStateModal>::with_props(props).render());

    assert!(html.contains("Has seleccionado la línea 2 y al usuario Ana"));
}

#[test]
fn modal_plural_summary_lists_line_user_pairs() {
    let props = ChangeStateModalProps {
        selected: vec![
            purchase(1, 1, 0, PurchaseState::Requested, "Ana"),
            purchase(2, 3, 1, PurchaseState::Purchased, "Bea"),
        ],
        on_confirm: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChangeStateModal>::with_props(props).render());

    assert!(html.contains("(1, Ana)"));
    assert!(html.contains("(3, Bea)"));
}

#[test]
fn modal_offers_the_three_transitions() {
    let props = ChangeStateModalProps {
        selected: vec![purchase(1, 1, 0, PurchaseState::Requested, "Ana")],
        on_confirm: Callback::noop(),
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ChangeStateModal>::with_props(props).render());

    assert!(html.contains("Marcar como pagada"));
    assert!(html.contains("Marcar como reservada"));
    assert!(html.contains("Anular compra"));
}
