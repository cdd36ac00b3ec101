use bingo_admin::components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🎱 Bingo Admin iniciando...");

    yew::Renderer::<App>::new().render();
}
