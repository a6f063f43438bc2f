use team6_landing::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting Team6 landing page");
    yew::Renderer::<App>::new().render();
}
