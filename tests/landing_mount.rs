#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use team6_landing::hooks::PageEnvironment;
use team6_landing::pages::landing::Landing;
use team6_landing::signals::ManualSignals;
use wasm_bindgen_test::*;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Properties, PartialEq)]
struct HarnessProps {
    environment: PageEnvironment,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    html! {
        <ContextProvider<PageEnvironment> context={props.environment.clone()}>
            <Landing />
        </ContextProvider<PageEnvironment>>
    }
}

async fn settle() {
    TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
async fn mounted_page_follows_signals_and_releases_them() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let signals = ManualSignals::new();
    let (environment, reveal) =
        PageEnvironment::manual(signals.clone(), vec!["stats".to_string(), "cta".to_string()]);
    let app = yew::Renderer::<Harness>::with_root_and_props(root.clone(), HarnessProps { environment })
        .render();
    settle().await;

    assert_eq!(signals.subscriber_count(), 2);
    assert!(reveal.is_connected());

    signals.scroll_to(500.0);
    signals.move_pointer(300.0, 400.0);
    reveal.report(&[("cta", true)]);
    settle().await;

    let hero = root.query_selector(".hero-content").unwrap().unwrap();
    assert_eq!(
        hero.get_attribute("style").as_deref(),
        Some("transform: translateY(100px);")
    );
    let background = root.query_selector(".dynamic-background").unwrap().unwrap();
    assert!(background.get_attribute("style").unwrap().contains("300px 400px"));
    let cta = document.get_element_by_id("cta").unwrap();
    assert!(cta.class_list().contains("visible"));
    assert!(!document.get_element_by_id("stats").unwrap().class_list().contains("visible"));

    app.destroy();
    settle().await;

    assert_eq!(signals.subscriber_count(), 0);
    assert!(!reveal.is_connected());
    signals.scroll_to(10.0);
    reveal.report(&[("cta", false)]);
}
