pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod hooks;
pub mod observer;
pub mod pages;
pub mod signals;
pub mod state;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use pages::landing::Landing;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::NotFound => {
            log::debug!("Unknown path, showing landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
