mod components;
mod hooks;
mod pages;
mod providers;
mod routes;
mod session;

use yew::prelude::*;
use yew_router::prelude::*;

use components::Nav;
use providers::SessionProvider;
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    amparo::log::setup().expect("Failed to setup logging");
    yew::Renderer::<App>::new().render();
}
