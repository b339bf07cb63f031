use log::info;
use yew::prelude::*;

mod config;
mod lifecycle;
mod nav;
mod particles;
mod reveal;
mod scroll;
mod components {
    pub mod about;
    pub mod call_to_action;
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod solutions;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
