//! StartupStories browser application: case study publishing on top of a
//! hosted database and auth service.

mod api;
mod auth_context;
mod components;
mod hooks;
mod i18n;
mod pages;
mod router;
mod utils;

use startup_stories_shared::config::BackendConfig;
use yew::prelude::*;

use crate::{auth_context::AuthProvider, pages::config_error::ConfigErrorPage};

#[function_component(App)]
fn app() -> Html {
    html! {
        <AuthProvider>
            <router::AppRouter />
        </AuthProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    match BackendConfig::from_build_env() {
        Ok(config) => {
            api::install(config);
            yew::Renderer::<App>::new().render();
        },
        Err(e) => {
            web_sys::console::error_1(&format!("Startup aborted: {}", e).into());
            yew::Renderer::<ConfigErrorPage>::with_props(pages::config_error::ConfigErrorProps {
                message: e.to_string(),
            })
            .render();
        },
    }
}
