use startup_stories_shared::config::{ANON_KEY_VAR, URL_VAR};
use yew::prelude::*;

use crate::i18n::current::config_error as t;

#[derive(Properties, Clone, PartialEq)]
pub struct ConfigErrorProps {
    pub message: String,
}

/// Rendered instead of the router when the backend settings are unusable.
#[function_component(ConfigErrorPage)]
pub fn config_error_page(props: &ConfigErrorProps) -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-lg w-full bg-white rounded-xl shadow-sm border border-red-200 p-8" role="alert">
                <h1 class="text-2xl font-bold text-gray-900 mb-4">{ t::TITLE }</h1>
                <p class="text-gray-700 mb-4">{ &props.message }</p>
                <p class="text-sm text-gray-600 mb-2">{ t::HINT }</p>
                <ul class="text-sm font-mono text-gray-800 bg-gray-50 rounded p-3 space-y-1">
                    <li>{ URL_VAR }</li>
                    <li>{ ANON_KEY_VAR }</li>
                </ul>
            </div>
        </div>
    }
}
