use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-[60vh] flex items-center justify-center px-4">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-900 mb-4">{ "404" }</h1>
                <h2 class="text-2xl font-semibold text-gray-800 mb-2">{ t::TITLE }</h2>
                <p class="text-gray-600 mb-8">{ t::BODY }</p>
                <Link<Route>
                    to={Route::Home}
                    classes="inline-flex items-center space-x-2 bg-blue-600 text-white px-6 py-3 rounded-full font-semibold hover:bg-blue-700 transition-colors"
                >
                    <i class="fas fa-house" aria-hidden="true"></i>
                    <span>{ t::BACK_HOME }</span>
                </Link<Route>>
            </div>
        </div>
    }
}
