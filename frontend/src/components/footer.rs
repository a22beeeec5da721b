use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::footer as t, router::Route};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-50 border-t border-gray-200 mt-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4">
                    <div class="flex items-center space-x-2">
                        <div class="w-6 h-6 bg-gradient-to-br from-blue-600 to-purple-600 rounded-md flex items-center justify-center">
                            <i class="fas fa-book-open text-white text-xs" aria-hidden="true"></i>
                        </div>
                        <span class="font-semibold text-gray-900">{ t::BRAND_NAME }</span>
                    </div>
                    <nav class="flex items-center space-x-6 text-sm text-gray-600" aria-label={t::NAV_ARIA}>
                        <Link<Route> to={Route::CaseStudies} classes="hover:text-gray-900">{ t::CASE_STUDIES }</Link<Route>>
                        <Link<Route> to={Route::Write} classes="hover:text-gray-900">{ t::SHARE_STORY }</Link<Route>>
                    </nav>
                    <p class="text-sm text-gray-500">{ t::TAGLINE }</p>
                </div>
            </div>
        </footer>
    }
}
