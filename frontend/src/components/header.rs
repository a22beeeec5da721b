use std::rc::Rc;

use serde::{Deserialize, Serialize};
use startup_stories_shared::view::{UserMenu, UserMenuAction};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth_context::{self, AuthContext},
    hooks::{use_pointer_down, use_scroll_to_top},
    i18n::current::header as t,
    router::Route,
    utils::bind_input,
};

#[derive(Debug, Deserialize)]
struct HeaderSearchQuery {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct HeaderSearchParams {
    q: String,
}

/// Reducer wrapper so the document listener always sees the latest menu state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct MenuState(UserMenu);

impl Reducible for MenuState {
    type Action = UserMenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(MenuState(next))
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let location = use_location();
    let menu = use_reducer(MenuState::default);
    let menu_ref = use_node_ref();
    use_scroll_to_top();

    let initial_query = location
        .as_ref()
        .and_then(|loc| loc.query::<HeaderSearchQuery>().ok())
        .and_then(|query| query.q)
        .unwrap_or_default();
    let search_query = use_state(|| initial_query);

    {
        let dispatcher = menu.dispatcher();
        use_pointer_down(
            menu_ref.clone(),
            Callback::from(move |inside: bool| {
                dispatcher.dispatch(UserMenuAction::PointerDown {
                    inside,
                })
            }),
        );
    }

    let on_search_input = bind_input(&search_query);

    let on_search_submit = {
        let search_query = search_query.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = (*search_query).trim().to_string();
            if query.is_empty() {
                return;
            }
            if let Some(nav) = navigator.as_ref() {
                let params = HeaderSearchParams {
                    q: query,
                };
                if let Err(err) = nav.push_with_query(&Route::CaseStudies, &params) {
                    web_sys::console::error_1(&format!("Failed to navigate to search: {}", err).into());
                }
            }
        })
    };

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(UserMenuAction::Toggle))
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(UserMenuAction::Close))
    };

    let on_sign_out = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(auth) = auth.clone() else {
                return;
            };
            let navigator = navigator.clone();
            let menu = menu.clone();
            wasm_bindgen_futures::spawn_local(async move {
                auth_context::sign_out(&auth).await;
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&Route::Home);
                }
                menu.dispatch(UserMenuAction::Close);
            });
        })
    };

    let signed_in = auth.as_ref().is_some_and(|auth| auth.user().is_some());
    let menu_open = menu.0.open;
    let menu_item_class = "flex items-center space-x-2 px-4 py-2 text-gray-700 hover:bg-gray-100";

    html! {
        <header class="bg-white border-b border-gray-200 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Home} classes="flex items-center space-x-2">
                        <div class="w-8 h-8 bg-gradient-to-br from-blue-600 to-purple-600 rounded-lg flex items-center justify-center">
                            <i class="fas fa-book-open text-white" aria-hidden="true"></i>
                        </div>
                        <span class="text-xl font-bold text-gray-900">{ t::BRAND_NAME }</span>
                    </Link<Route>>

                    <form onsubmit={on_search_submit} class="flex-1 max-w-lg mx-8" role="search">
                        <div class="relative">
                            <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-gray-400" aria-hidden="true"></i>
                            <input
                                type="text"
                                placeholder={t::SEARCH_PLACEHOLDER}
                                aria-label={t::SEARCH_ARIA}
                                value={(*search_query).clone()}
                                oninput={on_search_input}
                                class="w-full pl-10 pr-4 py-2 border border-gray-300 rounded-full focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent"
                            />
                        </div>
                    </form>

                    <nav class="flex items-center space-x-4" aria-label={t::NAV_MAIN_ARIA}>
                        <Link<Route> to={Route::CaseStudies} classes="text-gray-700 hover:text-gray-900 font-medium">
                            { t::NAV_CASE_STUDIES }
                        </Link<Route>>
                        {
                            if signed_in {
                                html! {
                                    <>
                                        <Link<Route>
                                            to={Route::Write}
                                            classes="flex items-center space-x-2 bg-blue-600 text-white px-4 py-2 rounded-full hover:bg-blue-700 transition-colors"
                                        >
                                            <i class="fas fa-pen-nib" aria-hidden="true"></i>
                                            <span>{ t::NAV_WRITE }</span>
                                        </Link<Route>>
                                        <div class="relative" ref={menu_ref.clone()}>
                                            <button
                                                type="button"
                                                onclick={toggle_menu}
                                                aria-haspopup="menu"
                                                aria-expanded={menu_open.to_string()}
                                                aria-label={t::USER_MENU_ARIA}
                                                class="flex items-center space-x-2 p-2 rounded-full hover:bg-gray-100 transition-colors"
                                            >
                                                <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-purple-500 rounded-full flex items-center justify-center">
                                                    <i class="fas fa-user text-white" aria-hidden="true"></i>
                                                </div>
                                            </button>
                                            {
                                                if menu_open {
                                                    html! {
                                                        <div class="absolute right-0 mt-2 w-48 bg-white rounded-lg shadow-lg border border-gray-200 py-1" role="menu">
                                                            <div onclick={close_menu.clone()}>
                                                                <Link<Route> to={Route::Profile} classes={menu_item_class}>
                                                                    <i class="fas fa-user" aria-hidden="true"></i>
                                                                    <span>{ t::MENU_PROFILE }</span>
                                                                </Link<Route>>
                                                            </div>
                                                            <div onclick={close_menu}>
                                                                <Link<Route> to={Route::Dashboard} classes={menu_item_class}>
                                                                    <i class="fas fa-gear" aria-hidden="true"></i>
                                                                    <span>{ t::MENU_DASHBOARD }</span>
                                                                </Link<Route>>
                                                            </div>
                                                            <button
                                                                type="button"
                                                                onclick={on_sign_out}
                                                                class={classes!(menu_item_class, "w-full", "text-left")}
                                                            >
                                                                <i class="fas fa-right-from-bracket" aria-hidden="true"></i>
                                                                <span>{ t::MENU_SIGN_OUT }</span>
                                                            </button>
                                                        </div>
                                                    }
                                                } else {
                                                    html! {}
                                                }
                                            }
                                        </div>
                                    </>
                                }
                            } else {
                                html! {
                                    <div class="flex items-center space-x-3">
                                        <Link<Route> to={Route::Login} classes="text-gray-700 hover:text-gray-900 font-medium">
                                            { t::SIGN_IN }
                                        </Link<Route>>
                                        <Link<Route>
                                            to={Route::Signup}
                                            classes="bg-blue-600 text-white px-4 py-2 rounded-full hover:bg-blue-700 transition-colors"
                                        >
                                            { t::GET_STARTED }
                                        </Link<Route>>
                                    </div>
                                }
                            }
                        }
                    </nav>
                </div>
            </div>
        </header>
    }
}
