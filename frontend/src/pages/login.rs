use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth_context::{self, AuthContext},
    components::error_banner::ErrorBanner,
    i18n::current::login as t,
    router::Route,
    utils::bind_input,
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    let submitting = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let Some(auth) = auth.clone() else {
                return;
            };
            let navigator = navigator.clone();
            let email = (*email).clone();
            let password = (*password).clone();
            let error = error.clone();
            let submitting = submitting.clone();
            error.set(String::new());
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_context::sign_in(&auth, &email, &password).await {
                    Ok(()) => {
                        if let Some(nav) = navigator {
                            nav.push(&Route::Home);
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Sign in failed: {}", e).into());
                        error.set(e.user_message());
                    },
                }
                submitting.set(false);
            });
        })
    };

    let on_error_close = {
        let error = error.clone();
        Callback::from(move |_: ()| error.set(String::new()))
    };

    let field_class = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";

    html! {
        <div class="min-h-[70vh] flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-sm border border-gray-200 p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-gray-900">{ t::TITLE }</h1>
                    <p class="text-gray-600 mt-2">{ t::SUBTITLE }</p>
                </div>
                <ErrorBanner message={(*error).clone()} on_close={on_error_close} />
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label for="email" class="block text-sm font-medium text-gray-700 mb-1">{ t::EMAIL_LABEL }</label>
                        <input
                            type="email"
                            id="email"
                            autocomplete="email"
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                            class={field_class}
                            required=true
                        />
                    </div>
                    <div>
                        <label for="password" class="block text-sm font-medium text-gray-700 mb-1">{ t::PASSWORD_LABEL }</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                            class={field_class}
                            required=true
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={*submitting}
                        class="w-full bg-blue-600 text-white py-2 rounded-lg font-semibold hover:bg-blue-700 transition-colors disabled:opacity-50"
                    >
                        { if *submitting { t::SUBMITTING } else { t::SUBMIT } }
                    </button>
                </form>
                <p class="text-center text-sm text-gray-600">
                    { t::NO_ACCOUNT }
                    { " " }
                    <Link<Route> to={Route::Signup} classes="text-blue-600 hover:text-blue-700 font-medium">
                        { t::SIGNUP_LINK }
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
