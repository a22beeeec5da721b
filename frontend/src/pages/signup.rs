use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth_context::{self, AuthContext, SignupForm, SignupOutcome},
    components::error_banner::ErrorBanner,
    i18n::current::signup as t,
    router::Route,
    utils::bind_input,
};

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let username = use_state(String::new);
    let full_name = use_state(String::new);
    let error = use_state(String::new);
    let notice = use_state(|| None::<&'static str>);
    let submitting = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let username = username.clone();
        let full_name = full_name.clone();
        let error = error.clone();
        let notice = notice.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let Some(auth) = auth.clone() else {
                return;
            };
            if username.trim().is_empty() {
                error.set(t::USERNAME_REQUIRED.to_string());
                return;
            }
            let form = SignupForm {
                email: (*email).clone(),
                password: (*password).clone(),
                username: (*username).clone(),
                full_name: (*full_name).clone(),
            };
            let navigator = navigator.clone();
            let error = error.clone();
            let notice = notice.clone();
            let submitting = submitting.clone();
            error.set(String::new());
            notice.set(None);
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match auth_context::sign_up(&auth, form).await {
                    Ok(SignupOutcome::SignedIn) => {
                        if let Some(nav) = navigator {
                            nav.push(&Route::Home);
                        }
                    },
                    Ok(SignupOutcome::ConfirmationPending) => notice.set(Some(t::CHECK_EMAIL)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Sign up failed: {}", e).into());
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
    let label_class = "block text-sm font-medium text-gray-700 mb-1";

    html! {
        <div class="min-h-[70vh] flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-sm border border-gray-200 p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold text-gray-900">{ t::TITLE }</h1>
                    <p class="text-gray-600 mt-2">{ t::SUBTITLE }</p>
                </div>
                <ErrorBanner message={(*error).clone()} on_close={on_error_close} />
                {
                    match *notice {
                        Some(text) => html! {
                            <div class="rounded-lg border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-700" role="status">
                                { text }
                            </div>
                        },
                        None => html! {},
                    }
                }
                <form onsubmit={on_submit} class="space-y-4">
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <div>
                            <label for="username" class={label_class}>{ t::USERNAME_LABEL }</label>
                            <input
                                type="text"
                                id="username"
                                autocomplete="username"
                                value={(*username).clone()}
                                oninput={bind_input(&username)}
                                class={field_class}
                                required=true
                            />
                        </div>
                        <div>
                            <label for="full-name" class={label_class}>{ t::FULL_NAME_LABEL }</label>
                            <input
                                type="text"
                                id="full-name"
                                autocomplete="name"
                                value={(*full_name).clone()}
                                oninput={bind_input(&full_name)}
                                class={field_class}
                            />
                        </div>
                    </div>
                    <div>
                        <label for="email" class={label_class}>{ t::EMAIL_LABEL }</label>
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
                        <label for="password" class={label_class}>{ t::PASSWORD_LABEL }</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="new-password"
                            minlength="6"
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
                    { t::HAVE_ACCOUNT }
                    { " " }
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:text-blue-700 font-medium">
                        { t::LOGIN_LINK }
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
