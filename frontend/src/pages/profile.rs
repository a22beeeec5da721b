use startup_stories_shared::{
    view::{linkedin_url, twitter_url, ProfileForm},
    Profile,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    hooks::use_current_user,
    i18n::{current::profile as t, fill_one},
    router::Route,
    utils::alert,
};

type FieldSetter = fn(&mut ProfileForm, String);

/// Input handler that writes one field of the form.
fn bind_field(form: &UseStateHandle<ProfileForm>, set: FieldSetter) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            });
        if let Some(value) = value {
            let mut next = (*form).clone();
            set(&mut next, value);
            form.set(next);
        }
    })
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user = use_current_user();
    let navigator = use_navigator();
    let profile = use_state(|| None::<Profile>);
    let form = use_state(ProfileForm::default);
    let editing = use_state(|| false);
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    {
        let profile = profile.clone();
        let form = form.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let user_id = user.as_ref().map(|user| user.id.clone());
        use_effect_with(user_id, move |user_id| {
            match user_id.clone() {
                None => {
                    if let Some(nav) = navigator {
                        nav.push(&Route::Login);
                    }
                },
                Some(user_id) => {
                    loading.set(true);
                    wasm_bindgen_futures::spawn_local(async move {
                        match api::fetch_profile(&user_id).await {
                            Ok(data) => {
                                form.set(ProfileForm::from_profile(&data));
                                profile.set(Some(data));
                            },
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Failed to fetch profile: {}", e).into(),
                                );
                            },
                        }
                        loading.set(false);
                    });
                },
            }
            || ()
        });
    }

    let Some(user) = user else {
        return Html::default();
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };

    let on_cancel = {
        let profile = profile.clone();
        let form = form.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            let reset = (*profile)
                .as_ref()
                .map(ProfileForm::from_profile)
                .unwrap_or_default();
            form.set(reset);
            editing.set(false);
        })
    };

    let on_save = {
        let profile = profile.clone();
        let form = form.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let user_id = user.id.clone();
        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            let update = form.to_update(api::now_iso());
            let profile = profile.clone();
            let editing = editing.clone();
            let saving = saving.clone();
            let user_id = user_id.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_profile(&user_id, &update).await {
                    Ok(()) => {
                        profile.set(Some(Profile::after_save(
                            (*profile).clone(),
                            &user_id,
                            &update,
                        )));
                        editing.set(false);
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to update profile: {}", e).into());
                        alert(&fill_one(t::SAVE_FAILED_TEMPLATE, e.user_message()));
                    },
                }
                saving.set(false);
            });
        })
    };

    if *loading {
        return html! {
            <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} label={AttrValue::Static(t::LOADING)} />
        };
    }

    let button_class = "flex items-center space-x-2 px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors";
    let field_class = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500";
    let label_class = "block text-sm font-medium text-gray-700 mb-1";

    let actions = if *editing {
        html! {
            <div class="flex space-x-3">
                <button type="button" onclick={on_cancel} class={button_class}>
                    <i class="fas fa-xmark" aria-hidden="true"></i>
                    <span>{ t::CANCEL }</span>
                </button>
                <button
                    type="button"
                    onclick={on_save}
                    disabled={*saving}
                    class="flex items-center space-x-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors disabled:opacity-50"
                >
                    <i class="fas fa-floppy-disk" aria-hidden="true"></i>
                    <span>{ if *saving { t::SAVING } else { t::SAVE } }</span>
                </button>
            </div>
        }
    } else {
        html! {
            <button type="button" onclick={on_edit} class={button_class}>
                <i class="fas fa-pen-to-square" aria-hidden="true"></i>
                <span>{ t::EDIT }</span>
            </button>
        }
    };

    let body = if *editing {
        html! {
            <div class="space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <div>
                        <label class={label_class}>{ t::FULL_NAME_LABEL }</label>
                        <input
                            type="text"
                            value={form.full_name.clone()}
                            oninput={bind_field(&form, |f, v| f.full_name = v)}
                            class={field_class}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{ t::USERNAME_LABEL }</label>
                        <input
                            type="text"
                            value={form.username.clone()}
                            oninput={bind_field(&form, |f, v| f.username = v)}
                            class={field_class}
                        />
                    </div>
                </div>
                <div>
                    <label class={label_class}>{ t::BIO_LABEL }</label>
                    <textarea
                        value={form.bio.clone()}
                        oninput={bind_field(&form, |f, v| f.bio = v)}
                        rows="3"
                        placeholder={t::BIO_PLACEHOLDER}
                        class={field_class}
                    />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div>
                        <label class={label_class}>{ t::WEBSITE_LABEL }</label>
                        <input
                            type="url"
                            value={form.website.clone()}
                            oninput={bind_field(&form, |f, v| f.website = v)}
                            placeholder="https://..."
                            class={field_class}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{ t::TWITTER_LABEL }</label>
                        <input
                            type="text"
                            value={form.twitter.clone()}
                            oninput={bind_field(&form, |f, v| f.twitter = v)}
                            placeholder="@username"
                            class={field_class}
                        />
                    </div>
                    <div>
                        <label class={label_class}>{ t::LINKEDIN_LABEL }</label>
                        <input
                            type="text"
                            value={form.linkedin.clone()}
                            oninput={bind_field(&form, |f, v| f.linkedin = v)}
                            placeholder="linkedin.com/in/username"
                            class={field_class}
                        />
                    </div>
                </div>
            </div>
        }
    } else {
        render_profile_summary((*profile).as_ref(), user.email.as_deref())
    };

    html! {
        <div class="min-h-screen bg-gray-50 py-8">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden">
                    <div class="bg-gradient-to-r from-blue-600 to-purple-600 h-32"></div>
                    <div class="relative px-6 pb-6">
                        <div class="absolute -top-16 left-6">
                            <div class="w-32 h-32 bg-white rounded-full border-4 border-white shadow-lg flex items-center justify-center">
                                <div class="w-28 h-28 bg-gradient-to-br from-blue-500 to-purple-500 rounded-full flex items-center justify-center">
                                    <i class="fas fa-user text-white text-4xl" aria-hidden="true"></i>
                                </div>
                            </div>
                        </div>
                        <div class="pt-4 flex justify-end">{ actions }</div>
                        <div class="mt-8 ml-40">{ body }</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_profile_summary(profile: Option<&Profile>, email: Option<&str>) -> Html {
    let external = |href: String, icon: &'static str, label: &'static str| {
        html! {
            <a
                href={href}
                target="_blank"
                rel="noopener noreferrer"
                class="flex items-center space-x-2 hover:text-blue-600"
            >
                <i class={icon} aria-hidden="true"></i>
                <span>{ label }</span>
            </a>
        }
    };
    let present = |value: Option<&String>| value.filter(|v| !v.trim().is_empty()).cloned();

    let (name, username, bio) = match profile {
        Some(profile) => (
            profile.display_name().to_string(),
            profile.username.clone(),
            present(profile.bio.as_ref()),
        ),
        None => (String::new(), String::new(), None),
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{ name }</h1>
            <p class="text-gray-600 mb-4">{ format!("@{}", username) }</p>
            {
                match bio {
                    Some(bio) => html! { <p class="text-gray-700 mb-6">{ bio }</p> },
                    None => html! {},
                }
            }
            <div class="flex items-center space-x-6 text-sm text-gray-600">
                <div class="flex items-center space-x-2">
                    <i class="fas fa-envelope" aria-hidden="true"></i>
                    <span>{ email.unwrap_or_default() }</span>
                </div>
                {
                    present(profile.and_then(|p| p.website.as_ref()))
                        .map(|website| external(website, "fas fa-globe", t::WEBSITE_LABEL))
                        .unwrap_or_default()
                }
                {
                    present(profile.and_then(|p| p.twitter.as_ref()))
                        .map(|handle| external(twitter_url(&handle), "fab fa-twitter", t::TWITTER_LABEL))
                        .unwrap_or_default()
                }
                {
                    present(profile.and_then(|p| p.linkedin.as_ref()))
                        .map(|value| external(linkedin_url(&value), "fab fa-linkedin", t::LINKEDIN_LABEL))
                        .unwrap_or_default()
                }
            </div>
        </div>
    }
}
