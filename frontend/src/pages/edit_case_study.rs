use startup_stories_shared::{
    view::{edit_access, EditAccess},
    CaseStudyUpdate,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    hooks::use_current_user,
    i18n::current::edit_case_study as t,
    router::Route,
    utils::{alert, bind_input, bind_textarea},
};

#[derive(Properties, Clone, PartialEq)]
pub struct EditCaseStudyProps {
    pub id: String,
}

#[function_component(EditCaseStudyPage)]
pub fn edit_case_study_page(props: &EditCaseStudyProps) -> Html {
    let user = use_current_user();
    let navigator = use_navigator();
    let title = use_state(String::new);
    let content = use_state(String::new);
    let loading = use_state(|| true);
    let saving = use_state(|| false);

    {
        let title = title.clone();
        let content = content.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        let user = user.clone();
        let user_id = user.as_ref().map(|user| user.id.clone());
        use_effect_with((props.id.clone(), user_id), move |(id, _)| {
            let id = id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let leave = match api::fetch_case_study(&id).await {
                    Ok(row) => match edit_access(user.as_ref(), &row) {
                        EditAccess::Allowed => {
                            title.set(row.title.clone());
                            content.set(row.content.clone().unwrap_or_default());
                            false
                        },
                        EditAccess::Redirect => true,
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch case study {}: {}", id, e).into(),
                        );
                        true
                    },
                };
                if leave {
                    if let Some(nav) = navigator {
                        nav.push(&Route::CaseStudies);
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_submit = {
        let id = props.id.clone();
        let title = title.clone();
        let content = content.clone();
        let saving = saving.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            let id = id.clone();
            let patch = CaseStudyUpdate::new(&title, &content, api::now_iso());
            let saving = saving.clone();
            let navigator = navigator.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::update_case_study(&id, &patch).await {
                    Ok(()) => {
                        if let Some(nav) = navigator {
                            nav.push(&Route::CaseStudyDetail {
                                id,
                            });
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to update case study {}: {}", id, e).into(),
                        );
                        alert(t::SAVE_FAILED);
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_cancel = {
        let id = props.id.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::CaseStudyDetail {
                    id: id.clone(),
                });
            }
        })
    };

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} /> };
    }

    let field_class = "w-full px-4 py-2 border border-gray-300 rounded-md focus:ring-blue-500 focus:border-blue-500";

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <h1 class="text-3xl font-bold mb-8">{ t::TITLE }</h1>
            <form onsubmit={on_submit} class="space-y-6">
                <div>
                    <label for="title" class="block text-sm font-medium text-gray-700 mb-2">{ t::TITLE_LABEL }</label>
                    <input
                        type="text"
                        id="title"
                        value={(*title).clone()}
                        oninput={bind_input(&title)}
                        class={field_class}
                        required=true
                    />
                </div>
                <div>
                    <label for="content" class="block text-sm font-medium text-gray-700 mb-2">{ t::CONTENT_LABEL }</label>
                    <textarea
                        id="content"
                        value={(*content).clone()}
                        oninput={bind_textarea(&content)}
                        rows="15"
                        class={field_class}
                        required=true
                    />
                </div>
                <div class="flex gap-4">
                    <button
                        type="submit"
                        disabled={*saving}
                        class="px-6 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors disabled:opacity-50"
                    >
                        { if *saving { t::SAVING } else { t::SAVE } }
                    </button>
                    <button
                        type="button"
                        onclick={on_cancel}
                        class="px-6 py-2 border border-gray-300 rounded-md hover:bg-gray-50 transition-colors"
                    >
                        { t::CANCEL }
                    </button>
                </div>
            </form>
        </div>
    }
}
