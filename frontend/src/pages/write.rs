use startup_stories_shared::{CaseStudyDraft, Category};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    hooks::use_current_user,
    i18n::{current::write as t, fill_one},
    router::Route,
    utils::{alert, bind_input, bind_textarea, select_value},
};

#[function_component(WritePage)]
pub fn write_page() -> Html {
    let user = use_current_user();
    let navigator = use_navigator();

    let title = use_state(String::new);
    let excerpt = use_state(String::new);
    let content = use_state(String::new);
    let cover_image = use_state(String::new);
    let category_id = use_state(String::new);
    let tags = use_state(String::new);
    let categories = use_state(Vec::<Category>::new);
    let saving = use_state(|| false);
    let cover_broken = use_state(|| false);

    {
        let categories = categories.clone();
        let navigator = navigator.clone();
        let signed_in = user.is_some();
        use_effect_with(signed_in, move |signed_in| {
            if !*signed_in {
                if let Some(nav) = navigator {
                    nav.push(&Route::Login);
                }
            } else {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_categories().await {
                        Ok(data) => categories.set(data),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch categories: {}", e).into(),
                            );
                        },
                    }
                });
            }
            || ()
        });
    }

    {
        let cover_broken = cover_broken.clone();
        use_effect_with((*cover_image).clone(), move |_| {
            cover_broken.set(false);
            || ()
        });
    }

    let Some(user) = user else {
        return Html::default();
    };

    let save = {
        let title = title.clone();
        let excerpt = excerpt.clone();
        let content = content.clone();
        let cover_image = cover_image.clone();
        let category_id = category_id.clone();
        let tags = tags.clone();
        let saving = saving.clone();
        let navigator = navigator.clone();
        let author_id = user.id.clone();
        Callback::from(move |publish: bool| {
            if *saving {
                return;
            }
            let draft = CaseStudyDraft {
                title: (*title).clone(),
                excerpt: (*excerpt).clone(),
                content: (*content).clone(),
                cover_image: (*cover_image).clone(),
                category_id: (*category_id).clone(),
                tags: (*tags).clone(),
            };
            if !draft.is_complete() {
                alert(t::MISSING_FIELDS);
                return;
            }

            let row = draft.into_new_case_study(&author_id, publish);
            let saving = saving.clone();
            let navigator = navigator.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_case_study(&row).await {
                    Ok(created) => {
                        if let Some(nav) = navigator {
                            if publish {
                                nav.push(&Route::CaseStudyDetail {
                                    id: created.id,
                                });
                            } else {
                                nav.push(&Route::Dashboard);
                            }
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to save case study: {}", e).into());
                        alert(&fill_one(t::SAVE_FAILED_TEMPLATE, e.user_message()));
                    },
                }
                saving.set(false);
            });
        })
    };

    let on_save_draft = {
        let save = save.clone();
        Callback::from(move |_: MouseEvent| save.emit(false))
    };
    let on_publish = Callback::from(move |_: MouseEvent| save.emit(true));

    let on_category_change = {
        let category_id = category_id.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                category_id.set(value);
            }
        })
    };

    let on_cover_error = {
        let cover_broken = cover_broken.clone();
        Callback::from(move |_: Event| cover_broken.set(true))
    };

    let field_class = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent";
    let label_class = "block text-sm font-medium text-gray-700 mb-2";

    html! {
        <div class="min-h-screen bg-gray-50 py-8">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-6">
                    <div class="flex justify-between items-center">
                        <h1 class="text-2xl font-bold text-gray-900">{ t::TITLE }</h1>
                        <div class="flex space-x-3">
                            <button
                                type="button"
                                onclick={on_save_draft}
                                disabled={*saving}
                                class="flex items-center space-x-2 px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50 transition-colors disabled:opacity-50"
                            >
                                <i class="fas fa-floppy-disk" aria-hidden="true"></i>
                                <span>{ t::SAVE_DRAFT }</span>
                            </button>
                            <button
                                type="button"
                                onclick={on_publish}
                                disabled={*saving}
                                class="flex items-center space-x-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors disabled:opacity-50"
                            >
                                <i class="fas fa-eye" aria-hidden="true"></i>
                                <span>{ t::PUBLISH }</span>
                            </button>
                        </div>
                    </div>
                </div>

                <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6">
                    <div class="space-y-6">
                        <div>
                            <label for="title" class={label_class}>{ t::TITLE_LABEL }</label>
                            <input
                                type="text"
                                id="title"
                                value={(*title).clone()}
                                oninput={bind_input(&title)}
                                placeholder={t::TITLE_PLACEHOLDER}
                                disabled={*saving}
                                class={field_class}
                            />
                        </div>

                        <div>
                            <label for="excerpt" class={label_class}>{ t::EXCERPT_LABEL }</label>
                            <textarea
                                id="excerpt"
                                value={(*excerpt).clone()}
                                oninput={bind_textarea(&excerpt)}
                                placeholder={t::EXCERPT_PLACEHOLDER}
                                rows="3"
                                disabled={*saving}
                                class={field_class}
                            />
                        </div>

                        <div>
                            <label for="cover-image" class={label_class}>{ t::COVER_LABEL }</label>
                            <input
                                type="url"
                                id="cover-image"
                                value={(*cover_image).clone()}
                                oninput={bind_input(&cover_image)}
                                placeholder="https://example.com/image.jpg"
                                disabled={*saving}
                                class={field_class}
                            />
                            {
                                if !cover_image.trim().is_empty() && !*cover_broken {
                                    html! {
                                        <div class="mt-3">
                                            <img
                                                src={(*cover_image).clone()}
                                                alt={t::COVER_PREVIEW_ALT}
                                                onerror={on_cover_error}
                                                class="w-full h-48 object-cover rounded-lg"
                                            />
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            <div>
                                <label for="category" class={label_class}>{ t::CATEGORY_LABEL }</label>
                                <select id="category" onchange={on_category_change} disabled={*saving} class={field_class}>
                                    <option value="" selected={category_id.is_empty()}>{ t::CATEGORY_PLACEHOLDER }</option>
                                    { for categories.iter().map(|category| html! {
                                        <option
                                            key={category.id.clone()}
                                            value={category.id.clone()}
                                            selected={*category_id == category.id}
                                        >
                                            { &category.name }
                                        </option>
                                    }) }
                                </select>
                            </div>
                            <div>
                                <label for="tags" class={label_class}>{ t::TAGS_LABEL }</label>
                                <input
                                    type="text"
                                    id="tags"
                                    value={(*tags).clone()}
                                    oninput={bind_input(&tags)}
                                    placeholder={t::TAGS_PLACEHOLDER}
                                    disabled={*saving}
                                    class={field_class}
                                />
                            </div>
                        </div>

                        <div>
                            <label for="content" class={label_class}>{ t::CONTENT_LABEL }</label>
                            <textarea
                                id="content"
                                value={(*content).clone()}
                                oninput={bind_textarea(&content)}
                                placeholder={t::CONTENT_PLACEHOLDER}
                                rows="18"
                                disabled={*saving}
                                class={classes!(field_class, "font-mono", "text-sm")}
                            />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
