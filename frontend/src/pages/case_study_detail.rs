use startup_stories_shared::{text::format_display_date, view::is_author, CaseStudy};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        raw_html::RawHtml,
    },
    hooks::use_current_user,
    i18n::{current::case_study_detail as t, fill_one},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct CaseStudyDetailProps {
    pub id: String,
}

#[function_component(CaseStudyDetailPage)]
pub fn case_study_detail_page(props: &CaseStudyDetailProps) -> Html {
    let user = use_current_user();
    let navigator = use_navigator();
    let case_study = use_state(|| None::<CaseStudy>);
    let loading = use_state(|| true);

    {
        let case_study = case_study.clone();
        let loading = loading.clone();
        let navigator = navigator.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_case_study(&id).await {
                    Ok(data) => case_study.set(Some(data)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch case study {}: {}", id, e).into(),
                        );
                        if let Some(nav) = navigator {
                            nav.push(&Route::CaseStudies);
                        }
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} /> };
    }

    let Some(case_study) = (*case_study).clone() else {
        return html! {
            <div class="min-h-[60vh] flex items-center justify-center">
                <p class="text-gray-600">{ t::NOT_FOUND }</p>
            </div>
        };
    };

    let author_name = case_study
        .author
        .as_ref()
        .map(|author| author.display_name().to_string())
        .unwrap_or_else(|| t::ANONYMOUS.to_string());

    let edit_button = if is_author(user.as_ref(), &case_study) {
        let edit_route = Route::EditCaseStudy {
            id: case_study.id.clone(),
        };
        html! {
            <div class="mb-8">
                <Link<Route>
                    to={edit_route}
                    classes="inline-block px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 transition-colors"
                >
                    { t::EDIT_BUTTON }
                </Link<Route>>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <article class="prose lg:prose-xl mx-auto">
                <h1 class="text-4xl font-bold mb-4">{ &case_study.title }</h1>
                <div class="flex items-center text-gray-600 mb-8">
                    <span>{ fill_one(t::BYLINE_TEMPLATE, &author_name) }</span>
                    <span class="mx-2">{ "•" }</span>
                    <span>{ format_display_date(&case_study.created_at) }</span>
                    <span class="mx-2">{ "•" }</span>
                    <span>{ fill_one(t::READING_TIME_TEMPLATE, case_study.reading_time) }</span>
                </div>
                { edit_button }
                <RawHtml
                    html={AttrValue::from(case_study.content.clone().unwrap_or_default())}
                    class={classes!("prose", "prose-lg", "max-w-none")}
                />
            </article>
        </div>
    }
}
