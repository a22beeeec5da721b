use startup_stories_shared::{query::CaseStudyFilter, view::resolve_category, CaseStudy, Category};
use yew::prelude::*;

use crate::{
    api,
    components::{
        case_study_grid::CaseStudyGrid,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::{current::category as t, fill_one},
};

#[derive(Properties, Clone, PartialEq)]
pub struct CategoryPageProps {
    pub category_name: String,
}

#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    let route_name = urlencoding::decode(&props.category_name)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| props.category_name.clone());

    let category = use_state(|| None::<Category>);
    let case_studies = use_state(Vec::<CaseStudy>::new);
    let loading = use_state(|| true);

    {
        let category = category.clone();
        let case_studies = case_studies.clone();
        let loading = loading.clone();
        use_effect_with(route_name, move |route_name| {
            let route_name = route_name.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let resolved = match api::fetch_categories().await {
                    Ok(all) => resolve_category(&all, &route_name).cloned(),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch categories: {}", e).into());
                        None
                    },
                };

                if let Some(found) = resolved.as_ref() {
                    let filter = CaseStudyFilter::published().category(&found.id);
                    match api::fetch_case_studies(&filter).await {
                        Ok(data) => case_studies.set(data),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch case studies for {}: {}", found.name, e)
                                    .into(),
                            );
                            case_studies.set(Vec::new());
                        },
                    }
                } else {
                    case_studies.set(Vec::new());
                }

                category.set(resolved);
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} /> };
    }

    let Some(category) = (*category).clone() else {
        return html! {
            <div class="min-h-[60vh] flex items-center justify-center">
                <div class="text-center">
                    <h2 class="text-2xl font-bold text-gray-900 mb-2">{ t::NOT_FOUND_TITLE }</h2>
                    <p class="text-gray-600">{ t::NOT_FOUND_BODY }</p>
                </div>
            </div>
        };
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="mb-12">
                <div
                    class="w-16 h-16 rounded-full mx-auto mb-6 flex items-center justify-center"
                    style={format!("background-color: {}20;", category.color)}
                >
                    <div class="w-8 h-8 rounded-full" style={format!("background-color: {};", category.color)} />
                </div>
                <h1 class="text-4xl font-bold text-center text-gray-900 mb-4">{ &category.name }</h1>
                <p class="text-xl text-gray-600 text-center max-w-2xl mx-auto">
                    { category.description.clone().unwrap_or_default() }
                </p>
            </div>
            <div class="mb-8">
                <h2 class="text-2xl font-bold text-gray-900 mb-6">
                    { fill_one(t::COUNT_TEMPLATE, case_studies.len()) }
                </h2>
                <CaseStudyGrid case_studies={(*case_studies).clone()} loading={false} />
            </div>
        </div>
    }
}
