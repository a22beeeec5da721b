use serde::Deserialize;
use startup_stories_shared::{
    query::{CaseStudyFilter, SortOrder},
    CaseStudy, Category,
};
use yew::prelude::*;
use yew_router::prelude::use_location;

use crate::{
    api,
    components::case_study_grid::CaseStudyGrid,
    i18n::current::case_studies as t,
    utils::{bind_input, select_value},
};

#[derive(Debug, Default, Deserialize)]
struct CaseStudiesQuery {
    q: Option<String>,
}

#[function_component(CaseStudiesPage)]
pub fn case_studies_page() -> Html {
    let location = use_location();
    let url_query = location
        .as_ref()
        .and_then(|loc| loc.query::<CaseStudiesQuery>().ok())
        .and_then(|query| query.q)
        .unwrap_or_default();

    let case_studies = use_state(Vec::<CaseStudy>::new);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let search_query = {
        let url_query = url_query.clone();
        use_state(move || url_query)
    };
    let selected_category = use_state(String::new);
    let sort_by = use_state(SortOrder::default);

    // The header search can change `?q=` while this page stays mounted.
    {
        let search_query = search_query.clone();
        use_effect_with(url_query, move |q| {
            if *search_query != *q {
                search_query.set(q.clone());
            }
            || ()
        });
    }

    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_categories().await {
                    Ok(data) => categories.set(data),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch categories: {}", e).into());
                    },
                }
            });
            || ()
        });
    }

    {
        let case_studies = case_studies.clone();
        let loading = loading.clone();
        let filter = CaseStudyFilter::published()
            .search(&search_query)
            .category(&selected_category)
            .sort(*sort_by);
        use_effect_with(filter, move |filter| {
            let filter = filter.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_case_studies(&filter).await {
                    Ok(data) => case_studies.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch case studies: {}", e).into(),
                        );
                        case_studies.set(Vec::new());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_search = bind_input(&search_query);

    let on_category_change = {
        let selected_category = selected_category.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                selected_category.set(value);
            }
        })
    };

    let on_sort_change = {
        let sort_by = sort_by.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                sort_by.set(SortOrder::from_param(&value));
            }
        })
    };

    let field_class = "w-full py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent bg-white";

    html! {
        <div class="min-h-screen bg-gray-50 py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-4">{ t::TITLE }</h1>
                    <p class="text-gray-600">{ t::SUBTITLE }</p>
                </div>

                <div class="bg-white rounded-lg shadow-sm border border-gray-200 p-6 mb-8">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <div class="relative">
                            <i class="fas fa-search absolute left-3 top-1/2 -translate-y-1/2 text-gray-400" aria-hidden="true"></i>
                            <input
                                type="text"
                                placeholder={t::SEARCH_PLACEHOLDER}
                                aria-label={t::SEARCH_PLACEHOLDER}
                                value={(*search_query).clone()}
                                oninput={on_search}
                                class={classes!(field_class, "pl-10", "pr-4")}
                            />
                        </div>
                        <div class="relative">
                            <i class="fas fa-filter absolute left-3 top-1/2 -translate-y-1/2 text-gray-400" aria-hidden="true"></i>
                            <select
                                aria-label={t::CATEGORY_ARIA}
                                onchange={on_category_change}
                                class={classes!(field_class, "pl-10", "pr-4", "appearance-none")}
                            >
                                <option value="" selected={selected_category.is_empty()}>{ t::ALL_CATEGORIES }</option>
                                { for categories.iter().map(|category| html! {
                                    <option
                                        key={category.id.clone()}
                                        value={category.id.clone()}
                                        selected={*selected_category == category.id}
                                    >
                                        { &category.name }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <select
                            aria-label={t::SORT_ARIA}
                            onchange={on_sort_change}
                            class={classes!(field_class, "px-4", "appearance-none")}
                        >
                            { for [SortOrder::Latest, SortOrder::MostViewed].into_iter().map(|order| html! {
                                <option value={order.as_param()} selected={*sort_by == order}>
                                    { order.label() }
                                </option>
                            }) }
                        </select>
                    </div>
                </div>

                <CaseStudyGrid case_studies={(*case_studies).clone()} loading={*loading} />
            </div>
        </div>
    }
}
