use startup_stories_shared::{
    query::{CaseStudyFilter, SortOrder},
    view::FEATURED_LIMIT,
    CaseStudy, Category,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api, components::case_study_grid::CaseStudyGrid, i18n::current::home as t, router::Route,
};

struct HeadlineStat {
    icon: &'static str,
    tone: &'static str,
    value: &'static str,
    label: &'static str,
}

const HEADLINE_STATS: [HeadlineStat; 3] = [
    HeadlineStat {
        icon: "fas fa-book-open text-blue-600",
        tone: "bg-blue-100",
        value: t::STAT_CASE_STUDIES_VALUE,
        label: t::STAT_CASE_STUDIES_LABEL,
    },
    HeadlineStat {
        icon: "fas fa-users text-green-600",
        tone: "bg-green-100",
        value: t::STAT_FOUNDERS_VALUE,
        label: t::STAT_FOUNDERS_LABEL,
    },
    HeadlineStat {
        icon: "fas fa-arrow-trend-up text-purple-600",
        tone: "bg-purple-100",
        value: t::STAT_FUNDING_VALUE,
        label: t::STAT_FUNDING_LABEL,
    },
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let featured = use_state(Vec::<CaseStudy>::new);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);

    {
        let featured = featured.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let filter = CaseStudyFilter::published()
                    .sort(SortOrder::MostViewed)
                    .limit(FEATURED_LIMIT);
                match api::fetch_case_studies(&filter).await {
                    Ok(data) => featured.set(data),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch featured case studies: {}", e).into(),
                        );
                    },
                }
                match api::fetch_categories().await {
                    Ok(data) => categories.set(data),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch categories: {}", e).into());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <div class="min-h-screen bg-white">
            <section class="bg-gradient-to-br from-blue-50 via-indigo-50 to-purple-50 py-20">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
                        { t::HERO_TITLE_PREFIX }
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            { t::HERO_TITLE_HIGHLIGHT }
                        </span>
                    </h1>
                    <p class="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">{ t::HERO_SUBTITLE }</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route>
                            to={Route::Signup}
                            classes="bg-blue-600 text-white px-8 py-3 rounded-full font-semibold hover:bg-blue-700 transition-colors flex items-center justify-center space-x-2"
                        >
                            <span>{ t::HERO_START_READING }</span>
                            <i class="fas fa-arrow-right" aria-hidden="true"></i>
                        </Link<Route>>
                        <Link<Route>
                            to={Route::Write}
                            classes="border border-gray-300 text-gray-700 px-8 py-3 rounded-full font-semibold hover:bg-gray-50 transition-colors"
                        >
                            { t::HERO_SHARE_STORY }
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-3 gap-8">
                    { for HEADLINE_STATS.iter().map(|stat| html! {
                        <div class="text-center">
                            <div class={classes!("w-16", "h-16", "rounded-full", "flex", "items-center", "justify-center", "mx-auto", "mb-4", stat.tone)}>
                                <i class={classes!(stat.icon, "text-2xl")} aria-hidden="true"></i>
                            </div>
                            <h3 class="text-3xl font-bold text-gray-900 mb-2">{ stat.value }</h3>
                            <p class="text-gray-600">{ stat.label }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="py-16 bg-gray-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="text-center mb-12">
                        <h2 class="text-3xl font-bold text-gray-900 mb-4">{ t::CATEGORIES_TITLE }</h2>
                        <p class="text-gray-600 max-w-2xl mx-auto">{ t::CATEGORIES_SUBTITLE }</p>
                    </div>
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                        { for categories.iter().map(|category| html! {
                            <Link<Route>
                                key={category.id.clone()}
                                to={Route::Category { category_name: category.route_name() }}
                                classes="bg-white p-6 rounded-xl shadow-sm border border-gray-200 hover:shadow-md transition-all duration-300 text-center group"
                            >
                                <div
                                    class="w-12 h-12 rounded-full mx-auto mb-3 flex items-center justify-center"
                                    style={format!("background-color: {}20;", category.color)}
                                >
                                    <div class="w-6 h-6 rounded-full" style={format!("background-color: {};", category.color)} />
                                </div>
                                <h3 class="font-semibold text-gray-900 group-hover:text-blue-600 transition-colors">
                                    { &category.name }
                                </h3>
                                <p class="text-sm text-gray-500 mt-1">
                                    { category.description.clone().unwrap_or_default() }
                                </p>
                            </Link<Route>>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between items-center mb-12">
                        <div>
                            <h2 class="text-3xl font-bold text-gray-900 mb-4">{ t::FEATURED_TITLE }</h2>
                            <p class="text-gray-600">{ t::FEATURED_SUBTITLE }</p>
                        </div>
                        <Link<Route>
                            to={Route::CaseStudies}
                            classes="text-blue-600 hover:text-blue-700 font-semibold flex items-center space-x-2"
                        >
                            <span>{ t::VIEW_ALL }</span>
                            <i class="fas fa-arrow-right" aria-hidden="true"></i>
                        </Link<Route>>
                    </div>
                    <CaseStudyGrid case_studies={(*featured).clone()} loading={*loading} />
                </div>
            </section>

            <section class="py-20 bg-gradient-to-r from-blue-600 to-purple-600">
                <div class="max-w-4xl mx-auto text-center px-4 sm:px-6 lg:px-8">
                    <h2 class="text-3xl md:text-4xl font-bold text-white mb-6">{ t::CTA_TITLE }</h2>
                    <p class="text-xl text-blue-100 mb-8">{ t::CTA_SUBTITLE }</p>
                    <Link<Route>
                        to={Route::Signup}
                        classes="bg-white text-blue-600 px-8 py-3 rounded-full font-semibold hover:bg-gray-100 transition-colors inline-flex items-center space-x-2"
                    >
                        <i class="fas fa-star" aria-hidden="true"></i>
                        <span>{ t::CTA_BUTTON }</span>
                    </Link<Route>>
                </div>
            </section>
        </div>
    }
}
