use startup_stories_shared::{query::CaseStudyFilter, text::format_display_date, view::DashboardStats};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    hooks::use_current_user,
    i18n::{current::dashboard as t, fill_one},
    router::Route,
};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let user = use_current_user();
    let navigator = use_navigator();
    let stats = use_state(DashboardStats::default);
    let loading = use_state(|| true);

    {
        let stats = stats.clone();
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
                        let filter = CaseStudyFilter::by_author(&user_id);
                        match api::fetch_case_studies(&filter).await {
                            Ok(rows) => stats.set(DashboardStats::from_case_studies(&rows)),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Failed to fetch dashboard data: {}", e).into(),
                                );
                                stats.set(DashboardStats::default());
                            },
                        }
                        loading.set(false);
                    });
                },
            }
            || ()
        });
    }

    if user.is_none() {
        return Html::default();
    }

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} /> };
    }

    let stat_card = |label: &'static str, value: String| {
        html! {
            <div class="bg-white p-6 rounded-lg shadow-sm border border-gray-200">
                <h3 class="text-lg font-semibold text-gray-700 mb-2">{ label }</h3>
                <p class="text-3xl font-bold text-blue-600">{ value }</p>
            </div>
        }
    };

    html! {
        <div class="max-w-7xl mx-auto px-4 py-8">
            <div class="flex justify-between items-center mb-8">
                <h1 class="text-3xl font-bold">{ t::TITLE }</h1>
                <Link<Route>
                    to={Route::Write}
                    classes="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 transition-colors"
                >
                    { t::WRITE_NEW }
                </Link<Route>>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8">
                { stat_card(t::TOTAL_CASE_STUDIES, stats.total_case_studies.to_string()) }
                { stat_card(t::TOTAL_VIEWS, stats.total_views.to_string()) }
            </div>

            <div class="bg-white rounded-lg shadow-sm border border-gray-200">
                <div class="p-6 border-b border-gray-200">
                    <h2 class="text-xl font-semibold">{ t::RECENT_TITLE }</h2>
                </div>
                <div class="divide-y divide-gray-200">
                    {
                        if stats.recent.is_empty() {
                            html! { <div class="p-6 text-center text-gray-500">{ t::EMPTY }</div> }
                        } else {
                            html! {
                                <>{ for stats.recent.iter().map(|study| html! {
                                    <Link<Route>
                                        key={study.id.clone()}
                                        to={Route::CaseStudyDetail { id: study.id.clone() }}
                                        classes="block p-6 hover:bg-gray-50 transition-colors"
                                    >
                                        <div class="flex justify-between items-start">
                                            <div>
                                                <h3 class="text-lg font-medium text-gray-900 mb-1">
                                                    { &study.title }
                                                    {
                                                        if study.published {
                                                            html! {}
                                                        } else {
                                                            html! {
                                                                <span class="ml-2 align-middle text-xs font-medium px-2 py-0.5 rounded-full bg-yellow-100 text-yellow-800">
                                                                    { t::DRAFT_BADGE }
                                                                </span>
                                                            }
                                                        }
                                                    }
                                                </h3>
                                                <p class="text-sm text-gray-500">{ format_display_date(&study.created_at) }</p>
                                            </div>
                                            <div class="text-sm text-gray-500">{ fill_one(t::VIEWS_TEMPLATE, study.views) }</div>
                                        </div>
                                    </Link<Route>>
                                }) }</>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}
