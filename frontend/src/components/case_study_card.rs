use startup_stories_shared::{text::format_display_date, AuthorSummary, CaseStudy};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::case_study_card as t, router::Route};

#[derive(Properties, PartialEq, Clone)]
pub struct CaseStudyCardProps {
    pub case_study: CaseStudy,
    #[prop_or(false)]
    pub is_favorited: bool,
    #[prop_or_default]
    pub on_toggle_favorite: Option<Callback<()>>,
}

#[function_component(CaseStudyCard)]
pub fn case_study_card(props: &CaseStudyCardProps) -> Html {
    let case_study = &props.case_study;
    let detail_route = Route::CaseStudyDetail {
        id: case_study.id.clone(),
    };
    let author = case_study.author.clone().unwrap_or_else(|| AuthorSummary {
        id: Some(case_study.author_id.clone()),
        username: None,
        full_name: None,
        avatar_url: None,
    });
    let author_name = author.display_name().to_string();

    let favorite_button = props.on_toggle_favorite.as_ref().map(|on_toggle| {
        let on_toggle = on_toggle.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        });
        let heart_class = if props.is_favorited { "fas fa-heart" } else { "far fa-heart" };
        html! {
            <button
                type="button"
                class={classes!(
                    "flex", "items-center", "space-x-1", "hover:text-red-500", "transition-colors",
                    props.is_favorited.then_some("text-red-500")
                )}
                aria-pressed={props.is_favorited.to_string()}
                aria-label={t::FAVORITE_ARIA}
                {onclick}
            >
                <i class={heart_class} aria-hidden="true"></i>
            </button>
        }
    });

    html! {
        <article class="case-study-card bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden hover:shadow-lg transition-all duration-300 group">
            {
                if let Some(image) = case_study.cover_image.as_ref() {
                    html! {
                        <Link<Route> to={detail_route.clone()} classes={classes!("block", "aspect-video", "overflow-hidden")}>
                            <img
                                src={image.clone()}
                                alt={case_study.title.clone()}
                                loading="lazy"
                                class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-300"
                            />
                        </Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
            <div class="p-6">
                {
                    if let Some(category) = case_study.category.as_ref() {
                        html! {
                            <div class="mb-3">
                                <span
                                    class="inline-block px-3 py-1 text-xs font-medium rounded-full text-white"
                                    style={format!("background-color: {};", category.color)}
                                >
                                    { &category.name }
                                </span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <h2 class="text-xl font-bold text-gray-900 mb-3 line-clamp-2 group-hover:text-blue-600 transition-colors">
                    <Link<Route> to={detail_route}>{ &case_study.title }</Link<Route>>
                </h2>
                <p class="text-gray-600 mb-4 line-clamp-3">
                    { case_study.excerpt.clone().unwrap_or_default() }
                </p>
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <div class="w-8 h-8 bg-gradient-to-br from-blue-500 to-purple-500 rounded-full flex items-center justify-center">
                            {
                                match author.avatar_url.as_ref() {
                                    Some(avatar) => html! {
                                        <img src={avatar.clone()} alt={author_name.clone()} class="w-8 h-8 rounded-full object-cover" />
                                    },
                                    None => html! { <i class="fas fa-user text-white text-xs" aria-hidden="true"></i> },
                                }
                            }
                        </div>
                        <div>
                            <p class="text-sm font-medium text-gray-900">{ &author_name }</p>
                            {
                                if let Some(username) = author.username.as_ref() {
                                    html! { <p class="text-xs text-gray-500">{ format!("@{}", username) }</p> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>
                    <div class="flex items-center space-x-4 text-sm text-gray-500">
                        <span class="flex items-center space-x-1">
                            <i class="far fa-clock" aria-hidden="true"></i>
                            <span>{ format!("{} {}", case_study.reading_time, t::MINUTES_SUFFIX) }</span>
                        </span>
                        <span class="flex items-center space-x-1">
                            <i class="far fa-eye" aria-hidden="true"></i>
                            <span>{ case_study.views.to_string() }</span>
                        </span>
                        { favorite_button.unwrap_or_default() }
                    </div>
                </div>
                <div class="mt-3 pt-3 border-t border-gray-100">
                    <p class="text-xs text-gray-500">{ format_display_date(&case_study.created_at) }</p>
                </div>
            </div>
        </article>
    }
}
