use startup_stories_shared::{
    view::{grid_state, GridState},
    CaseStudy,
};
use yew::prelude::*;

use crate::{components::case_study_card::CaseStudyCard, i18n::current::case_study_grid as t};

#[derive(Properties, PartialEq, Clone)]
pub struct CaseStudyGridProps {
    pub case_studies: Vec<CaseStudy>,
    #[prop_or(false)]
    pub loading: bool,
}

const GRID_CLASSES: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6";

#[function_component(CaseStudyGrid)]
pub fn case_study_grid(props: &CaseStudyGridProps) -> Html {
    match grid_state(props.loading, props.case_studies.len()) {
        GridState::Skeleton(count) => html! {
            <div class={GRID_CLASSES} aria-busy="true">
                { for (0..count).map(|i| html! { <SkeletonCard key={i} /> }) }
            </div>
        },
        GridState::Empty => html! {
            <div class="text-center py-12">
                <p class="text-gray-500 text-lg">{ t::EMPTY }</p>
            </div>
        },
        GridState::Cards => html! {
            <div class={GRID_CLASSES}>
                { for props.case_studies.iter().map(|case_study| html! {
                    <CaseStudyCard key={case_study.id.clone()} case_study={case_study.clone()} />
                }) }
            </div>
        },
    }
}

#[function_component(SkeletonCard)]
fn skeleton_card() -> Html {
    let bar = |extra: &'static str| {
        html! { <div class={classes!("bg-gray-200", "rounded", "animate-pulse", extra)} /> }
    };

    html! {
        <div class="bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden">
            <div class="aspect-video bg-gray-200 animate-pulse" />
            <div class="p-6">
                { bar("h-4 mb-3") }
                { bar("h-6 mb-3") }
                <div class="space-y-2 mb-4">
                    { bar("h-3") }
                    { bar("h-3") }
                    { bar("h-3 w-2/3") }
                </div>
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <div class="w-8 h-8 bg-gray-200 rounded-full animate-pulse" />
                        <div class="space-y-1">
                            { bar("h-3 w-20") }
                            { bar("h-2 w-16") }
                        </div>
                    </div>
                    <div class="flex space-x-4">
                        { bar("h-3 w-12") }
                        { bar("h-3 w-8") }
                    </div>
                </div>
            </div>
        </div>
    }
}
