use yew::prelude::*;

use crate::i18n::current::loading_spinner as t;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Medium => 40,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or(false)]
    pub fullscreen: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::Static(t::LOADING));

    let spinner = html! {
        <div
            class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-3", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-gray-200",
                    "border-t-blue-600",
                    "animate-spin"
                )}
            />
            <span class={classes!("text-sm", "text-gray-600")}>{ label.to_string() }</span>
        </div>
    };

    if props.fullscreen {
        html! {
            <div
                class={classes!(
                    "loading-spinner-overlay",
                    "min-h-[60vh]",
                    "flex",
                    "items-center",
                    "justify-center"
                )}
            >
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
