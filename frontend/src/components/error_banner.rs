use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

/// Dismissible error line. Reopens whenever `message` changes.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div
            class={classes!(
                "error-banner",
                "flex",
                "items-start",
                "gap-3",
                "rounded-lg",
                "border",
                "border-red-200",
                "bg-red-50",
                "px-4",
                "py-3",
                "text-sm",
                "text-red-700"
            )}
            role="alert"
            aria-live="assertive"
        >
            <i class="fas fa-circle-exclamation mt-0.5" aria-hidden="true"></i>
            <p class="flex-1">{ props.message.clone() }</p>
            <button
                type="button"
                class={classes!(
                    "inline-flex",
                    "h-6",
                    "w-6",
                    "items-center",
                    "justify-center",
                    "rounded-full",
                    "text-lg",
                    "leading-none",
                    "hover:bg-red-100"
                )}
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
