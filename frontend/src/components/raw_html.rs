use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Render stored case study HTML into a host element without letting Yew diff
/// its children.
///
/// Content is inserted as-is unless the `sanitize-html` feature is enabled,
/// in which case it is passed through `ammonia` first.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        let html = props.html.clone();
        use_effect_with(html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(&prepare(next_html.as_str()));
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={props.class.clone()} />
    }
}

#[cfg(feature = "sanitize-html")]
fn prepare(html: &str) -> String {
    ammonia::clean(html)
}

#[cfg(not(feature = "sanitize-html"))]
fn prepare(html: &str) -> String {
    html.to_string()
}
