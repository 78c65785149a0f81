use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::config;

/// Inline Calendly scheduling widget.
///
/// The vendor script is appended to the body on mount and removed again in
/// the effect cleanup, so remounting the contact page never stacks up
/// duplicate script tags. Everything inside the widget belongs to Calendly;
/// the fallback link covers environments where the script cannot run.
#[function_component(CalendlyEmbed)]
pub fn calendly_embed() -> Html {
    use_effect_with_deps(
        move |_| {
            let script = attach_widget_script();
            if script.is_none() {
                log::warn!("could not attach Calendly widget script");
            }
            move || detach_widget_script(script)
        },
        (),
    );

    html! {
        <div class="calendly-frame">
            <div
                class="calendly-inline-widget"
                data-url={config::CALENDLY_URL}
                style="min-width: 320px; height: 700px;"
            ></div>
            <div class="calendly-fallback">
                <a href={config::CALENDLY_URL} target="_blank" rel="noopener noreferrer">
                    {"Calendar not loading? Book directly on Calendly →"}
                </a>
            </div>
        </div>
    }
}

fn attach_widget_script() -> Option<HtmlScriptElement> {
    let document = web_sys::window()?.document()?;
    let script = document
        .create_element("script")
        .ok()?
        .dyn_into::<HtmlScriptElement>()
        .ok()?;
    script.set_src(config::CALENDLY_SCRIPT_URL);
    script.set_async(true);
    document.body()?.append_child(&script).ok()?;
    Some(script)
}

/// Removes the tag the matching mount attached, and nothing else.
fn detach_widget_script(script: Option<HtmlScriptElement>) {
    if let Some(script) = script {
        if let Some(parent) = script.parent_node() {
            let _ = parent.remove_child(&script);
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn widget_script_count() -> u32 {
        let document = web_sys::window().unwrap().document().unwrap();
        let selector = format!("script[src='{}']", config::CALENDLY_SCRIPT_URL);
        document.query_selector_all(&selector).unwrap().length()
    }

    #[wasm_bindgen_test]
    fn cleanup_removes_exactly_the_script_the_mount_attached() {
        let before = widget_script_count();
        let script = attach_widget_script();
        assert!(script.is_some());
        assert_eq!(widget_script_count(), before + 1);
        detach_widget_script(script);
        assert_eq!(widget_script_count(), before);
    }

    #[wasm_bindgen_test]
    fn detach_without_an_attached_script_changes_nothing() {
        let before = widget_script_count();
        detach_widget_script(None);
        assert_eq!(widget_script_count(), before);
    }
}
