use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

/// Sets the document title and meta description for a page and scrolls back
/// to the top. Runs once per page mount; the CSR stand-in for per-route
/// static metadata.
#[hook]
pub fn use_page_meta(title: &'static str, description: &'static str) {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                if let Some(document) = window.document() {
                    document.set_title(title);
                    if let Ok(Some(tag)) = document.query_selector("meta[name='description']") {
                        if let Ok(meta) = tag.dyn_into::<HtmlMetaElement>() {
                            meta.set_content(description);
                        }
                    }
                }
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
