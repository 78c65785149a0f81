use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::{spawn_local, JsFuture};

/// One-line placeholder shown while a collapsible block is folded.
pub fn collapsed_summary(code: &str) -> String {
    format!("Click to expand ({} lines)", code.split('\n').count())
}

/// How long the "Copied" confirmation shows for a clipboard outcome.
/// Only a resolved write earns the confirmation; a rejected write shows
/// nothing at all.
fn confirmation_millis<T, E>(outcome: &Result<T, E>) -> Option<u32> {
    outcome.is_ok().then_some(2_000)
}

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: AttrValue,
    #[prop_or(AttrValue::Static("json"))]
    pub language: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(false)]
    pub collapsible: bool,
    #[prop_or(false)]
    pub default_collapsed: bool,
}

/// Code sample viewer with copy-to-clipboard and optional collapse.
///
/// The copy confirmation shows for two seconds after a successful clipboard
/// write. A rejected or unavailable clipboard never shows the confirmation;
/// on a marketing page there is nothing useful to tell the user about it.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let copied = use_state(|| false);
    let collapsed = use_state(|| props.default_collapsed);

    let on_copy = {
        let copied = copied.clone();
        let code = props.code.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let text = code.to_string();
            spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let clipboard = window.navigator().clipboard();
                    let outcome = JsFuture::from(clipboard.write_text(&text)).await;
                    match confirmation_millis(&outcome) {
                        Some(millis) => {
                            copied.set(true);
                            TimeoutFuture::new(millis).await;
                            copied.set(false);
                        }
                        None => {
                            log::warn!("clipboard write rejected; skipping copy confirmation");
                        }
                    }
                }
            });
        })
    };

    let toggle_collapsed = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| {
            collapsed.set(!*collapsed);
        })
    };

    let expand = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| {
            collapsed.set(false);
        })
    };

    html! {
        <div class="code-block">
            <div class="code-block-header">
                <div class="code-block-meta">
                    {
                        if let Some(label) = props.label.clone() {
                            html! { <span class="code-block-label">{ label }</span> }
                        } else {
                            html! {}
                        }
                    }
                    <span class="code-block-language">{ props.language.clone() }</span>
                </div>
                <div class="code-block-actions">
                    {
                        if props.collapsible {
                            let chevron = if *collapsed { "▾" } else { "▴" };
                            let label = if *collapsed { "Expand code" } else { "Collapse code" };
                            html! {
                                <button
                                    type="button"
                                    class="code-block-button"
                                    onclick={toggle_collapsed}
                                    aria-label={label}
                                >
                                    { chevron }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <button
                        type="button"
                        class={classes!("code-block-button", (*copied).then_some("code-block-button--copied"))}
                        onclick={on_copy}
                        aria-label="Copy code"
                    >
                        { if *copied { "✓ Copied" } else { "Copy" } }
                    </button>
                </div>
            </div>

            {
                if *collapsed {
                    html! {
                        <div class="code-block-collapsed">
                            <button type="button" class="code-block-expand" onclick={expand}>
                                { collapsed_summary(&props.code) }
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <pre class="code-block-body"><code>{ props.code.clone() }</code></pre>
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_lines_like_the_rendered_block() {
        assert_eq!(collapsed_summary("one line"), "Click to expand (1 lines)");
        assert_eq!(collapsed_summary("a\nb\nc"), "Click to expand (3 lines)");
    }

    #[test]
    fn summary_counts_trailing_newline_as_a_line() {
        // split('\n') semantics: a trailing newline yields an empty final
        // element, matching what the expanded block renders.
        assert_eq!(collapsed_summary("a\nb\n"), "Click to expand (3 lines)");
    }

    #[test]
    fn confirmation_shows_for_two_seconds_after_a_successful_write() {
        assert_eq!(confirmation_millis::<(), ()>(&Ok(())), Some(2_000));
    }

    #[test]
    fn rejected_clipboard_write_never_shows_the_confirmation() {
        assert_eq!(confirmation_millis::<(), ()>(&Err(())), None);
    }
}
