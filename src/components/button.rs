use yew::prelude::*;
use yew_router::components::Link;
use crate::Route;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

/// Maps variant + size to the button class list. Ghost buttons render as
/// inline text links, so size padding does not apply to them.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> Classes {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn--primary",
        ButtonVariant::Secondary => "btn--secondary",
        ButtonVariant::Ghost => "btn--ghost",
    };
    let size_class = match size {
        ButtonSize::Default => None,
        ButtonSize::Sm => Some("btn--sm"),
        ButtonSize::Lg => Some("btn--lg"),
    };
    classes!(
        "btn",
        variant_class,
        (variant != ButtonVariant::Ghost).then_some(size_class).flatten()
    )
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    /// Internal navigation target.
    #[prop_or_default]
    pub to: Option<Route>,
    /// External or mailto target; ignored when `to` is set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Open `href` in a new tab.
    #[prop_or(false)]
    pub external: bool,
}

/// Primary call-to-action component. Renders a router link for internal
/// targets, a plain anchor for external ones, and a button otherwise.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(button_classes(props.variant, props.size), props.class.clone());

    let arrow = (props.variant == ButtonVariant::Ghost)
        .then(|| html! { <span class="btn-arrow">{"→"}</span> });

    if let Some(to) = props.to.clone() {
        return html! {
            <Link<Route> to={to} classes={classes}>
                { for props.children.iter() }
                { arrow }
            </Link<Route>>
        };
    }

    if let Some(href) = props.href.clone() {
        let target = props.external.then(|| AttrValue::Static("_blank"));
        let rel = props.external.then(|| AttrValue::Static("noopener noreferrer"));
        return html! {
            <a href={href} class={classes} target={target} rel={rel}>
                { for props.children.iter() }
                { arrow }
            </a>
        };
    }

    html! {
        <button type="button" class={classes} onclick={props.onclick.clone()}>
            { for props.children.iter() }
            { arrow }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_default_gets_no_size_class() {
        let classes = button_classes(ButtonVariant::Primary, ButtonSize::Default).to_string();
        assert_eq!(classes, "btn btn--primary");
    }

    #[test]
    fn secondary_large_gets_size_class() {
        let classes = button_classes(ButtonVariant::Secondary, ButtonSize::Lg).to_string();
        assert_eq!(classes, "btn btn--secondary btn--lg");
    }

    #[test]
    fn ghost_ignores_size() {
        let small = button_classes(ButtonVariant::Ghost, ButtonSize::Sm).to_string();
        let large = button_classes(ButtonVariant::Ghost, ButtonSize::Lg).to_string();
        assert_eq!(small, "btn btn--ghost");
        assert_eq!(small, large);
    }
}
