use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Eucalypt,
    Ocean,
    Ochre,
    Outline,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BadgeSize {
    #[default]
    Default,
    Sm,
}

pub fn badge_classes(variant: BadgeVariant, size: BadgeSize) -> Classes {
    let variant_class = match variant {
        BadgeVariant::Default => None,
        BadgeVariant::Eucalypt => Some("badge--eucalypt"),
        BadgeVariant::Ocean => Some("badge--ocean"),
        BadgeVariant::Ochre => Some("badge--ochre"),
        BadgeVariant::Outline => Some("badge--outline"),
    };
    classes!(
        "badge",
        variant_class,
        (size == BadgeSize::Sm).then_some("badge--sm")
    )
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub size: BadgeSize,
    #[prop_or_default]
    pub class: Classes,
}

/// Small chip for tags and labels.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!(badge_classes(props.variant, props.size), props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProofChipProps {
    pub children: Children,
}

/// Inline checkmark chip for trust signals under the hero headline.
#[function_component(ProofChip)]
pub fn proof_chip(props: &ProofChipProps) -> Html {
    html! {
        <span class="proof-chip">
            <span class="proof-chip-check">{"✓"}</span>
            { for props.children.iter() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_badge_has_base_class_only() {
        assert_eq!(
            badge_classes(BadgeVariant::Default, BadgeSize::Default).to_string(),
            "badge"
        );
    }

    #[test]
    fn outline_small_combines_modifiers() {
        assert_eq!(
            badge_classes(BadgeVariant::Outline, BadgeSize::Sm).to_string(),
            "badge badge--outline badge--sm"
        );
    }
}
