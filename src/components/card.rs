use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Eucalypt,
    Ocean,
    Ochre,
    Outline,
}

impl CardVariant {
    fn class(self) -> Option<&'static str> {
        match self {
            CardVariant::Default => None,
            CardVariant::Eucalypt => Some("card--eucalypt"),
            CardVariant::Ocean => Some("card--ocean"),
            CardVariant::Ochre => Some("card--ochre"),
            CardVariant::Outline => Some("card--outline"),
        }
    }
}

/// Colour of the thin category bar along a feature card's top edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stripe {
    Eucalypt,
    Ocean,
    Ochre,
    Stone,
}

impl Stripe {
    pub fn class(self) -> &'static str {
        match self {
            Stripe::Eucalypt => "stripe--eucalypt",
            Stripe::Ocean => "stripe--ocean",
            Stripe::Ochre => "stripe--ochre",
            Stripe::Stone => "stripe--stone",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.variant.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardTextProps {
    pub children: Children,
}

#[function_component(CardTitle)]
pub fn card_title(props: &CardTextProps) -> Html {
    html! { <h3 class="card-title">{ for props.children.iter() }</h3> }
}

#[function_component(CardDescription)]
pub fn card_description(props: &CardTextProps) -> Html {
    html! { <p class="card-description">{ for props.children.iter() }</p> }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub title: AttrValue,
    pub description: AttrValue,
    pub stripe: Stripe,
    /// Optional destination; fragments are allowed, so this is a plain href.
    #[prop_or_default]
    pub href: Option<AttrValue>,
}

/// Card with a coloured top stripe, used for solution and feature grids.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let body = html! {
        <>
            <div class={classes!("stripe", props.stripe.class())} />
            <h3 class="card-title">{ props.title.clone() }</h3>
            <p class="card-description">{ props.description.clone() }</p>
            {
                if props.href.is_some() {
                    html! { <span class="feature-card-more">{"Learn more →"}</span> }
                } else {
                    html! {}
                }
            }
        </>
    };

    match props.href.clone() {
        Some(href) => html! { <a href={href} class="feature-card feature-card--link">{ body }</a> },
        None => html! { <div class="feature-card">{ body }</div> },
    }
}

#[derive(Properties, PartialEq)]
pub struct QuoteCardProps {
    pub quote: AttrValue,
}

/// Left-ruled blockquote for pain points and testimonials.
#[function_component(QuoteCard)]
pub fn quote_card(props: &QuoteCardProps) -> Html {
    html! {
        <blockquote class="quote-card">
            { format!("\u{201c}{}\u{201d}", props.quote) }
        </blockquote>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_variant_classes_are_distinct() {
        let variants = [
            CardVariant::Eucalypt,
            CardVariant::Ocean,
            CardVariant::Ochre,
            CardVariant::Outline,
        ];
        for window in variants.windows(2) {
            assert_ne!(window[0].class(), window[1].class());
        }
        assert_eq!(CardVariant::Default.class(), None);
    }

    #[test]
    fn stripe_classes_carry_colour_names() {
        assert_eq!(Stripe::Eucalypt.class(), "stripe--eucalypt");
        assert_eq!(Stripe::Stone.class(), "stripe--stone");
    }
}
