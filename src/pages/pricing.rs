use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::layout::{Section, SectionBackground, SectionSize};
use crate::meta::use_page_meta;
use crate::Route;

#[function_component(Pricing)]
pub fn pricing() -> Html {
    use_page_meta(
        "Pricing | Spatial.Properties",
        "Pricing that matches how you ship spatial context. Storage + delivery + \
         governance. Start small, scale predictably.",
    );

    html! {
        <Section background={SectionBackground::Grid} size={SectionSize::Large}>
            <div class="page-hero">
                <span class="eyebrow">{"Pricing"}</span>
                <h1 class="page-title">
                    {"Pricing that matches how you ship spatial context."}
                </h1>
                <p class="page-lede">
                    {"Storage + delivery + governance. Start small, scale predictably, \
                      and pay for what you actually serve. Detailed pricing coming soon."}
                </p>
                <div class="hero-actions">
                    <Button to={Route::Contact}>{"Talk to sales"}</Button>
                    <Button to={Route::Home} variant={ButtonVariant::Secondary}>
                        {"Back to home"}
                    </Button>
                </div>
            </div>
        </Section>
    }
}
