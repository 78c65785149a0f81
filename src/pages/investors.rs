use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::layout::{Section, SectionBackground, SectionSize};
use crate::config;
use crate::meta::use_page_meta;
use crate::Route;

#[function_component(Investors)]
pub fn investors() -> Html {
    use_page_meta(
        "Investors | Spatial.Properties",
        "Spatial.Properties is building the infrastructure layer for governed, \
         versioned spatial context — served globally via CDN for apps, analytics, \
         and agents.",
    );

    let mailto = format!("mailto:{}", config::INVESTORS_EMAIL);

    html! {
        <Section background={SectionBackground::Grid} size={SectionSize::Large}>
            <div class="page-hero">
                <span class="eyebrow">{"Investors"}</span>
                <h1 class="page-title">
                    {"Spatial context is becoming infrastructure. We're building the \
                      delivery layer."}
                </h1>
                <p class="page-lede">
                    {"Spatial.Properties is a pack-first, cloud-native platform that \
                      turns geospatial context into versioned, governed products — \
                      served through an edge-optimised CDN. Investor brief available \
                      on request."}
                </p>
                <div class="hero-actions">
                    <Button href={mailto}>{"Request investor brief"}</Button>
                    <Button to={Route::Contact} variant={ButtonVariant::Secondary}>
                        {"Book an investor call"}
                    </Button>
                </div>
            </div>
        </Section>
    }
}
