use yew::prelude::*;

use crate::config;
use crate::meta::use_page_meta;
use crate::sections::{
    closing_cta::ClosingCta,
    differentiators::Differentiators,
    hero::Hero,
    how_it_works::HowItWorks,
    pack_catalog::PackCatalog,
    problem::Problem,
    trust::Trust,
    what_it_is::WhatItIs,
    whats_in_a_pack::WhatsInAPack,
};

/// Homepage. Section order follows the buyer journey: outcome, problem,
/// model, catalog, contents, pipeline, edges, proof, conversion.
#[function_component(Home)]
pub fn home() -> Html {
    use_page_meta(
        config::DEFAULT_TITLE,
        "Spatial.Properties is a pack-first geospatial platform. Publish versioned \
         Spatial Packs with licensing and provenance built in — served globally via an \
         edge-optimised spatial context CDN for apps, analytics, and agents.",
    );

    html! {
        <>
            <Hero />
            <Problem />
            <WhatItIs />
            <PackCatalog />
            <WhatsInAPack />
            <HowItWorks />
            <Differentiators />
            <Trust />
            <ClosingCta />
        </>
    }
}
