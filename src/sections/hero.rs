use yew::prelude::*;

use crate::components::badge::ProofChip;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::Route;

const PROOF_POINTS: [&str; 3] = [
    "Versioned data you can reproduce",
    "Licensing + provenance handled",
    "Fast delivery to web, analytics, and field",
];

/// Homepage hero. Outcome-led: what you get, not how it works.
#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero section--grid">
            <div class="container">
                <div class="hero-inner">
                    <span class="eyebrow">{"Spatial data for greenfield development"}</span>
                    <h1 class="hero-title">
                        {"Curated spatial packs for site selection and corridor planning."}
                    </h1>
                    <p class="hero-lede">
                        {"Subscribe to ready-to-use packs (starting in WA) that help teams \
                          shortlist sites faster, surface constraints earlier, and defend \
                          decisions with a clean data trail."}
                    </p>
                    <div class="hero-actions">
                        <Button to={Route::Contact} size={ButtonSize::Lg}>
                            {"Book a pilot"}
                        </Button>
                        <Button to={Route::Demo} variant={ButtonVariant::Secondary} size={ButtonSize::Lg}>
                            {"Explore a sample pack"}
                        </Button>
                    </div>
                    <div class="hero-chips">
                        {
                            PROOF_POINTS.iter().map(|point| html! {
                                <ProofChip key={*point}>{ *point }</ProofChip>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
