use yew::prelude::*;

use crate::components::badge::{Badge, BadgeSize, BadgeVariant};
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::Stripe;
use crate::components::layout::{Section, SectionBackground, SectionHeader};
use crate::Route;

struct Pack {
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    stripe: Stripe,
}

const PACKS: [Pack; 4] = [
    Pack {
        name: "WA Data Centre Site Screening",
        description: "Shortlist viable sites quickly with constraints, access, terrain, \
                      and \"what changed\" between versions.",
        tags: &["Constraints", "Access", "Terrain", "Versioned"],
        stripe: Stripe::Eucalypt,
    },
    Pack {
        name: "WA Transmission Corridor Screening",
        description: "Compare corridor options, avoid exclusions early, reduce redesign \
                      loops with defensible overlays.",
        tags: &["Corridors", "Exclusions", "Routing"],
        stripe: Stripe::Ocean,
    },
    Pack {
        name: "WA Approvals Evidence Pack",
        description: "The layers you'll be asked to justify, packaged with clean \
                      provenance and licensing constraints.",
        tags: &["Approvals", "Provenance", "Licensing"],
        stripe: Stripe::Ochre,
    },
    Pack {
        name: "Field-Ready Basemap",
        description: "Offline-capable context for degraded connectivity and mobile \
                      workflows. Fast in the field.",
        tags: &["Offline", "Mobile", "Basemap"],
        stripe: Stripe::Stone,
    },
];

/// Starter catalog for the WA greenfield wedge. The "what do I get" section.
#[function_component(PackCatalog)]
pub fn pack_catalog() -> Html {
    html! {
        <Section background={SectionBackground::Muted}>
            <SectionHeader
                eyebrow="Starter catalog (WA wedge)"
                title="Packs built for greenfield development teams."
                description="For example: data centre site selection, transmission corridor planning, and approvals workflows."
            />

            <div class="pack-grid">
                {
                    PACKS.iter().map(|pack| html! {
                        <div key={pack.name} class="pack-card">
                            <div class={classes!("stripe", "stripe--thick", pack.stripe.class())} />
                            <div class="pack-body">
                                <h3 class="card-title">{ pack.name }</h3>
                                <p class="card-description">{ pack.description }</p>
                                <div class="pack-tags">
                                    {
                                        pack.tags.iter().map(|tag| html! {
                                            <Badge key={*tag} variant={BadgeVariant::Outline} size={BadgeSize::Sm}>
                                                { *tag }
                                            </Badge>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <div class="section-cta">
                <Button to={Route::Contact} variant={ButtonVariant::Ghost}>
                    {"Request pack coverage for your area"}
                </Button>
            </div>
        </Section>
    }
}
