use yew::prelude::*;

use crate::components::card::{Card, CardDescription, CardTitle, CardVariant};
use crate::components::layout::{Section, SectionHeader};

struct Pillar {
    variant: CardVariant,
    title: &'static str,
    description: &'static str,
    outcome: &'static str,
}

const PILLARS: [Pillar; 3] = [
    Pillar {
        variant: CardVariant::Eucalypt,
        title: "Pack-first source of record",
        description: "A Spatial Pack is a versioned bundle of assets plus a manifest that \
                      records schemas, licensing, provenance, and integrity hashes.",
        outcome: "Your \"what\" and your \"why\" ship together.",
    },
    Pillar {
        variant: CardVariant::Ocean,
        title: "Spatial context CDN",
        description: "We serve packs through an edge-optimised CDN: immutable paths, \
                      strong ETags, range requests, and signed URLs.",
        outcome: "Predictable performance without rebuilding the world per application.",
    },
    Pillar {
        variant: CardVariant::Ochre,
        title: "Deterministic tools",
        description: "Tools operate on URIs and produce publishable layers + manifest patches.",
        outcome: "Workflows you can reproduce, audit, and operationalise.",
    },
];

/// Three pillars of the product model.
#[function_component(Pillars)]
pub fn pillars() -> Html {
    html! {
        <Section>
            <SectionHeader
                eyebrow="What we do"
                title="Spatial Packs are the product. The CDN is the delivery."
                center=true
            />

            <div class="pillar-grid">
                {
                    PILLARS.iter().map(|pillar| html! {
                        <Card key={pillar.title} variant={pillar.variant} class={classes!("pillar-card")}>
                            <CardTitle>{ pillar.title }</CardTitle>
                            <CardDescription>{ pillar.description }</CardDescription>
                            <p class="pillar-outcome">{ pillar.outcome }</p>
                        </Card>
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}
