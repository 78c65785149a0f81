use yew::prelude::*;

use crate::components::card::{Card, CardDescription, CardTitle, CardVariant};
use crate::components::layout::{Section, SectionHeader};

struct Benefit {
    title: &'static str,
    description: &'static str,
}

const BENEFITS: [Benefit; 4] = [
    Benefit {
        title: "Ready-to-use packs",
        description: "Datasets bundled for a job — site screening, corridor options, \
                      approvals evidence — not raw downloads you need to wrangle.",
    },
    Benefit {
        title: "Built-in defensibility",
        description: "Schemas, licensing, provenance, and integrity hashes travel with \
                      the data. You know what you used and can prove it.",
    },
    Benefit {
        title: "Fast everywhere",
        description: "Served through an edge-optimised CDN with immutable paths and \
                      signed URLs. Same performance in the office and the field.",
    },
    Benefit {
        title: "Reproducible workflows",
        description: "Every pack version is immutable. Re-run analysis months later and \
                      get the same results.",
    },
];

/// Explains the subscription catalog model.
#[function_component(WhatItIs)]
pub fn what_it_is() -> Html {
    html! {
        <Section>
            <SectionHeader
                eyebrow="What Spatial.Properties is"
                title="A subscription catalog of industry packs — delivered like software updates."
                description="Spatial.Properties curates Spatial Packs: versioned bundles of the layers you actually need for a job, plus the manifest that proves schema, licensing, provenance, and integrity. Pick a pack, load it into your workflow, and get predictable performance without rebuilding the world."
                center=true
            />

            <div class="benefit-grid">
                {
                    BENEFITS.iter().map(|benefit| html! {
                        <Card key={benefit.title} variant={CardVariant::Outline} class={classes!("benefit-card")}>
                            <CardTitle>{ benefit.title }</CardTitle>
                            <CardDescription>{ benefit.description }</CardDescription>
                        </Card>
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}
