use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::layout::{Section, SectionBackground, SectionHeader, SectionSize};
use crate::meta::use_page_meta;
use crate::sections::pillars::Pillars;
use crate::Route;

struct Capability {
    id: &'static str,
    title: &'static str,
    description: &'static str,
}

const CAPABILITIES: [Capability; 4] = [
    Capability {
        id: "packs",
        title: "Spatial Packs",
        description: "Versioned bundles of assets plus a manifest recording schemas, \
                      licensing, provenance, and integrity hashes. The source of record \
                      your whole team can cite.",
    },
    Capability {
        id: "cdn",
        title: "Spatial context CDN",
        description: "Immutable paths, strong ETags, range requests, and signed URLs. \
                      The same pack performs in the office, in the pipeline, and in \
                      the field.",
    },
    Capability {
        id: "governance",
        title: "Governance",
        description: "License compatibility and provenance validation run before \
                      publish, not as policy documents after the fact.",
    },
    Capability {
        id: "tools",
        title: "Deterministic tools",
        description: "Tools operate on URIs and produce publishable layers and manifest \
                      patches you can reproduce, audit, and operationalise.",
    },
];

#[function_component(Product)]
pub fn product() -> Html {
    use_page_meta(
        "Product — Spatial Packs, CDN, Governance & Tools | Spatial.Properties",
        "Learn how Spatial.Properties works: Spatial Packs as the source of record, \
         edge delivery via CDN, governance gates, and deterministic tools.",
    );

    html! {
        <>
            <Section background={SectionBackground::Grid} size={SectionSize::Large}>
                <div class="page-hero">
                    <span class="eyebrow">{"Product"}</span>
                    <h1 class="page-title">
                        {"A geospatial platform built around publishable artifacts."}
                    </h1>
                    <p class="page-lede">
                        {"Spatial Packs are the product. The CDN is the delivery. \
                          Governance is the gate everything passes through."}
                    </p>
                    <div class="hero-actions">
                        <Button to={Route::Demo}>{"Explore a sample pack"}</Button>
                        <Button to={Route::Contact} variant={ButtonVariant::Secondary}>
                            {"Book a demo"}
                        </Button>
                    </div>
                </div>
            </Section>

            <Pillars />

            {
                CAPABILITIES.iter().enumerate().map(|(index, capability)| html! {
                    <Section
                        key={capability.id}
                        id={capability.id}
                        background={
                            if index % 2 == 0 {
                                SectionBackground::Muted
                            } else {
                                SectionBackground::Default
                            }
                        }
                    >
                        <SectionHeader
                            eyebrow="Capability"
                            title={capability.title}
                            description={capability.description}
                        />
                    </Section>
                }).collect::<Html>()
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_anchors_match_footer_fragments() {
        let ids: Vec<&str> = CAPABILITIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["packs", "cdn", "governance", "tools"]);
    }
}
