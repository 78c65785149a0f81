use yew::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonVariant};
use crate::components::layout::{Section, SectionBackground, SectionHeader, SectionSize};
use crate::meta::use_page_meta;
use crate::sections::solutions::SolutionsGrid;
use crate::Route;

struct UseCase {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    points: &'static [&'static str],
    tag: (&'static str, BadgeVariant),
}

const USE_CASES: [UseCase; 4] = [
    UseCase {
        id: "utilities",
        title: "Utilities & resources",
        description: "Operational layers teams can trust, in the office and in the field.",
        points: &[
            "Assets, access constraints, vegetation and risk overlays",
            "Field-ready basemaps that work on degraded connectivity",
            "Versioned context for defensible operational decisions",
        ],
        tag: ("Field-ready", BadgeVariant::Eucalypt),
    },
    UseCase {
        id: "government",
        title: "Government & agencies",
        description: "Publish authoritative datasets without losing control of them.",
        points: &[
            "Clear provenance and licensing constraints on every layer",
            "Consistent multi-tenant access with scoped visibility",
            "Change events downstream consumers can subscribe to",
        ],
        tag: ("Multi-tenant", BadgeVariant::Ocean),
    },
    UseCase {
        id: "response",
        title: "Incident response",
        description: "Current context, available fast, even when the network isn't.",
        points: &[
            "Packs published on operational cadence, not annual refresh",
            "Offline-capable bundles with integrity verification",
            "Same layers in the ops room and on the fireground",
        ],
        tag: ("Offline-capable", BadgeVariant::Ochre),
    },
    UseCase {
        id: "developers",
        title: "Apps, analytics & agents",
        description: "Deterministic spatial context for software that has to explain itself.",
        points: &[
            "Immutable pack URLs your pipelines can pin",
            "Manifests that record exactly what an agent consumed",
            "Open formats: GeoParquet, PMTiles, COG, COPC, STAC",
        ],
        tag: ("Open formats", BadgeVariant::Default),
    },
];

#[function_component(Solutions)]
pub fn solutions() -> Html {
    use_page_meta(
        "Solutions — Utilities, Government, Apps & Agents | Spatial.Properties",
        "See how Spatial.Properties serves utilities, government agencies, incident \
         response teams, and developers building apps and agents.",
    );

    html! {
        <>
            <Section background={SectionBackground::Grid} size={SectionSize::Large}>
                <div class="page-hero">
                    <span class="eyebrow">{"Solutions"}</span>
                    <h1 class="page-title">
                        {"Built for teams who operate in the real world."}
                    </h1>
                    <p class="page-lede">
                        {"Different jobs, same foundation: versioned packs with licensing \
                          and provenance built in, delivered fast everywhere."}
                    </p>
                </div>
            </Section>

            <SolutionsGrid />

            {
                USE_CASES.iter().map(|use_case| html! {
                    <Section key={use_case.id} id={use_case.id}>
                        <SectionHeader
                            eyebrow="Use case"
                            title={use_case.title}
                            description={use_case.description}
                        />
                        <Badge variant={use_case.tag.1}>{ use_case.tag.0 }</Badge>
                        <ul class="pack-column-items">
                            {
                                use_case.points.iter().map(|point| html! {
                                    <li key={*point}>
                                        <span class="dot" />
                                        { *point }
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </Section>
                }).collect::<Html>()
            }

            <Section background={SectionBackground::Dark}>
                <div class="section-cta">
                    <Button to={Route::Contact}>{"Book a demo"}</Button>
                    <Button
                        to={Route::Demo}
                        variant={ButtonVariant::Secondary}
                        class={classes!("btn--inverse")}
                    >
                        {"Explore a sample pack"}
                    </Button>
                </div>
            </Section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::solutions::SOLUTIONS;

    #[test]
    fn every_solution_card_fragment_has_a_use_case_anchor() {
        let ids: Vec<&str> = USE_CASES.iter().map(|u| u.id).collect();
        for solution in &SOLUTIONS {
            let fragment = solution.href.split('#').nth(1).expect("solution href has a fragment");
            assert!(
                ids.contains(&fragment),
                "no anchored use case for fragment #{fragment}"
            );
        }
    }
}
