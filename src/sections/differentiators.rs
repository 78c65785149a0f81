use yew::prelude::*;

use crate::components::layout::{Section, SectionHeader};

struct Differentiator {
    statement: &'static str,
    explanation: &'static str,
}

const DIFFERENTIATORS: [Differentiator; 4] = [
    Differentiator {
        statement: "Not a WMS/WFS re-host.",
        explanation: "Packs are versioned artifacts designed for modern consumption.",
    },
    Differentiator {
        statement: "Databases are scratch.",
        explanation: "Packs are authoritative. PostGIS is for caching, not source of record.",
    },
    Differentiator {
        statement: "Governance is enforced before publish.",
        explanation: "License compatibility and provenance validation aren't policy docs.",
    },
    Differentiator {
        statement: "Built for real distribution.",
        explanation: "Caching, immutable paths, integrity verification, signed access by default.",
    },
];

/// Hard edges and clear non-goals, kept below the value proposition.
#[function_component(Differentiators)]
pub fn differentiators() -> Html {
    html! {
        <Section>
            <SectionHeader
                eyebrow="What makes us different"
                title="Hard edges. Clear non-goals."
            />

            <div class="diff-grid">
                {
                    DIFFERENTIATORS.iter().enumerate().map(|(index, item)| html! {
                        <div
                            key={item.statement}
                            class={classes!(
                                "diff-card",
                                (index % 2 == 0).then_some("diff-card--tinted")
                            )}
                        >
                            <p class="diff-statement">{ item.statement }</p>
                            <p class="card-description">{ item.explanation }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}
