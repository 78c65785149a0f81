use yew::prelude::*;

use crate::components::layout::{Section, SectionBackground, SectionHeader};

struct Step {
    number: &'static str,
    label: &'static str,
    description: &'static str,
}

const STEPS: [Step; 5] = [
    Step {
        number: "01",
        label: "Ingest",
        description: "We capture source metadata, license, checksums, and scope.",
    },
    Step {
        number: "02",
        label: "Normalise",
        description: "Multiple sources become canonical schemas with lineage.",
    },
    Step {
        number: "03",
        label: "Build",
        description: "Open assets optimised for delivery: vector, raster, point cloud.",
    },
    Step {
        number: "04",
        label: "Publish",
        description: "Versioned manifest, hashes, catalog entry, change events.",
    },
    Step {
        number: "05",
        label: "Serve",
        description: "Global delivery. Deltas when efficient, full refresh when not.",
    },
];

/// The pipeline in human terms. Detail belongs on the Developers page.
#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <Section background={SectionBackground::Muted}>
            <SectionHeader
                eyebrow="How it works"
                title="From source data to edge delivery — without losing trust."
                center=true
            />

            // Horizontal stepper, hidden on small screens.
            <div class="steps-desktop">
                <div class="steps-track" />
                {
                    STEPS.iter().map(|step| html! {
                        <div key={step.number} class="step">
                            <div class="step-number">{ step.number }</div>
                            <h3 class="card-title">{ step.label }</h3>
                            <p class="step-description">{ step.description }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            // Vertical timeline for mobile.
            <div class="steps-mobile">
                {
                    STEPS.iter().enumerate().map(|(index, step)| html! {
                        <div key={step.number} class="step-row">
                            {
                                if index < STEPS.len() - 1 {
                                    html! { <div class="step-connector" /> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="step-number">{ step.number }</div>
                            <div class="step-row-body">
                                <h3 class="card-title">{ step.label }</h3>
                                <p class="step-description">{ step.description }</p>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}
