use yew::prelude::*;

use crate::components::layout::{Section, SectionHeader};

struct Column {
    title: &'static str,
    items: &'static [&'static str],
}

const COLUMNS: [Column; 3] = [
    Column {
        title: "Decision layers",
        items: &[
            "Constraints and exclusion zones",
            "Hazards (flood, bushfire, contamination)",
            "Approvals overlays and zoning",
        ],
    },
    Column {
        title: "Base context",
        items: &[
            "Cadastre and land tenure",
            "Terrain and slope analysis",
            "Access roads and infrastructure",
        ],
    },
    Column {
        title: "Defensibility",
        items: &[
            "Source provenance and licensing",
            "Version history and changelogs",
            "Integrity hashes for verification",
        ],
    },
];

/// Pack contents in plain language: the "what" and the "why" ship together.
#[function_component(WhatsInAPack)]
pub fn whats_in_a_pack() -> Html {
    html! {
        <Section>
            <SectionHeader
                eyebrow="What's inside"
                title="A pack ships your 'what' and your 'why' together."
                description="The layers plus the manifest that records the rules, sources, and integrity checks. No more arguing about where the data came from."
                center=true
            />

            <div class="pack-columns">
                {
                    COLUMNS.iter().map(|column| html! {
                        <div key={column.title} class="pack-column">
                            <h3 class="card-title">{ column.title }</h3>
                            <ul class="pack-column-items">
                                {
                                    column.items.iter().map(|item| html! {
                                        <li key={*item}>
                                            <span class="dot" />
                                            { *item }
                                        </li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}
