use yew::prelude::*;

use crate::components::layout::{Section, SectionBackground, SectionHeader};

struct SloTarget {
    metric: &'static str,
    target: &'static str,
}

const SLO_TARGETS: [SloTarget; 4] = [
    SloTarget { metric: "First visual tile", target: "p95 < 2s" },
    SloTarget { metric: "Tile hit", target: "p95 < 500ms" },
    SloTarget { metric: "STAC search", target: "p95 < 600ms" },
    SloTarget { metric: "Availability", target: "99.9%" },
];

/// Brief proof of operational credibility. Not the lead story.
#[function_component(Trust)]
pub fn trust() -> Html {
    html! {
        <Section background={SectionBackground::Muted}>
            <SectionHeader
                eyebrow="Trust"
                title="Reliability you can measure — not just promise."
                center=true
            />

            <div class="slo-card">
                <table class="slo-table">
                    <thead>
                        <tr>
                            <th>{"Metric"}</th>
                            <th class="slo-target">{"Target"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            SLO_TARGETS.iter().map(|row| html! {
                                <tr key={row.metric}>
                                    <td>{ row.metric }</td>
                                    <td class="slo-target">{ row.target }</td>
                                </tr>
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            </div>

            <p class="security-note">
                {"Security: OIDC for humans, mTLS for devices/agents, signed URLs with \
                  tenant + scope claims."}
            </p>
        </Section>
    }
}
