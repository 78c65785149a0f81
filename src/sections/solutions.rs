use yew::prelude::*;

use crate::components::card::{FeatureCard, Stripe};
use crate::components::layout::{Section, SectionBackground, SectionHeader};

pub struct Solution {
    pub stripe: Stripe,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const SOLUTIONS: [Solution; 4] = [
    Solution {
        stripe: Stripe::Eucalypt,
        title: "Utilities & resources",
        description: "Operational layers teams can trust: assets, access constraints, \
                      vegetation and risk overlays, field-ready basemaps.",
        href: "/solutions#utilities",
    },
    Solution {
        stripe: Stripe::Ocean,
        title: "Government & agencies",
        description: "Publish authoritative datasets with clear provenance, licensing \
                      constraints, and consistent multi-tenant access.",
        href: "/solutions#government",
    },
    Solution {
        stripe: Stripe::Ochre,
        title: "Incident response",
        description: "Make \"current context\" available fast — plus offline-capable \
                      packs when connectivity is degraded.",
        href: "/solutions#response",
    },
    Solution {
        stripe: Stripe::Stone,
        title: "Apps, analytics & agents",
        description: "Deliver deterministic spatial context to apps and agents that need \
                      to explain what they used — and why.",
        href: "/solutions#developers",
    },
];

/// Routes visitors to the use case that matches them.
#[function_component(SolutionsGrid)]
pub fn solutions_grid() -> Html {
    html! {
        <Section background={SectionBackground::Muted}>
            <SectionHeader
                eyebrow="Solutions"
                title="Built for teams who operate in the real world."
            />

            <div class="solutions-grid">
                {
                    SOLUTIONS.iter().map(|solution| html! {
                        <FeatureCard
                            key={solution.title}
                            title={solution.title}
                            description={solution.description}
                            stripe={solution.stripe}
                            href={solution.href}
                        />
                    }).collect::<Html>()
                }
            </div>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;
    use yew_router::Routable;

    #[test]
    fn solution_cards_link_into_the_solutions_page() {
        for solution in &SOLUTIONS {
            let path = solution.href.split('#').next().unwrap_or(solution.href);
            assert_eq!(Route::recognize(path), Some(Route::Solutions));
        }
    }
}
