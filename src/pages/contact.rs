use yew::prelude::*;

use crate::components::calendly::CalendlyEmbed;
use crate::components::layout::{Section, SectionBackground, SectionContainer, SectionSize};
use crate::config;
use crate::meta::use_page_meta;

struct ExpectStep {
    number: &'static str,
    title: &'static str,
    description: &'static str,
}

const EXPECT_STEPS: [ExpectStep; 3] = [
    ExpectStep {
        number: "01",
        title: "Discovery call (30 min)",
        description: "We will understand your current spatial data challenges, workflows, \
                      and what success looks like for your team.",
    },
    ExpectStep {
        number: "02",
        title: "Technical demo",
        description: "See Pack Explorer with real data. We will show versioning, \
                      governance, CDN delivery, and tool execution.",
    },
    ExpectStep {
        number: "03",
        title: "Pilot proposal",
        description: "If there is a fit, we will scope a pilot: one region, one theme, \
                      one pack you can trust.",
    },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page_meta(
        "Contact — Book a Demo | Spatial.Properties",
        "Book a demo to see how Spatial.Properties can help your team with curated \
         spatial packs for site selection.",
    );

    html! {
        <>
            <Section background={SectionBackground::Grid} size={SectionSize::Large}>
                <div class="page-hero">
                    <span class="eyebrow">{"Get in touch"}</span>
                    <h1 class="page-title">{"Book a demo"}</h1>
                    <p class="page-lede">
                        {"See your area as a Spatial Pack. Bring one site or one \
                          operational question, and we will show you what pack-first \
                          looks like end-to-end."}
                    </p>
                </div>
            </Section>

            <Section container={SectionContainer::Narrow}>
                <CalendlyEmbed />

                <div class="email-section">
                    <h2 class="section-title section-title--center">{"Prefer email?"}</h2>
                    <div class="email-cards">
                        <div class="email-card">
                            <h3 class="card-title">{"General enquiries"}</h3>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="email-link">
                                { config::CONTACT_EMAIL }
                            </a>
                        </div>
                        <div class="email-card">
                            <h3 class="card-title">{"Investor enquiries"}</h3>
                            <a href={format!("mailto:{}", config::INVESTORS_EMAIL)} class="email-link">
                                { config::INVESTORS_EMAIL }
                            </a>
                        </div>
                    </div>
                </div>
            </Section>

            <Section background={SectionBackground::Muted} container={SectionContainer::Narrow}>
                <h2 class="section-title section-title--center">{"What to expect"}</h2>
                <div class="expect-list">
                    {
                        EXPECT_STEPS.iter().map(|step| html! {
                            <div key={step.number} class="expect-item">
                                <span class="expect-number">{ step.number }</span>
                                <div>
                                    <h3 class="card-title">{ step.title }</h3>
                                    <p class="card-description">{ step.description }</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </Section>
        </>
    }
}
