use yew::prelude::*;

use crate::components::card::QuoteCard;
use crate::components::layout::{Section, SectionBackground, SectionHeader};

const PAIN_POINTS: [&str; 4] = [
    "Which layer version did we use?",
    "Can we reproduce last week's decision?",
    "Are we allowed to redistribute this dataset?",
    "Why is it fast in the office and painful in the field?",
];

/// Names the pain so site selection teams feel understood.
#[function_component(Problem)]
pub fn problem() -> Html {
    html! {
        <Section background={SectionBackground::Muted}>
            <div class="problem-grid">
                <div>
                    <SectionHeader
                        eyebrow="The problem"
                        title="Site decisions break when the context isn't trustworthy."
                    />
                    <p class="section-body">
                        {"Teams still burn weeks arguing about layer versions, licensing, and \
                          performance gaps between office and field — and every app rebuilds \
                          the same datasets from scratch."}
                    </p>
                </div>
                <div class="problem-quotes">
                    {
                        PAIN_POINTS.iter().map(|quote| html! {
                            <QuoteCard key={*quote} quote={*quote} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </Section>
    }
}
