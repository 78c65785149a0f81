use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::Route;

/// Dark closing band to convert interest. Pilot-focused messaging.
#[function_component(ClosingCta)]
pub fn closing_cta() -> Html {
    html! {
        <section class="closing-cta">
            <div class="container">
                <h2 class="closing-cta-title">{"See your area as a Spatial Pack."}</h2>
                <p class="closing-cta-lede">
                    {"Bring one site — or one operational question — and we'll show you \
                      what \"pack-first\" looks like end-to-end."}
                </p>
                <div class="hero-actions">
                    <Button to={Route::Contact} size={ButtonSize::Lg}>
                        {"Book a pilot"}
                    </Button>
                    <Button
                        to={Route::Contact}
                        variant={ButtonVariant::Secondary}
                        size={ButtonSize::Lg}
                        class={classes!("btn--inverse")}
                    >
                        {"Talk to us"}
                    </Button>
                </div>
            </div>
        </section>
    }
}
