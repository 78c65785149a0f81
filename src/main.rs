use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod meta;
mod theme;

mod components {
    pub mod badge;
    pub mod button;
    pub mod calendly;
    pub mod card;
    pub mod code_block;
    pub mod layout;
}

mod sections {
    pub mod closing_cta;
    pub mod differentiators;
    pub mod hero;
    pub mod how_it_works;
    pub mod pack_catalog;
    pub mod pillars;
    pub mod problem;
    pub mod solutions;
    pub mod trust;
    pub mod what_it_is;
    pub mod whats_in_a_pack;
}

mod pages {
    pub mod contact;
    pub mod demo;
    pub mod developers;
    pub mod home;
    pub mod investors;
    pub mod pricing;
    pub mod product;
    pub mod solutions;
}

use components::layout::{Footer, Header};
use pages::{
    contact::Contact,
    demo::Demo,
    developers::Developers,
    home::Home,
    investors::Investors,
    pricing::Pricing,
    product::Product,
    solutions::Solutions,
};
use theme::GlobalStyles;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/product")]
    Product,
    #[at("/solutions")]
    Solutions,
    #[at("/developers")]
    Developers,
    #[at("/pricing")]
    Pricing,
    #[at("/demo")]
    Demo,
    #[at("/contact")]
    Contact,
    #[at("/investors")]
    Investors,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Product => {
            info!("Rendering Product page");
            html! { <Product /> }
        },
        Route::Solutions => {
            info!("Rendering Solutions page");
            html! { <Solutions /> }
        },
        Route::Developers => {
            info!("Rendering Developers page");
            html! { <Developers /> }
        },
        Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <Demo /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Investors => {
            info!("Rendering Investors page");
            html! { <Investors /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Header />
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
