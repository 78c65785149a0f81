use yew::prelude::*;
use yew_router::components::Link;
use chrono::Datelike;

use crate::components::button::{Button, ButtonSize};
use crate::config;
use crate::Route;

const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Product, "Product"),
    (Route::Solutions, "Solutions"),
    (Route::Developers, "Developers"),
    (Route::Pricing, "Pricing"),
    (Route::Demo, "Demo"),
];

/// Menu state after pressing the burger.
fn menu_after_toggle(open: bool) -> bool {
    !open
}

/// Menu state after choosing any entry; selecting always closes the sheet.
fn menu_after_select(_open: bool) -> bool {
    false
}

/// Sticky page header with desktop nav and a mobile burger menu.
/// The only state is the menu-open boolean; picking any link closes it.
#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(menu_after_toggle(*menu_open));
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(menu_after_select(*menu_open));
        })
    };

    let aria_label = if *menu_open { "Close menu" } else { "Open menu" };

    html! {
        <header class="site-header">
            <nav class="container site-nav">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::SITE_NAME }
                </Link<Route>>

                <div class="nav-desktop">
                    <ul class="nav-links">
                        {
                            NAV_LINKS.iter().map(|(route, label)| html! {
                                <li key={*label}>
                                    <Link<Route> to={route.clone()} classes="nav-link">
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                    </ul>
                    <Button to={Route::Contact} size={ButtonSize::Sm}>
                        {"Book a demo"}
                    </Button>
                </div>

                <button
                    type="button"
                    class={classes!("burger", (*menu_open).then_some("burger--open"))}
                    onclick={toggle_menu}
                    aria-expanded={menu_open.to_string()}
                    aria-label={aria_label}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then_some("mobile-menu--open"))}>
                <nav class="container">
                    <ul class="mobile-menu-links">
                        {
                            NAV_LINKS.iter().map(|(route, label)| html! {
                                <li key={*label} onclick={close_menu.clone()}>
                                    <Link<Route> to={route.clone()} classes="mobile-menu-link">
                                        { *label }
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()
                        }
                        <li class="mobile-menu-cta" onclick={close_menu.clone()}>
                            <Button to={Route::Contact} class={classes!("btn--block")}>
                                {"Book a demo"}
                            </Button>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

struct FooterGroup {
    heading: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const FOOTER_GROUPS: [FooterGroup; 4] = [
    FooterGroup {
        heading: "Product",
        links: &[
            ("/product", "Overview"),
            ("/product#packs", "Spatial Packs"),
            ("/product#cdn", "CDN"),
            ("/product#governance", "Governance"),
            ("/product#tools", "Tools"),
        ],
    },
    FooterGroup {
        heading: "Solutions",
        links: &[
            ("/solutions#utilities", "Utilities & Resources"),
            ("/solutions#government", "Government"),
            ("/solutions#developers", "Apps & Agents"),
        ],
    },
    FooterGroup {
        heading: "Developers",
        links: &[
            ("/developers", "Overview"),
            ("/developers#quickstart", "Quickstart"),
            ("/developers#api", "API Reference"),
            ("/developers#csp1", "CSP-1"),
        ],
    },
    FooterGroup {
        heading: "Company",
        links: &[
            ("/investors", "Investors"),
            ("/contact", "Contact"),
            ("/pricing", "Pricing"),
        ],
    },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <Link<Route> to={Route::Home} classes="footer-logo">
                            { config::SITE_NAME }
                        </Link<Route>>
                        <p class="footer-tagline">
                            {"Pack-first geospatial infrastructure for apps, analytics, and agents."}
                        </p>
                    </div>
                    {
                        FOOTER_GROUPS.iter().map(|group| html! {
                            <div key={group.heading} class="footer-column">
                                <h3 class="footer-heading">{ group.heading }</h3>
                                <ul class="footer-links">
                                    {
                                        group.links.iter().map(|(href, label)| html! {
                                            <li key={*href}>
                                                <a href={*href} class="footer-link">{ *label }</a>
                                            </li>
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        { format!("© {} {}. All rights reserved.", year, config::COPYRIGHT_HOLDER) }
                    </p>
                    <div class="footer-bottom-links">
                        <a href="/contact" class="footer-link">{"Contact"}</a>
                        <a href="/investors" class="footer-link">{"Investors"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBackground {
    #[default]
    Default,
    Muted,
    Dark,
    Grid,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionSize {
    #[default]
    Default,
    Large,
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionContainer {
    #[default]
    Wide,
    Narrow,
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub children: Children,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub background: SectionBackground,
    #[prop_or_default]
    pub size: SectionSize,
    #[prop_or_default]
    pub container: SectionContainer,
    #[prop_or_default]
    pub class: Classes,
}

/// Vertically stacked page block with consistent background, padding, and
/// container width.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let background = match props.background {
        SectionBackground::Default => None,
        SectionBackground::Muted => Some("section--muted"),
        SectionBackground::Dark => Some("section--dark"),
        SectionBackground::Grid => Some("section--grid"),
    };
    let size = (props.size == SectionSize::Large).then_some("section--large");
    let container = classes!(
        "container",
        (props.container == SectionContainer::Narrow).then_some("container--narrow")
    );

    html! {
        <section
            id={props.id.clone()}
            class={classes!("section", background, size, props.class.clone())}
        >
            <div class={container}>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub eyebrow: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or(false)]
    pub center: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.center.then_some("section-header--center"))}>
            {
                if let Some(eyebrow) = props.eyebrow.clone() {
                    html! { <span class="eyebrow">{ eyebrow }</span> }
                } else {
                    html! {}
                }
            }
            <h2 class="section-title">{ props.title.clone() }</h2>
            {
                if let Some(description) = props.description.clone() {
                    html! { <p class="section-description">{ description }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew_router::Routable;

    fn route_for(href: &str) -> Option<Route> {
        let path = href.split('#').next().unwrap_or(href);
        Route::recognize(path)
    }

    #[test]
    fn every_footer_link_targets_a_known_route() {
        for group in &FOOTER_GROUPS {
            for (href, label) in group.links {
                assert!(
                    route_for(href).is_some(),
                    "footer link '{label}' points at unroutable path {href}"
                );
            }
        }
    }

    #[test]
    fn footer_bottom_links_target_known_routes() {
        assert!(route_for("/contact").is_some());
        assert!(route_for("/investors").is_some());
    }

    #[test]
    fn nav_links_round_trip_through_the_router() {
        for (route, _) in &NAV_LINKS {
            let path = route.to_path();
            assert_eq!(Route::recognize(&path).as_ref(), Some(route));
        }
    }

    #[test]
    fn toggling_the_burger_twice_restores_the_menu_state() {
        for start in [false, true] {
            assert_eq!(menu_after_toggle(menu_after_toggle(start)), start);
        }
    }

    #[test]
    fn selecting_a_link_always_closes_the_menu() {
        assert!(!menu_after_select(true));
        assert!(!menu_after_select(false));
    }
}
