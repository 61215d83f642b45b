use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::disclosure_panel::DisclosurePanel;
use crate::components::icons::{Glyph, Icon};
use crate::content::{BRAND, NAV_LINKS};
use crate::state::menu::{MenuAction, MenuIcon, MenuState};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu = use_reducer(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // No prevent_default here: the anchor still scrolls to its section.
    let select_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.dispatch(MenuAction::SelectLink);
        })
    };

    let trigger_glyph = match menu.icon() {
        MenuIcon::Menu => Glyph::Menu,
        MenuIcon::Close => Glyph::Close,
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="logo-mark">
                        <span class="logo-glow glow-pulse"></span>
                        <Icon glyph={Glyph::Tooth} class="logo-tooth" />
                    </span>
                    <span class="logo-text">{BRAND}</span>
                </a>

                <nav class="nav-desktop">
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <a key={link.anchor} href={link.href()} class="nav-link">{link.label}</a>
                        }).collect::<Html>()
                    }
                    <button class="nav-cta">{"Get Started"}</button>
                </nav>

                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded={if menu.is_open() { "true" } else { "false" }}
                    onclick={toggle_menu}
                >
                    <Icon glyph={trigger_glyph} />
                </button>
            </div>

            <DisclosurePanel open={menu.is_open()} class="mobile-menu">
                <div class="mobile-menu-links">
                    {
                        NAV_LINKS.iter().map(|link| html! {
                            <a
                                key={link.anchor}
                                href={link.href()}
                                class="mobile-link"
                                onclick={select_link.clone()}
                            >
                                {link.label}
                            </a>
                        }).collect::<Html>()
                    }
                    <button class="mobile-cta" onclick={select_link}>
                        {"Get Started"}
                    </button>
                </div>
            </DisclosurePanel>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(8px);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: inherit;
                    text-decoration: none;
                }

                .logo-mark {
                    position: relative;
                    display: inline-flex;
                }

                .logo-glow {
                    position: absolute;
                    inset: -0.5rem;
                    border-radius: 9999px;
                    background: rgba(186, 230, 253, 0.6);
                    filter: blur(24px);
                }

                .logo-tooth {
                    position: relative;
                    z-index: 10;
                    width: 1.75rem;
                    height: 1.75rem;
                    color: #0369a1;
                }

                .logo-text {
                    font-size: 1.125rem;
                    font-weight: 600;
                }

                .nav-desktop {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                }

                .nav-link {
                    padding: 0.25rem 0.5rem;
                    color: #475569;
                    text-decoration: none;
                }

                .nav-link:hover {
                    color: #0f172a;
                }

                .nav-cta, .mobile-cta {
                    border: none;
                    border-radius: 9999px;
                    background: #0f172a;
                    color: #ffffff;
                    padding: 0.5rem 1rem;
                    font-weight: 500;
                    cursor: pointer;
                }

                .nav-cta:hover, .mobile-cta:hover {
                    background: #1e293b;
                }

                .menu-toggle {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem;
                    background: transparent;
                    color: #334155;
                    box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.6);
                    cursor: pointer;
                }

                .menu-toggle:hover {
                    background: rgba(255, 255, 255, 0.7);
                }

                .menu-toggle .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .mobile-menu {
                    overflow: hidden;
                    border-top: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(8px);
                }

                .mobile-menu-links {
                    display: grid;
                    gap: 0.5rem;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                }

                .mobile-link {
                    padding: 0.5rem 0;
                    color: inherit;
                    text-decoration: none;
                }

                .mobile-cta {
                    margin-top: 0.5rem;
                    width: 100%;
                    border-radius: 0.75rem;
                }

                @media (min-width: 768px) {
                    .nav-desktop {
                        display: flex;
                    }

                    .menu-toggle,
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </header>
    }
}
