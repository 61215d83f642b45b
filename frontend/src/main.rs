use yew::prelude::*;
use log::info;

mod config;
mod content;
mod state {
    pub mod accordion;
    pub mod menu;
    pub mod motion;
}
mod hooks {
    pub mod in_view;
}
mod components {
    pub mod icons;
    pub mod disclosure_panel;
    pub mod navbar;
}
mod sections {
    pub mod hero;
    pub mod features;
    pub mod pricing;
    pub mod testimonials;
    pub mod faq;
    pub mod cta;
    pub mod footer;
}

use components::navbar::Navbar;
use sections::{
    hero::Hero,
    features::Features,
    pricing::Pricing,
    testimonials::Testimonials,
    faq::FaqSection,
    cta::CallToAction,
    footer::Footer,
};

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <Navbar />
            <Hero />
            <Features />
            <Pricing />
            <Testimonials />
            <FaqSection />
            <CallToAction />
            <Footer />

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .page {
                    position: relative;
                    min-height: 100vh;
                    background: linear-gradient(135deg, #f0f9ff, #ecfeff 50%, #ffffff);
                    color: #1e293b;
                }

                .icon {
                    width: 1rem;
                    height: 1rem;
                    flex-shrink: 0;
                }

                .section-heading {
                    text-align: center;
                }

                .section-heading h2, .section-title {
                    margin: 0;
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                }

                .section-heading p, .section-subtitle {
                    margin: 0.75rem auto 0;
                    max-width: 42rem;
                    color: #475569;
                    text-align: center;
                }

                .badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                    background: rgba(255, 255, 255, 0.7);
                    color: #0369a1;
                    box-shadow: 0 0 0 1px #bae6fd;
                    backdrop-filter: blur(8px);
                }

                .badge .icon {
                    width: 0.875rem;
                    height: 0.875rem;
                }

                .button {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    border: none;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1.25rem;
                    font: inherit;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    transition: background-color 0.15s;
                }

                .button--primary { background: #0284c7; color: #ffffff; }
                .button--primary:hover { background: #0369a1; }
                .button--dark { background: #0f172a; color: #ffffff; }
                .button--dark:hover { background: #1e293b; }
                .button--ghost { background: rgba(255, 255, 255, 0.7); color: #0f172a; box-shadow: 0 0 0 1px #e2e8f0; }
                .button--ghost:hover { background: #ffffff; }
                .button--light { background: #ffffff; color: #0369a1; }
                .button--light:hover { background: rgba(255, 255, 255, 0.9); }
                .button--outline { background: rgba(255, 255, 255, 0.1); color: #ffffff; box-shadow: 0 0 0 1px rgba(255, 255, 255, 0.4); }
                .button--outline:hover { background: rgba(255, 255, 255, 0.2); }

                .lift {
                    transition: transform 0.2s ease-out;
                }

                .lift:hover {
                    transform: translateY(-3px);
                }

                .glow-pulse {
                    animation: glow-pulse 4s ease-in-out infinite;
                }

                .glow-pulse--slow {
                    animation-duration: 5s;
                }

                @keyframes glow-pulse {
                    0%, 100% { opacity: 0.15; transform: scale(1); }
                    50% { opacity: 0.5; transform: scale(1.03); }
                }

                @keyframes rise {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .stagger > * {
                    opacity: 0;
                    animation: rise 0.5s ease-out forwards;
                }

                .stagger > *:nth-child(1) { animation-delay: 0s; }
                .stagger > *:nth-child(2) { animation-delay: 0.12s; }
                .stagger > *:nth-child(3) { animation-delay: 0.24s; }
                .stagger > *:nth-child(4) { animation-delay: 0.36s; }
                .stagger > *:nth-child(5) { animation-delay: 0.48s; }

                .reveal-item {
                    opacity: 0;
                    transform: translateY(16px);
                    transition: opacity 0.5s ease-out, transform 0.5s ease-out, box-shadow 0.2s;
                }

                .revealed .reveal-item, .reveal-item.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                @media (min-width: 640px) {
                    .section-heading h2, .section-title {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
