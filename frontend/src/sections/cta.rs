use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::hooks::in_view::use_in_view;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    let panel_ref = use_node_ref();
    let revealed = use_in_view(panel_ref.clone(), 0.0);

    html! {
        <section id="contact" class="cta">
            <div class="cta-inner">
                <div ref={panel_ref} class={classes!("cta-panel", revealed.then_some("revealed"))}>
                    <div class="cta-glow glow-pulse"></div>
                    <div class="cta-grid">
                        <div>
                            <h3>{"Ready to make every visit a 5-star experience?"}</h3>
                            <p>{"Try the platform free for 14 days. No credit card required."}</p>
                        </div>
                        <div class="cta-actions">
                            <button class="button button--light">
                                {"Create account"}
                                <Icon glyph={Glyph::ArrowRight} />
                            </button>
                            <button class="button button--outline">{"Book a demo"}</button>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .cta {
                    position: relative;
                    padding: 4rem 0;
                }

                .cta-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .cta-panel {
                    position: relative;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 1.5rem;
                    background: linear-gradient(to right, #0284c7, #06b6d4);
                    padding: 2rem;
                    color: #ffffff;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    opacity: 0;
                    transform: scale(0.98);
                    transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                }

                .cta-panel.revealed {
                    opacity: 1;
                    transform: scale(1);
                }

                .cta-glow {
                    position: absolute;
                    inset: -1.5rem;
                    z-index: -10;
                    background: linear-gradient(to right, rgba(255, 255, 255, 0.1), transparent);
                    filter: blur(40px);
                }

                .cta-grid {
                    display: grid;
                    gap: 2rem;
                    align-items: center;
                }

                .cta-grid h3 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .cta-grid p {
                    margin: 0.5rem 0 0;
                    color: rgba(255, 255, 255, 0.9);
                }

                .cta-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                @media (min-width: 640px) {
                    .cta-panel {
                        padding: 3rem;
                    }

                    .cta-grid h3 {
                        font-size: 1.875rem;
                    }
                }

                @media (min-width: 1024px) {
                    .cta-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .cta-actions {
                        justify-content: flex-end;
                    }
                }
                "#}
            </style>
        </section>
    }
}
