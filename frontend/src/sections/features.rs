use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::config;
use crate::content::{Feature, FEATURES};
use crate::hooks::in_view::use_in_view;

/// Seconds between consecutive children of a revealed group.
const STAGGER_S: f64 = 0.12;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
    order: usize,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let Feature { icon, title, description } = props.feature;
    html! {
        <div
            class="feature-card reveal-item"
            style={format!("transition-delay: {:.2}s;", STAGGER_S * (props.order + 2) as f64)}
        >
            <div class="feature-card-wash"></div>
            <div class="feature-card-body">
                <div class="feature-icon"><Icon glyph={Glyph::Feature(icon)} /></div>
                <div>
                    <h3>{title}</h3>
                    <p>{description}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    let group_ref = use_node_ref();
    let revealed = use_in_view(group_ref.clone(), config::REVEAL_AMOUNT);

    html! {
        <section id="features" class="features">
            <div
                ref={group_ref}
                class={classes!("features-inner", "reveal-group", revealed.then_some("revealed"))}
            >
                <h2 class="section-title reveal-item">{"Built for modern dental teams"}</h2>
                <p
                    class="section-subtitle reveal-item"
                    style={format!("transition-delay: {:.2}s;", STAGGER_S)}
                >
                    {"Streamline your operations with automation and delightful patient experiences."}
                </p>

                <div class="feature-grid">
                    {
                        FEATURES.iter().enumerate().map(|(order, feature)| html! {
                            <FeatureCard key={feature.title} feature={*feature} {order} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .features {
                    position: relative;
                    padding: 5rem 0;
                }

                .features-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .feature-grid {
                    margin-top: 3rem;
                    display: grid;
                    gap: 1.5rem;
                }

                .feature-card {
                    position: relative;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.7);
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    backdrop-filter: blur(8px);
                }

                .revealed .feature-card:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .feature-card-wash {
                    position: absolute;
                    inset: 0;
                    border-radius: 1rem;
                    background: linear-gradient(135deg, #f0f9ff, #ecfeff);
                    opacity: 0;
                    transition: opacity 0.2s;
                }

                .feature-card:hover .feature-card-wash {
                    opacity: 1;
                }

                .feature-card-body {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                }

                .feature-icon {
                    display: inline-flex;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #e0f2fe, #cffafe);
                    color: #0369a1;
                }

                .feature-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .feature-card h3 {
                    margin: 0 0 0.25rem;
                    font-weight: 600;
                    color: #1e293b;
                }

                .feature-card p {
                    margin: 0;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    color: #475569;
                }

                @media (min-width: 768px) {
                    .feature-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .feature-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
