use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{PricingTier, PRICING_TIERS};

#[derive(Properties, PartialEq)]
struct PricingCardProps {
    tier: PricingTier,
}

#[function_component(PricingCard)]
fn pricing_card(props: &PricingCardProps) -> Html {
    let tier = props.tier;
    html! {
        <div class={classes!("pricing-card", "lift", tier.highlighted.then_some("pricing-card--highlighted"))}>
            if tier.highlighted {
                <div class="popular-badge">{"Most Popular"}</div>
            }
            <h4>{tier.name}</h4>
            <div class="price">
                <span class="price-amount">{format!("${}", tier.monthly_price)}</span>
                <span class="price-period">{"/mo"}</span>
            </div>
            <ul class="tier-features">
                {
                    tier.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <Icon glyph={Glyph::Check} />
                            {*feature}
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <button class={classes!("button", "tier-cta", if tier.highlighted { "button--primary" } else { "button--dark" })}>
                {"Start free trial"}
                <Icon glyph={Glyph::ArrowRight} />
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="pricing">
            <div class="pricing-inner">
                <div class="section-heading">
                    <h2>{"Simple pricing"}</h2>
                    <p>{"Start free, upgrade when you grow."}</p>
                </div>
                <div class="pricing-grid">
                    {
                        PRICING_TIERS.iter().map(|tier| html! {
                            <PricingCard key={tier.name} tier={*tier} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .pricing {
                    position: relative;
                    padding: 5rem 0;
                    background: linear-gradient(to bottom, #ffffff, rgba(240, 249, 255, 0.6));
                }

                .pricing-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .pricing-grid {
                    margin-top: 3rem;
                    display: grid;
                    gap: 1.5rem;
                }

                .pricing-card {
                    position: relative;
                    border: 1px solid rgba(255, 255, 255, 0.6);
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.7);
                    padding: 1.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    backdrop-filter: blur(16px);
                }

                .pricing-card--highlighted {
                    border-color: #bae6fd;
                    background: rgba(255, 255, 255, 0.8);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .popular-badge {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    transform: translateX(-50%);
                    border-radius: 9999px;
                    background: #0284c7;
                    color: #ffffff;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                }

                .pricing-card h4 {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1e293b;
                }

                .price {
                    margin-top: 1rem;
                    display: flex;
                    align-items: flex-end;
                    gap: 0.25rem;
                }

                .price-amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #0f172a;
                }

                .price-period {
                    color: #64748b;
                }

                .tier-features {
                    margin: 1.5rem 0 0;
                    padding: 0;
                    list-style: none;
                    display: grid;
                    gap: 0.75rem;
                }

                .tier-features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .tier-features .icon {
                    width: 1.125rem;
                    height: 1.125rem;
                    margin-top: 0.125rem;
                    color: #0284c7;
                }

                .tier-cta {
                    margin-top: 1.5rem;
                    width: 100%;
                    justify-content: center;
                }

                @media (min-width: 768px) {
                    .pricing-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
