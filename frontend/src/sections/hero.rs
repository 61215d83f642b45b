use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{revenue_bar_peak, stat_bar_percent, FeatureIcon, DASHBOARD_STATS};

const RATING_STARS: usize = 5;
const REVENUE_BARS: usize = 16;

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class="badge">
            <Icon glyph={Glyph::Sparkles} />
            { for props.children.iter() }
        </span>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glows">
                <div class="hero-glow hero-glow--left glow-pulse"></div>
                <div class="hero-glow hero-glow--right glow-pulse glow-pulse--slow"></div>
            </div>

            <div class="hero-grid">
                <div class="hero-copy stagger">
                    <Badge>{"Modern dental SaaS for growing practices"}</Badge>
                    <h1>{"Give your patients a brilliant experience"}</h1>
                    <p class="hero-lead">
                        {"All-in-one platform for scheduling, reminders, billing and insights. Designed with dentists, for dentists."}
                    </p>
                    <div class="hero-actions">
                        <button class="button button--primary">
                            {"Start free trial"}
                            <Icon glyph={Glyph::ArrowRight} />
                        </button>
                        <button class="button button--ghost">{"See how it works"}</button>
                    </div>
                    <div class="hero-rating">
                        {
                            (0..RATING_STARS).map(|i| html! {
                                <Icon key={i} glyph={Glyph::Star} class={if i < 4 { "star" } else { "star star--soft" }} />
                            }).collect::<Html>()
                        }
                        <span>{"Loved by 1,200+ dental teams"}</span>
                    </div>
                </div>

                <div class="mockup">
                    <div class="mockup-glow glow-pulse"></div>
                    <div class="mockup-frame">
                        <div class="mockup-screen">
                            <div class="mockup-header">
                                <div class="mockup-title">
                                    <div class="mockup-logo"><Icon glyph={Glyph::Tooth} /></div>
                                    <div>
                                        <p class="mockup-day">{"Today"}</p>
                                        <p class="mockup-caption">{"Appointments"}</p>
                                    </div>
                                </div>
                                <Badge>{"Live"}</Badge>
                            </div>

                            <div class="mockup-stats">
                                {
                                    DASHBOARD_STATS.iter().enumerate().map(|(i, stat)| html! {
                                        <div key={stat.label} class="stat-card lift">
                                            <div class="stat-label">
                                                <span class="stat-icon"><Icon glyph={Glyph::Feature(stat.icon)} /></span>
                                                <span>{stat.label}</span>
                                            </div>
                                            <div class="stat-value">{stat.value}</div>
                                            <div class="stat-track">
                                                <div
                                                    class="stat-fill"
                                                    style={format!("--fill: {}%; animation-delay: {:.1}s;", stat_bar_percent(i), 0.2 * i as f64)}
                                                ></div>
                                            </div>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>

                            <div class="forecast">
                                <div class="forecast-title">
                                    <span class="forecast-icon">
                                        <Icon glyph={Glyph::Feature(FeatureIcon::LineChart)} />
                                    </span>
                                    <span>{"Revenue forecast"}</span>
                                </div>
                                <div class="forecast-bars">
                                    {
                                        (0..REVENUE_BARS).map(|i| html! {
                                            <div
                                                key={i}
                                                class="forecast-bar"
                                                style={format!("--peak: {:.1}px; animation-delay: {:.2}s;", revenue_bar_peak(i), 0.05 * i as f64)}
                                            ></div>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 7rem 0 6rem;
                }

                .hero-glows {
                    position: absolute;
                    inset: 0;
                    z-index: -10;
                }

                .hero-glow {
                    position: absolute;
                    border-radius: 9999px;
                }

                .hero-glow--left {
                    top: 6rem;
                    left: -2.5rem;
                    width: 14rem;
                    height: 14rem;
                    background: rgba(186, 230, 253, 0.6);
                    filter: blur(60px);
                }

                .hero-glow--right {
                    bottom: -2.5rem;
                    right: -2.5rem;
                    width: 18rem;
                    height: 18rem;
                    background: rgba(165, 243, 252, 0.6);
                    filter: blur(70px);
                }

                .hero-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy h1 {
                    margin-top: 1rem;
                    font-size: 2.25rem;
                    font-weight: 800;
                    line-height: 1.15;
                    letter-spacing: -0.025em;
                }

                .hero-lead {
                    margin-top: 1rem;
                    font-size: 1.125rem;
                    color: #475569;
                }

                .hero-actions {
                    margin-top: 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }

                .hero-rating {
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    gap: 1.25rem;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .star {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #facc15;
                }

                .star--soft {
                    color: #fde047;
                }

                .mockup {
                    position: relative;
                    width: 100%;
                    max-width: 32rem;
                    margin: 0 auto;
                    opacity: 0;
                    animation: rise 0.7s ease-out forwards;
                }

                .mockup-glow {
                    position: absolute;
                    inset: -1.5rem;
                    z-index: -10;
                    border-radius: 32px;
                    background: linear-gradient(135deg, rgba(125, 211, 252, 0.4), rgba(103, 232, 249, 0.4));
                    filter: blur(40px);
                }

                .mockup-frame {
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 28px;
                    background: rgba(255, 255, 255, 0.8);
                    padding: 1rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    backdrop-filter: blur(8px);
                }

                .mockup-screen {
                    border-radius: 1rem;
                    background: linear-gradient(to bottom, #f0f9ff, #ffffff);
                    padding: 1rem;
                }

                .mockup-header, .mockup-title {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.5rem;
                }

                .mockup-logo {
                    display: grid;
                    place-items: center;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.75rem;
                    background: #e0f2fe;
                    color: #0369a1;
                }

                .mockup-logo .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .mockup-day {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .mockup-caption {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #64748b;
                }

                .mockup-stats {
                    margin-top: 1rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.75rem;
                }

                .stat-card {
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.8);
                    padding: 0.75rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                }

                .stat-label {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: #64748b;
                }

                .stat-icon, .forecast-icon {
                    display: inline-flex;
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: #e0f2fe;
                    color: #0369a1;
                }

                .stat-icon .icon, .forecast-icon .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .stat-value {
                    margin-top: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .stat-track {
                    margin-top: 0.5rem;
                    height: 0.375rem;
                    border-radius: 0.25rem;
                    background: #e0f2fe;
                }

                .stat-fill {
                    height: 0.375rem;
                    width: 0;
                    border-radius: 0.25rem;
                    background: #0ea5e9;
                    animation: fill-bar 1s ease forwards;
                }

                @keyframes fill-bar {
                    from { width: 0; }
                    to { width: var(--fill); }
                }

                .forecast {
                    margin-top: 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.8);
                    padding: 1rem;
                }

                .forecast-title {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .forecast-icon {
                    background: #cffafe;
                    color: #0e7490;
                }

                .forecast-bars {
                    margin-top: 0.75rem;
                    display: flex;
                    align-items: flex-end;
                    gap: 0.25rem;
                    height: 6rem;
                }

                .forecast-bar {
                    width: 0.75rem;
                    height: 6px;
                    border-radius: 0.25rem;
                    background: linear-gradient(to top, #bae6fd, #0ea5e9);
                    animation: bar-swing 1.2s ease-in-out infinite alternate;
                }

                @keyframes bar-swing {
                    from { height: 6px; }
                    to { height: var(--peak); }
                }

                @media (min-width: 640px) {
                    .hero-copy h1 {
                        font-size: 3rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .hero-copy h1 {
                        font-size: 3.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
