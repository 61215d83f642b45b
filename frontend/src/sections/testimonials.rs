use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{Testimonial, TESTIMONIALS};
use crate::hooks::in_view::use_in_view;

#[derive(Properties, PartialEq)]
struct QuoteProps {
    testimonial: Testimonial,
    order: usize,
}

#[function_component(Quote)]
fn quote(props: &QuoteProps) -> Html {
    let quote_ref = use_node_ref();
    let revealed = use_in_view(quote_ref.clone(), 0.0);
    let Testimonial { quote, name, role } = props.testimonial;

    html! {
        <blockquote
            ref={quote_ref}
            class={classes!("quote", "reveal-item", revealed.then_some("revealed"))}
            style={format!("transition-delay: {:.1}s;", 0.1 * props.order as f64)}
        >
            <div class="quote-stars">
                { for (0..5).map(|i| html! { <Icon key={i} glyph={Glyph::Star} /> }) }
            </div>
            <p>{format!("\u{201c}{}\u{201d}", quote)}</p>
            <footer>
                <span class="quote-name">{name}</span>{format!(" \u{2013} {}", role)}
            </footer>
        </blockquote>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <div class="testimonials-inner">
                <div class="section-heading">
                    <h2>{"Dentists love SmilesCloud"}</h2>
                    <p>{"Real stories from teams who upgraded their practice."}</p>
                </div>
                <div class="quote-grid">
                    {
                        TESTIMONIALS.iter().enumerate().map(|(order, testimonial)| html! {
                            <Quote key={testimonial.name} testimonial={*testimonial} {order} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    position: relative;
                    padding: 5rem 0;
                }

                .testimonials-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .quote-grid {
                    margin-top: 2.5rem;
                    display: grid;
                    gap: 1.5rem;
                }

                .quote {
                    margin: 0;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.7);
                    padding: 1.5rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    backdrop-filter: blur(8px);
                }

                .quote-stars {
                    display: flex;
                    gap: 0.5rem;
                    color: #facc15;
                }

                .quote-stars .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .quote p {
                    margin: 0.75rem 0 0;
                    color: #334155;
                }

                .quote footer {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #64748b;
                }

                .quote-name {
                    font-weight: 600;
                    color: #334155;
                }

                @media (min-width: 768px) {
                    .quote-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
