use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::disclosure_panel::DisclosurePanel;
use crate::components::icons::{Glyph, Icon};
use crate::config;
use crate::content::{FaqEntry, FAQ_ENTRIES};
use crate::state::accordion::{AccordionAction, AccordionState};

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    #[prop_or(FAQ_ENTRIES)]
    pub entries: &'static [FaqEntry],
    #[prop_or(config::DEFAULT_FAQ_OPEN)]
    pub default_open: Option<usize>,
}

/// Question list where expanding one answer collapses the rest.
#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let accordion = {
        let len = props.entries.len();
        let default_open = props.default_open;
        use_reducer(move || AccordionState::new(len, default_open))
    };

    let toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            accordion.dispatch(AccordionAction::Toggle(index));
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-inner">
                <div class="section-heading">
                    <h2>{"Frequently asked questions"}</h2>
                    <p>{"Everything you need to know before getting started."}</p>
                </div>

                <div class="faq-list">
                    {
                        props.entries.iter().enumerate().map(|(index, entry)| {
                            let is_open = accordion.is_open(index);
                            let onclick = toggle.reform(move |e: MouseEvent| {
                                e.prevent_default();
                                index
                            });
                            html! {
                                <div key={index} class={classes!("faq-item", is_open.then_some("open"))}>
                                    <button
                                        class="faq-question"
                                        aria-expanded={accordion.aria_expanded(index)}
                                        {onclick}
                                    >
                                        <span class="question-text">{entry.question}</span>
                                        <span class="toggle-icon">
                                            <Icon glyph={if is_open { Glyph::Minus } else { Glyph::Plus }} />
                                        </span>
                                    </button>
                                    <DisclosurePanel open={is_open} class="faq-answer">
                                        <p>{entry.answer}</p>
                                    </DisclosurePanel>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .faq-section {
                    position: relative;
                    padding: 5rem 0;
                }

                .faq-inner {
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .faq-list {
                    margin-top: 2.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.7);
                    backdrop-filter: blur(8px);
                }

                .faq-item {
                    padding: 1.25rem;
                }

                .faq-item + .faq-item {
                    border-top: 1px solid rgba(255, 255, 255, 0.7);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    border: none;
                    background: none;
                    padding: 0;
                    text-align: left;
                    font: inherit;
                    cursor: pointer;
                }

                .question-text {
                    padding-right: 1.5rem;
                    font-weight: 500;
                    color: #1e293b;
                }

                .toggle-icon {
                    flex-shrink: 0;
                    display: inline-flex;
                    border: 1px solid rgba(255, 255, 255, 0.7);
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.7);
                    padding: 0.375rem;
                    color: #334155;
                }

                .toggle-icon .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .faq-answer {
                    overflow: hidden;
                }

                .faq-answer p {
                    margin: 0.75rem 0 0;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    color: #475569;
                }

                @media (min-width: 640px) {
                    .faq-item {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
