use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::content::{footer_links, BRAND};

fn copyright(year: i32) -> String {
    format!("{} \u{a9} {}", BRAND, year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <Icon glyph={Glyph::Tooth} />
                    <span>{copyright(year)}</span>
                </div>
                <div class="footer-links">
                    {
                        footer_links().iter().map(|link| html! {
                            <a key={link.anchor} href={link.href()}>{link.label}</a>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 2rem 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.6);
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(8px);
                }

                .footer-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #475569;
                }

                .footer-brand, .footer-links {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .footer-brand .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #0369a1;
                }

                .footer-links {
                    gap: 1rem;
                }

                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: #0f172a;
                }

                @media (min-width: 640px) {
                    .footer-inner {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_brand_and_year() {
        assert_eq!(copyright(2026), "SmilesCloud \u{a9} 2026");
    }
}
