use yew::prelude::*;

use crate::content::FeatureIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Tooth,
    Menu,
    Close,
    Plus,
    Minus,
    Star,
    ArrowRight,
    Check,
    Sparkles,
    Feature(FeatureIcon),
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub glyph: Glyph,
    #[prop_or_default]
    pub class: Classes,
}

/// Stroke-drawn 24x24 icon.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { paths(props.glyph) }
        </svg>
    }
}

fn paths(glyph: Glyph) -> Html {
    match glyph {
        Glyph::Tooth => html! {
            <path d="M7 3c-2.2 0-4 1.8-4 4.2 0 2.4 1 4 1.6 6.3.6 2.3.8 7.5 2.9 7.5 1.9 0 1.8-5 4.5-5s2.6 5 4.5 5c2.1 0 2.3-5.2 2.9-7.5.6-2.3 1.6-3.9 1.6-6.3C21 4.8 19.2 3 17 3c-2 0-3 1-5 1S9 3 7 3z" />
        },
        Glyph::Menu => html! {
            <>
                <line x1="4" y1="6" x2="20" y2="6" />
                <line x1="4" y1="12" x2="20" y2="12" />
                <line x1="4" y1="18" x2="20" y2="18" />
            </>
        },
        Glyph::Close => html! {
            <>
                <line x1="18" y1="6" x2="6" y2="18" />
                <line x1="6" y1="6" x2="18" y2="18" />
            </>
        },
        Glyph::Plus => html! {
            <>
                <line x1="12" y1="5" x2="12" y2="19" />
                <line x1="5" y1="12" x2="19" y2="12" />
            </>
        },
        Glyph::Minus => html! { <line x1="5" y1="12" x2="19" y2="12" /> },
        Glyph::Star => html! {
            <polygon points="12 2 15.1 8.3 22 9.3 17 14.1 18.2 21 12 17.8 5.8 21 7 14.1 2 9.3 8.9 8.3 12 2" fill="currentColor" />
        },
        Glyph::ArrowRight => html! {
            <>
                <line x1="5" y1="12" x2="19" y2="12" />
                <polyline points="12 5 19 12 12 19" />
            </>
        },
        Glyph::Check => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="8 12 11 15 16 9" />
            </>
        },
        Glyph::Sparkles => html! {
            <path d="M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9L12 3z" />
        },
        Glyph::Feature(FeatureIcon::Calendar) => html! {
            <>
                <rect x="3" y="4" width="18" height="18" rx="2" />
                <line x1="16" y1="2" x2="16" y2="6" />
                <line x1="8" y1="2" x2="8" y2="6" />
                <line x1="3" y1="10" x2="21" y2="10" />
            </>
        },
        Glyph::Feature(FeatureIcon::Message) => html! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        },
        Glyph::Feature(FeatureIcon::Shield) => html! {
            <>
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
                <polyline points="9 12 11 14 15 10" />
            </>
        },
        Glyph::Feature(FeatureIcon::CreditCard) => html! {
            <>
                <rect x="2" y="5" width="20" height="14" rx="2" />
                <line x1="2" y1="10" x2="22" y2="10" />
            </>
        },
        Glyph::Feature(FeatureIcon::LineChart) => html! {
            <>
                <polyline points="3 3 3 21 21 21" />
                <polyline points="7 15 11 10 14 13 20 7" />
            </>
        },
        Glyph::Feature(FeatureIcon::Wand) => html! {
            <>
                <line x1="4" y1="20" x2="16" y2="8" />
                <path d="M15 4V2M15 10V8M19 6h2M11 6h2M17.8 3.2l1.4-1.4M12.2 8.8l-1.4 1.4M17.8 8.8l1.4 1.4" />
            </>
        },
    }
}
