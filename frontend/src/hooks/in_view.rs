use web_sys::{Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Share of an element's height that sits inside a viewport of
/// `viewport_height`, given its bounding box relative to the viewport top.
pub fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return if top >= 0.0 && top <= viewport_height { 1.0 } else { 0.0 };
    }
    let visible = (bottom.min(viewport_height) - top.max(0.0)).max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

fn has_reached(node: &NodeRef, amount: f64) -> bool {
    let Some(element) = node.cast::<Element>() else {
        return false;
    };
    let viewport_height = web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64());
    match viewport_height {
        Some(viewport_height) => {
            let rect = element.get_bounding_client_rect();
            let fraction = visible_fraction(rect.top(), rect.bottom(), viewport_height);
            fraction > 0.0 && fraction >= amount
        }
        None => {
            log::warn!("viewport height unavailable, revealing section immediately");
            true
        }
    }
}

/// Latches `true` the first time `amount` of the element is on screen.
/// An `amount` of zero fires as soon as any part of it is visible.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64) -> bool {
    let seen = use_state_eq(|| false);

    let check = {
        let seen = seen.clone();
        let node = node.clone();
        move || {
            if !*seen && has_reached(&node, amount) {
                seen.set(true);
            }
        }
    };

    {
        let check = check.clone();
        use_effect_with_deps(
            move |_| {
                check();
                || ()
            },
            (),
        );
    }

    {
        let check = check.clone();
        use_event_with_window("scroll", move |_: Event| check());
    }
    use_event_with_window("resize", move |_: Event| check());

    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_inside_viewport() {
        assert_eq!(visible_fraction(100.0, 300.0, 800.0), 1.0);
    }

    #[test]
    fn below_the_fold() {
        assert_eq!(visible_fraction(900.0, 1200.0, 800.0), 0.0);
    }

    #[test]
    fn scrolled_past() {
        assert_eq!(visible_fraction(-500.0, -100.0, 800.0), 0.0);
    }

    #[test]
    fn partially_visible_at_bottom_edge() {
        let fraction = visible_fraction(700.0, 1100.0, 800.0);
        assert!((fraction - 0.25).abs() < 1e-9);
    }

    #[test]
    fn taller_than_viewport() {
        let fraction = visible_fraction(-200.0, 1800.0, 800.0);
        assert!((fraction - 0.4).abs() < 1e-9);
    }

    #[test]
    fn empty_element_counts_when_on_screen() {
        assert_eq!(visible_fraction(10.0, 10.0, 800.0), 1.0);
        assert_eq!(visible_fraction(900.0, 900.0, 800.0), 0.0);
    }
}
