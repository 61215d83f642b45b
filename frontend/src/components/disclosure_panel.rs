use gloo_timers::callback::Interval;
use web_sys::js_sys::Date;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::state::motion::{Frame, Motion, MotionAction, Phase};

/// Inner wrapper style. A block formatting context keeps child margins
/// inside the measured `scrollHeight`, so the last animated frame matches
/// the settled auto height.
const CONTENT_STYLE: &str = "display: flow-root;";

/// Inline style of the outer region for one frame. Settled regions use
/// their auto height.
fn panel_style(phase: Phase, frame: Frame, natural_height: i32) -> Option<String> {
    match phase {
        Phase::Expanded | Phase::Collapsed => None,
        phase => {
            let mut style = format!(
                "height: {:.2}px; opacity: {:.3};",
                f64::from(natural_height) * frame.extent,
                frame.opacity
            );
            if phase == Phase::Collapsing {
                style.push_str(" pointer-events: none;");
            }
            Some(style)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DisclosurePanelProps {
    pub open: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Collapsible region that slides and fades between zero height and its
/// content's natural height whenever `open` flips.
#[function_component(DisclosurePanel)]
pub fn disclosure_panel(props: &DisclosurePanelProps) -> Html {
    let motion = {
        let open = props.open;
        use_reducer(move || Motion::new(open))
    };
    let content_ref = use_node_ref();
    let last_tick = use_mut_ref(|| None::<f64>);

    {
        let motion = motion.clone();
        use_effect_with_deps(
            move |open| {
                motion.dispatch(MotionAction::Retarget(*open));
                || ()
            },
            props.open,
        );
    }

    // Frames only tick while a transition is in flight. Retargeting mid-way
    // keeps the same interval running.
    let animating = motion.is_animating();
    {
        let motion = motion.clone();
        use_effect_with_deps(
            move |animating| {
                let interval = animating.then(|| {
                    *last_tick.borrow_mut() = Some(Date::now());
                    Interval::new(config::FRAME_INTERVAL_MS, move || {
                        let now = Date::now();
                        let previous = last_tick.borrow_mut().replace(now);
                        let elapsed = previous.map_or(0.0, |previous| now - previous);
                        motion.dispatch(MotionAction::Advance(elapsed));
                    })
                });
                move || drop(interval)
            },
            animating,
        );
    }

    if !motion.is_rendered() {
        return html! {};
    }

    let frame = motion.frame();
    // Settled regions use auto height. At zero extent, the first expanding
    // frame, the content node has not been mounted yet.
    let natural_height = if motion.is_animating() && frame.extent > 0.0 {
        match content_ref.cast::<Element>() {
            Some(content) => content.scroll_height(),
            None => {
                log::warn!("disclosure content not mounted, animating from zero height");
                0
            }
        }
    } else {
        0
    };
    let style = panel_style(motion.phase(), frame, natural_height);
    let collapsing = motion.phase() == Phase::Collapsing;

    html! {
        <div
            class={classes!("disclosure-panel", props.class.clone())}
            style={style}
            aria-hidden={collapsing.then_some("true")}
        >
            <div ref={content_ref} style={CONTENT_STYLE}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_wrapper_contains_child_margins() {
        assert!(CONTENT_STYLE.contains("display: flow-root"));
    }

    #[test]
    fn last_expanding_frame_reaches_measured_height() {
        let mut motion = Motion::with_duration(false, 250.0);
        motion.retarget(true);
        motion.advance(249.999_999);
        assert_eq!(motion.phase(), Phase::Expanding);
        let style = panel_style(motion.phase(), motion.frame(), 132);
        assert_eq!(style.as_deref(), Some("height: 132.00px; opacity: 1.000;"));

        motion.advance(1.0);
        assert_eq!(panel_style(motion.phase(), motion.frame(), 132), None);
    }

    #[test]
    fn first_collapsing_frame_starts_at_measured_height() {
        let mut motion = Motion::with_duration(true, 250.0);
        assert_eq!(panel_style(motion.phase(), motion.frame(), 132), None);
        motion.retarget(false);
        let style = panel_style(motion.phase(), motion.frame(), 132);
        assert_eq!(
            style.as_deref(),
            Some("height: 132.00px; opacity: 1.000; pointer-events: none;")
        );
    }

    #[test]
    fn first_expanding_frame_has_zero_extent() {
        let mut motion = Motion::with_duration(false, 250.0);
        motion.retarget(true);
        let style = panel_style(motion.phase(), motion.frame(), 0);
        assert_eq!(style.as_deref(), Some("height: 0.00px; opacity: 0.000;"));
    }
}
