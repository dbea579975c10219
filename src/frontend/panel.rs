use super::timer::Timeout;
use crate::visibility::{PanelTimings, PanelVisibility};
use yew::prelude::*;

/// Debounced animate flag for a panel that is always mounted and only moved
/// on and off screen.
#[hook]
pub fn use_panel_animation(visible: bool, timings: PanelTimings) -> bool {
    let animate = use_state_eq(|| false);
    let machine = use_mut_ref(|| PanelVisibility::new(timings));

    {
        let animate = animate.clone();
        use_effect_with(visible, move |&visible| {
            let scheduled = machine.borrow_mut().set_visible(visible);
            let timer = scheduled.and_then(|scheduled| {
                let machine = machine.clone();
                let animate = animate.clone();
                Timeout::new(scheduled.delay_ms, move || {
                    if let Some(next) = machine.borrow_mut().fire(scheduled.token) {
                        animate.set(next);
                    }
                })
            });

            if scheduled.is_none() {
                animate.set(machine.borrow().should_animate());
            }

            move || drop(timer)
        });
    }

    *animate
}
