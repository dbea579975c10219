use super::{now_ms, timer::Timeout};
use crate::{
    log::{log_event, LogLevel},
    section::{NavTimings, Section, SectionController, Transition},
};
use serde_json::json;
use web_sys::{TouchEvent, WheelEvent};
use yew::prelude::*;

pub struct SectionNavigation {
    pub section: Section,
    pub navigate: Callback<Section>,
    pub on_wheel: Callback<WheelEvent>,
    pub on_touch_start: Callback<TouchEvent>,
    pub on_touch_end: Callback<TouchEvent>,
}

fn commit(section: &UseStateHandle<Section>, transition: Option<Transition>, source: &str) {
    let Some(transition) = transition else {
        return;
    };

    log_event(
        LogLevel::Info,
        "section_changed",
        json!({ "from": transition.from, "to": transition.to, "source": source }),
    );
    section.set(transition.to);
}

fn log_ignored(controller: &SectionController, now: f64, source: &str) {
    if controller.is_locked(now) {
        log_event(
            LogLevel::Debug,
            "input_ignored",
            json!({ "source": source, "reason": "transition_lock" }),
        );
    }
}

#[hook]
pub fn use_section_navigation(initial: Section) -> SectionNavigation {
    let section = use_state_eq(|| initial);
    let controller = use_mut_ref(|| SectionController::new(initial, NavTimings::default()));
    let wheel_timer = use_mut_ref(|| None::<Timeout>);

    let on_wheel = {
        let section = section.clone();
        let controller = controller.clone();
        let wheel_timer = wheel_timer.clone();
        Callback::from(move |event: WheelEvent| {
            let now = now_ms();
            let ticket = controller.borrow_mut().on_wheel(event.delta_y(), now);
            let Some(ticket) = ticket else {
                log_ignored(&controller.borrow(), now, "wheel");
                return;
            };

            let section = section.clone();
            let controller = controller.clone();
            // Replacing the slot cancels the previous timer of the burst.
            *wheel_timer.borrow_mut() = Timeout::new(ticket.delay_ms, move || {
                let transition = controller.borrow_mut().fire_wheel(ticket, now_ms());
                commit(&section, transition, "wheel");
            });
        })
    };

    let on_touch_start = {
        let controller = controller.clone();
        Callback::from(move |event: TouchEvent| {
            if let Some(touch) = event.touches().item(0) {
                controller
                    .borrow_mut()
                    .on_touch_start(f64::from(touch.client_y()));
            }
        })
    };

    let on_touch_end = {
        let section = section.clone();
        let controller = controller.clone();
        Callback::from(move |event: TouchEvent| {
            let Some(touch) = event.changed_touches().item(0) else {
                return;
            };
            let now = now_ms();
            let transition = controller
                .borrow_mut()
                .on_touch_end(f64::from(touch.client_y()), now);
            if transition.is_none() {
                log_ignored(&controller.borrow(), now, "touch");
            }
            commit(&section, transition, "touch");
        })
    };

    let navigate = {
        let section = section.clone();
        let controller = controller.clone();
        Callback::from(move |target: Section| {
            let now = now_ms();
            let transition = controller.borrow_mut().navigate_to(target, now);
            if transition.is_none() {
                log_ignored(&controller.borrow(), now, "click");
            }
            commit(&section, transition, "click");
        })
    };

    SectionNavigation {
        section: *section,
        navigate,
        on_wheel,
        on_touch_start,
        on_touch_end,
    }
}
