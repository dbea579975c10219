use super::{now_ms, timer::Timeout};
use crate::{
    intro::{IntroPhase, IntroSequence, GREETING_TEXT, WELCOME_TEXT},
    log::{log_event, LogLevel},
};
use serde_json::json;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IntroAnimationProps {
    /// Start directly in the terminal phase.
    #[prop_or_default]
    pub skip: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(IntroAnimation)]
pub fn intro_animation(props: &IntroAnimationProps) -> Html {
    let skip = props.skip;
    let phase = use_state_eq(|| {
        if skip {
            IntroPhase::Main
        } else {
            IntroSequence::initial()
        }
    });

    {
        let phase = phase.clone();
        use_effect_with((), move |_| {
            let timers: Vec<Timeout> = if skip {
                Vec::new()
            } else {
                let started = now_ms();
                IntroSequence::timed_steps()
                    .iter()
                    .filter_map(|&(at, _)| {
                        let phase = phase.clone();
                        Timeout::new(at, move || {
                            let next = IntroSequence::phase_when_fired(at, now_ms() - started);
                            log_event(LogLevel::Debug, "intro_phase", json!({ "phase": next }));
                            phase.set(next);
                        })
                    })
                    .collect()
            };

            move || drop(timers)
        });
    }

    if phase.is_terminal() {
        return props.children.clone();
    }

    let fade_class = if phase.is_fading() { "fade-out" } else { "fade-in" };

    html! {
        <div class="intro">
            <div class="intro-text">
                if phase.greeting_visible() {
                    <h1 class={classes!("intro-greeting", fade_class)}>{GREETING_TEXT}</h1>
                }
                if phase.welcome_visible() {
                    <h1 class={classes!("intro-welcome", fade_class)}>{WELCOME_TEXT}</h1>
                }
            </div>
        </div>
    }
}
