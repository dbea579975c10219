use super::{panel::use_panel_animation, timer::Timeout};
use crate::{
    about::{AboutMode, ModeFade},
    content::about_content,
    log::{log_event, LogLevel},
    visibility::PanelTimings,
};
use serde_json::json;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AboutMeProps {
    pub visible: bool,
}

#[function_component(AboutMe)]
pub fn about_me(props: &AboutMeProps) -> Html {
    let animate = use_panel_animation(props.visible, PanelTimings::ABOUT);
    let requested = use_state_eq(|| AboutMode::Developer);
    let displayed = use_state_eq(|| AboutMode::Developer);
    let fading = use_state_eq(|| false);
    let fade = use_mut_ref(|| ModeFade::new(AboutMode::Developer));

    {
        let displayed = displayed.clone();
        let fading = fading.clone();
        use_effect_with(*requested, move |&mode| {
            let armed = fade.borrow_mut().request(mode);
            fading.set(fade.borrow().is_fading());

            let timer = armed.and_then(|(token, delay)| {
                let fade = fade.clone();
                let fading = fading.clone();
                Timeout::new(delay, move || {
                    if let Some(mode) = fade.borrow_mut().fire(token) {
                        log_event(LogLevel::Debug, "about_mode_shown", json!({ "mode": mode }));
                        displayed.set(mode);
                        fading.set(false);
                    }
                })
            });

            move || drop(timer)
        });
    }

    let toggle = |mode: AboutMode| {
        let requested = requested.clone();
        let is_selected = *requested == mode;
        let onclick = Callback::from(move |_: MouseEvent| requested.set(mode));

        html! {
            <button
                type="button"
                class={classes!("mode-toggle", is_selected.then_some("is-selected"))}
                aria-pressed={is_selected.to_string()}
                onclick={onclick}
            >
                {mode.label()}
            </button>
        }
    };

    let content = about_content(*displayed);
    let highlights = content.highlights.iter().map(|highlight| {
        html! {
            <article class="highlight-card">
                <h3>{highlight.title}</h3>
                <p>{highlight.body}</p>
            </article>
        }
    });

    html! {
        <div class={classes!("about", "panel-content", animate.then_some("is-animated"))}>
            <div class="mode-switch" role="group" aria-label="About mode">
                { toggle(AboutMode::Developer) }
                { toggle(AboutMode::Business) }
            </div>
            <div class={classes!("about-body", fading.then_some("is-fading"))}>
                <img class="about-portrait" src={content.portrait} alt="Portrait of Steve Alden" />
                <div class="about-copy">
                    <div class="eyebrow">{content.eyebrow}</div>
                    <h2 class="about-heading">{content.heading}</h2>
                    <p class="about-summary">{content.summary}</p>
                    <div class="highlight-grid">
                        { for highlights }
                    </div>
                </div>
            </div>
        </div>
    }
}
