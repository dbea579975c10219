mod about;
mod contact;
mod header;
mod hero;
mod intro;
mod navigation;
mod panel;
mod projects;
mod shapes;
mod timer;

use crate::{
    log::{log_event, set_max_level, LogLevel},
    section::{panel_offset, PanelOffset, Section},
};
use about::AboutMe;
use contact::Contact;
use header::FixedHeader;
use hero::Hero;
use intro::IntroAnimation;
use navigation::use_section_navigation;
use projects::Projects;
use serde_json::json;
use web_sys::window;
use yew::prelude::*;

const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

/// Milliseconds on the page's monotonic clock.
pub(crate) fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub(crate) fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn location_section() -> Option<Section> {
    let hash = window()?.location().hash().ok()?;
    Section::from_anchor(&hash)
}

fn configure_logging() {
    let level = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|root| root.get_attribute(LOG_LEVEL_ATTRIBUTE));
    set_max_level(LogLevel::parse_or(level.as_deref(), LogLevel::Info));
}

#[derive(Properties, PartialEq)]
struct SiteProps {
    initial: Section,
}

#[function_component(Site)]
fn site(props: &SiteProps) -> Html {
    let navigation = use_section_navigation(props.initial);
    let active = navigation.section;

    let frame = |section: Section, content: Html| {
        let offset = panel_offset(section, active);
        html! {
            <section
                id={section.anchor()}
                class={classes!("panel-frame", (offset == PanelOffset::Active).then_some("is-active"))}
                style={offset.style()}
                aria-hidden={(offset != PanelOffset::Active).to_string()}
            >
                { content }
            </section>
        }
    };

    html! {
        <main
            class="site"
            onwheel={navigation.on_wheel}
            ontouchstart={navigation.on_touch_start}
            ontouchend={navigation.on_touch_end}
        >
            <FixedHeader active={active} on_navigate={navigation.navigate} />
            { frame(Section::Hero, html! { <Hero visible={active == Section::Hero} /> }) }
            { frame(Section::About, html! { <AboutMe visible={active == Section::About} /> }) }
            { frame(Section::Projects, html! { <Projects visible={active == Section::Projects} /> }) }
            { frame(Section::Contact, html! { <Contact visible={active == Section::Contact} /> }) }
        </main>
    }
}

#[function_component(App)]
fn app() -> Html {
    let deep_link = use_state(location_section);
    let initial = deep_link.unwrap_or(Section::Hero);

    html! {
        <IntroAnimation skip={deep_link.is_some()}>
            <Site initial={initial} />
        </IntroAnimation>
    }
}

pub fn run() {
    configure_logging();
    log_event(
        LogLevel::Info,
        "site_started",
        json!({ "deepLink": location_section() }),
    );

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
