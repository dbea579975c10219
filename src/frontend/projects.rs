use super::panel::use_panel_animation;
use crate::{
    content::{find_project, toggle_expanded, Project, PROJECTS},
    log::{log_event, LogLevel},
    visibility::PanelTimings,
};
use serde_json::json;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct ProjectRowProps {
    project: &'static Project,
    expanded: bool,
    last: bool,
    on_toggle: Callback<&'static str>,
}

#[function_component(ProjectRow)]
fn project_row(props: &ProjectRowProps) -> Html {
    let project = props.project;

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(project.id))
    };

    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" || event.key() == " " {
                event.prevent_default();
                on_toggle.emit(project.id);
            }
        })
    };

    let images = project.images.iter().enumerate().map(|(index, src)| {
        let style = format!("transition-delay: {}ms;", 100 + index * 70);
        html! {
            <div class="project-image" style={style}>
                <img src={*src} alt={format!("{} {}", project.title, index + 1)} loading="lazy" />
            </div>
        }
    });

    let tags = project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> });

    let arrow = project.url.map(|url| {
        html! {
            <a
                class="project-arrow"
                href={url}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={format!("open {}", project.title)}
                onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
            >
                <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                    <line x1="7" y1="17" x2="17" y2="7" />
                    <polyline points="7 7 17 7 17 17" />
                </svg>
                <span class="sr-only">{" (opens in a new tab)"}</span>
            </a>
        }
    });

    html! {
        <div
            role="button"
            tabindex="0"
            aria-expanded={props.expanded.to_string()}
            class={classes!(
                "project-row",
                props.expanded.then_some("is-expanded"),
                props.last.then_some("is-last"),
            )}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <div class="project-heading">
                <div class="project-title-line">
                    <h3>{project.title}</h3>
                    if let Some(subtitle) = project.subtitle {
                        <span class="project-subtitle">{subtitle}</span>
                    }
                </div>
                <div class="project-year">{format!("• {}", project.year)}</div>
                <div class="project-images">
                    { for images }
                </div>
            </div>
            <p class="project-description">{project.description}</p>
            <div class="project-meta">
                <div class="project-tags">
                    { for tags }
                </div>
                { for arrow }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub visible: bool,
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let animate = use_panel_animation(props.visible, PanelTimings::PROJECTS);
    let expanded = use_state_eq(|| None::<&'static str>);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: &'static str| {
            let next = toggle_expanded(*expanded, id);
            log_event(
                LogLevel::Debug,
                "project_toggled",
                json!({
                    "project": find_project(id).map(|project| project.title),
                    "expanded": next.is_some(),
                }),
            );
            expanded.set(next);
        })
    };

    let rows = PROJECTS.iter().enumerate().map(|(index, project)| {
        html! {
            <ProjectRow
                key={project.id}
                project={project}
                expanded={*expanded == Some(project.id)}
                last={index + 1 == PROJECTS.len()}
                on_toggle={on_toggle.clone()}
            />
        }
    });

    html! {
        <div class={classes!("projects", "panel-content", animate.then_some("is-animated"))}>
            <div class="panel-title">
                <div class="eyebrow">{"/ projects"}</div>
                <h1>{"Explore My"}<br />{"Projects"}</h1>
            </div>
            <div class="project-list">
                { for rows }
            </div>
        </div>
    }
}
