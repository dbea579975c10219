use crate::{
    content::{LOGO_HEAD, LOGO_TAIL},
    header::{nav_is_active, LogoState},
    section::Section,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FixedHeaderProps {
    pub active: Section,
    pub on_navigate: Callback<Section>,
}

#[function_component(FixedHeader)]
pub fn fixed_header(props: &FixedHeaderProps) -> Html {
    let logo = use_state_eq(|| LogoState::new(props.active));

    {
        let logo = logo.clone();
        use_effect_with(props.active, move |&active| {
            logo.set((*logo).synced(active));
            || ()
        });
    }

    let on_logo = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Hero))
    };

    let squares = Section::ALL.into_iter().map(|section| {
        let is_active = nav_is_active(section, props.active);
        let onclick = {
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(section))
        };
        let delay = format!("animation-delay: {:.1}s;", 2.4 + 0.2 * section.index() as f64);

        html! {
            <button
                type="button"
                class={classes!("nav-square", is_active.then_some("is-diamond"))}
                style={delay}
                aria-label={section.label()}
                aria-current={is_active.then_some("true")}
                onclick={onclick}
            />
        }
    });

    html! {
        <header class="fixed-header">
            <button
                key={logo.generation.to_string()}
                type="button"
                class={classes!("logo", logo.on_hero.then_some("is-on-hero"))}
                aria-label="Back to start"
                onclick={on_logo}
            >
                <span class="logo-head">{LOGO_HEAD}</span>
                <span class="logo-tail">
                    <span class="logo-tail-text">{LOGO_TAIL}</span>
                </span>
                <span class="logo-dot">{"."}</span>
            </button>
            <nav class="nav-squares" aria-label="Sections">
                { for squares }
            </nav>
        </header>
    }
}
