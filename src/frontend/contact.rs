use super::panel::use_panel_animation;
use crate::{
    content::{SocialIcon, CONTACT_FOOTER, CONTACT_PITCH, SOCIAL_LINKS},
    visibility::PanelTimings,
};
use yew::prelude::*;

fn icon(kind: SocialIcon) -> Html {
    let paths = match kind {
        SocialIcon::LinkedIn => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect x="2" y="9" width="4" height="12" />
                <circle cx="4" cy="4" r="2" />
            </>
        },
        SocialIcon::GitHub => html! {
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" />
        },
        SocialIcon::Email => html! {
            <>
                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" />
                <polyline points="22,6 12,13 2,6" />
            </>
        },
    };

    html! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            { paths }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub visible: bool,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let animate = use_panel_animation(props.visible, PanelTimings::CONTACT);

    let cards = SOCIAL_LINKS.iter().enumerate().map(|(index, link)| {
        let style = format!("transition-delay: {}ms;", 200 + index * 80);
        html! {
            <a
                key={link.name}
                class="social-card"
                href={link.url}
                target="_blank"
                rel="noopener noreferrer"
                style={style}
            >
                <div class="social-icon">{ icon(link.icon) }</div>
                <div>
                    <h3>{link.name}</h3>
                    <p>{link.description}</p>
                </div>
                <span class="sr-only">{" (opens in a new tab)"}</span>
            </a>
        }
    });

    html! {
        <div class={classes!("contact", "panel-content", animate.then_some("is-animated"))}>
            <div class="panel-title is-centered">
                <div class="eyebrow">{"/ contact"}</div>
                <h1>{"Let's Connect"}</h1>
                <p class="contact-pitch">{CONTACT_PITCH}</p>
            </div>
            <div class="social-grid">
                { for cards }
            </div>
            <p class="contact-footer">{CONTACT_FOOTER}</p>
        </div>
    }
}
