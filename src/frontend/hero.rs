use super::{panel::use_panel_animation, shapes::use_shape_repulsion, timer::{Interval, Timeout}};
use crate::{
    content::OWNER_NAME,
    title::{TitleRotation, ROTATE_EVERY_MS, SWAP_DELAY_MS},
    visibility::PanelTimings,
};
use std::{cell::RefCell, rc::Rc};
use yew::prelude::*;

const SHAPE_STROKE: &str = "#242424";

pub enum TitleStep {
    Begin,
    Finish,
}

impl Reducible for TitleRotation {
    type Action = TitleStep;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            TitleStep::Begin => self.begin_swap(),
            TitleStep::Finish => self.finish_swap(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[hook]
fn use_title_rotation() -> TitleRotation {
    let rotation = use_reducer_eq(TitleRotation::default);

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with((), move |_| {
            let swap: Rc<RefCell<Option<Timeout>>> = Rc::default();
            let interval = {
                let swap = swap.clone();
                Interval::new(ROTATE_EVERY_MS, move || {
                    dispatcher.dispatch(TitleStep::Begin);
                    let dispatcher = dispatcher.clone();
                    *swap.borrow_mut() = Timeout::new(SWAP_DELAY_MS, move || {
                        dispatcher.dispatch(TitleStep::Finish);
                    });
                })
            };

            move || {
                drop(interval);
                swap.borrow_mut().take();
            }
        });
    }

    *rotation
}

fn dot_grid(columns: u32, rows: u32, base_delay: f64) -> Html {
    let dots = (0..columns * rows).map(|index| {
        let style = format!(
            "animation-delay: {:.2}s;",
            base_delay + f64::from(index) * 0.02
        );
        html! { <span key={index} class="dot" style={style} /> }
    });

    html! {
        <div
            class="dot-grid"
            style={format!("grid-template-columns: repeat({columns}, 1fr); grid-template-rows: repeat({rows}, 1fr);")}
        >
            { for dots }
        </div>
    }
}

fn zigzag() -> Html {
    html! {
        <svg width="100" height="60">
            <polyline points="0,30 25,10 50,30 75,10 100,30" stroke={SHAPE_STROKE} stroke-width="0.5" fill="none" />
        </svg>
    }
}

fn chevron() -> Html {
    html! {
        <svg width="30" height="20">
            <polyline points="0,0 15,10 30,0" stroke={SHAPE_STROKE} stroke-width="0.5" fill="none" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub visible: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let animate = use_panel_animation(props.visible, PanelTimings::HERO);
    let rotation = use_title_rotation();
    let root = use_node_ref();
    use_shape_repulsion(root.clone());

    let title_class = if rotation.is_swapping() {
        "hero-title animate-slide-out-right"
    } else {
        "hero-title animate-slide-in-right"
    };

    html! {
        <div ref={root} class={classes!("hero", animate.then_some("is-animated"))}>
            <div class="hero-intro animate-fade-in-left">
                <h2 class="hero-name">{"I'm"}<br />{OWNER_NAME}</h2>
                <p class={title_class}>{rotation.current()}</p>
            </div>

            <svg class="hero-curve animate-draw-in" viewBox="0 0 150 700" preserveAspectRatio="none">
                <path d="M -20 0 Q 80 175 -20 350 Q -120 525 -20 700" stroke={SHAPE_STROKE} stroke-width="0.5" fill="none" />
            </svg>

            <div class="shape shape-interactive animate-fade-in-right grid-top" style="animation-delay: 0.8s;">
                { dot_grid(10, 6, 0.8) }
            </div>
            <div class="shape shape-interactive animate-fade-in-right grid-bottom" style="animation-delay: 1.2s;">
                { dot_grid(8, 5, 1.2) }
            </div>
            <div class="shape shape-interactive animate-fade-in-right zigzag-top" style="animation-delay: 1.6s;">
                { zigzag() }
            </div>
            <div class="shape shape-interactive animate-fade-in-right zigzag-bottom" style="animation-delay: 2.0s;">
                { zigzag() }
            </div>
            <div class="shape animate-scale-in square" style="animation-delay: 2.4s;" />
            <div class="shape animate-scale-in diamond" style="top: 60%; animation-delay: 2.8s;" />
            <div class="shape animate-scale-in diamond" style="top: 64%; animation-delay: 3.0s;" />
            <div class="shape animate-scale-in diamond" style="top: 68%; animation-delay: 3.2s;" />
            <div class="shape shape-interactive animate-fade-in-right chevron-top" style="animation-delay: 3.6s;">
                { chevron() }
            </div>
            <div class="shape shape-interactive animate-fade-in-right chevron-bottom" style="animation-delay: 4.0s;">
                { chevron() }
            </div>
        </div>
    }
}
