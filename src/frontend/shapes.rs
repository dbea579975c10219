use super::{
    prefers_reduced_motion,
    timer::{AnimationLoop, MouseListener},
};
use crate::repulsion::{ShapeField, ShapeProbe, StyleUpdate, Vec2};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent, Window};
use yew::prelude::*;

const INTERACTIVE_SELECTOR: &str = ".shape-interactive";
const ACTIVE_CLASS: &str = "mouse-active";

/// Listener and frame loop for one mounted hero; dropping it tears both down
/// together with the position registry they share.
struct ShapeLayer {
    _pointer: MouseListener,
    _frames: AnimationLoop,
}

fn probe(window: &Window, shape: &HtmlElement) -> ShapeProbe {
    let rect = shape.get_bounding_client_rect();
    let opacity = window
        .get_computed_style(shape)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("opacity").ok())
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    ShapeProbe {
        center: Vec2::new(
            rect.left() + rect.width() / 2.0,
            rect.top() + rect.height() / 2.0,
        ),
        opacity,
    }
}

fn apply(shape: &HtmlElement, update: StyleUpdate) {
    let style = shape.style();
    match update {
        StyleUpdate::Apply(offset) => {
            let _ = style.set_property_with_priority(
                "transform",
                &format!("translate({:.3}px, {:.3}px)", offset.x, offset.y),
                "important",
            );
            let _ = style.set_property_with_priority("opacity", "1", "important");
            let _ = shape.class_list().add_1(ACTIVE_CLASS);
        }
        StyleUpdate::Clear => {
            let _ = style.remove_property("transform");
            let _ = style.remove_property("opacity");
            let _ = shape.class_list().remove_1(ACTIVE_CLASS);
        }
    }
}

fn mount(root: &NodeRef) -> Option<ShapeLayer> {
    if prefers_reduced_motion() {
        return None;
    }

    let root = root.cast::<Element>()?;
    let nodes = root.query_selector_all(INTERACTIVE_SELECTOR).ok()?;
    let shapes: Rc<Vec<HtmlElement>> = Rc::new(
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect(),
    );
    if shapes.is_empty() {
        return None;
    }

    let field = Rc::new(RefCell::new(ShapeField::<usize>::new()));

    let pointer = {
        let shapes = shapes.clone();
        let field = field.clone();
        MouseListener::new("mousemove", move |event: MouseEvent| {
            let Some(window) = window() else {
                return;
            };
            let pointer = Vec2::new(f64::from(event.client_x()), f64::from(event.client_y()));
            let probes = shapes
                .iter()
                .enumerate()
                .map(|(index, shape)| (index, probe(&window, shape)));
            field.borrow_mut().pointer_moved(pointer, probes);
        })?
    };

    let frames = AnimationLoop::start(move || {
        if field.borrow().is_empty() {
            return;
        }
        let updates = field.borrow_mut().frame();
        for (index, update) in updates {
            if let Some(shape) = shapes.get(index) {
                apply(shape, update);
            }
        }
    });

    Some(ShapeLayer {
        _pointer: pointer,
        _frames: frames,
    })
}

/// Pushes `.shape-interactive` descendants of `root` away from the pointer.
#[hook]
pub fn use_shape_repulsion(root: NodeRef) {
    use_effect_with(root, |root| {
        let layer = mount(root);
        move || drop(layer)
    });
}
