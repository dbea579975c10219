//! Browser timers and listeners as guards: dropping one cancels it.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, MouseEvent};

fn clamp_millis(millis: u32) -> i32 {
    i32::try_from(millis).unwrap_or(i32::MAX)
}

pub struct Timeout {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(millis: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        });

        let handle = window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                clamp_millis(millis),
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(millis: u32, callback: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::<dyn FnMut()>::new(callback);

        let handle = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                clamp_millis(millis),
            )
            .ok()?;

        Some(Self {
            handle,
            _callback: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// `mousemove`-style listener registered on the window.
pub struct MouseListener {
    event: &'static str,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl MouseListener {
    pub fn new(event: &'static str, callback: impl FnMut(MouseEvent) + 'static) -> Option<Self> {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(callback);
        window()?
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            event,
            callback: closure,
        })
    }
}

impl Drop for MouseListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

struct FrameState {
    handle: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameState {
    fn request(&self) {
        let Some(window) = window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };

        if let Ok(handle) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            self.handle.set(Some(handle));
        }
    }
}

/// Calls `on_frame` once per display frame until dropped.
pub struct AnimationLoop {
    state: Rc<FrameState>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(FrameState {
            handle: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&state);
        let closure = Closure::<dyn FnMut()>::new(move || {
            on_frame();
            if let Some(state) = weak.upgrade() {
                state.request();
            }
        });
        *state.callback.borrow_mut() = Some(closure);
        state.request();

        Self { state }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let (Some(window), Some(handle)) = (window(), self.state.handle.take()) {
            let _ = window.cancel_animation_frame(handle);
        }
        self.state.callback.borrow_mut().take();
    }
}
