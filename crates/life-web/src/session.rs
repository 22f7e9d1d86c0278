//! The `requestAnimationFrame` loop around a [`Driver`].
//!
//! A [`Session`] owns the driver and a single frame callback, created once
//! and reused for every frame. The callback holds only a weak reference
//! back to the session so dropping the `Game` tears everything down.
//! At most one frame request is pending at any time; its handle is kept
//! so pausing or restarting can cancel it.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use life_core::{Driver, FrameOutcome};
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::canvas::CanvasSurface;

/// Driver specialized to the browser canvas and a seeded RNG.
pub type CanvasDriver = Driver<CanvasSurface, StdRng>;

/// Driver plus its animation-frame plumbing.
pub struct Session {
    driver: RefCell<CanvasDriver>,
    pending_frame: Cell<Option<i32>>,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl Session {
    /// Wrap `driver` in a session with its frame callback.
    pub fn new(driver: CanvasDriver) -> Rc<Self> {
        Rc::new_cyclic(|weak: &Weak<Self>| {
            let weak = weak.clone();
            let on_frame = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
                if let Some(session) = weak.upgrade() {
                    session.frame(now);
                }
            });
            Self {
                driver: RefCell::new(driver),
                pending_frame: Cell::new(None),
                on_frame,
            }
        })
    }

    /// Start playing and schedule the first frame.
    pub fn play(&self) -> Result<(), JsValue> {
        if self.driver.borrow_mut().play() {
            self.request_frame()?;
        }
        Ok(())
    }

    /// Stop playing and drop the pending frame.
    pub fn pause(&self) -> Result<(), JsValue> {
        if self.driver.borrow_mut().pause() {
            self.cancel_frame()?;
        }
        Ok(())
    }

    /// Stop, then draw a freshly seeded board in place of the current one.
    pub fn restart(&self) -> Result<(), JsValue> {
        self.cancel_frame()?;
        self.driver.borrow_mut().restart();
        Ok(())
    }

    /// Whether the tick loop is running.
    pub fn is_playing(&self) -> bool {
        self.driver.borrow().is_playing()
    }

    /// Generations since the last restart.
    pub fn generation(&self) -> u64 {
        self.driver.borrow().generation()
    }

    fn frame(&self, now: f64) {
        self.pending_frame.set(None);
        let outcome = self.driver.borrow_mut().on_frame(now);
        if outcome == FrameOutcome::Idle {
            return;
        }
        if let Err(e) = self.request_frame() {
            web_sys::console::error_2(&"life: failed to schedule frame".into(), &e);
        }
    }

    fn request_frame(&self) -> Result<(), JsValue> {
        if self.pending_frame.get().is_some() {
            return Ok(());
        }
        let id = window()?.request_animation_frame(self.on_frame.as_ref().unchecked_ref())?;
        self.pending_frame.set(Some(id));
        Ok(())
    }

    fn cancel_frame(&self) -> Result<(), JsValue> {
        if let Some(id) = self.pending_frame.take() {
            window()?.cancel_animation_frame(id)?;
        }
        Ok(())
    }
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}
