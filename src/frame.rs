use crate::dom::SvgSurface;
use crate::Scene;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: Rc<RefCell<SvgSurface>>,
}

impl FrameContext {
    /// One animation frame. Skipped while the surface is detached.
    pub fn frame(&self, time_ms: f64) {
        let surface = self.surface.borrow();
        if !surface.is_attached() {
            return;
        }
        let mut scene = self.scene.borrow_mut();
        if !scene.tick(time_ms) {
            return;
        }
        surface.write_paths(scene.paths());
        surface.set_pointer_vars(scene.pointer().smoothed);
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// Self-rescheduling `requestAnimationFrame` loop.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    pub fn start(ctx: FrameContext) -> Self {
        let running = Rc::new(Cell::new(true));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |time_ms: f64| {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            ctx.frame(time_ms);
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
        Self {
            running,
            pending,
            tick,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // drops the closure's handle on itself
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &TickClosure) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
