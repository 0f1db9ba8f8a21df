use crate::dom::SvgSurface;
use crate::input;
use crate::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Listeners that stay registered until `remove_all` (or drop).
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        passive: Option<bool>,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let added = match passive {
            Some(p) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(p);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind,
                    closure.as_ref().unchecked_ref(),
                    &opts,
                )
            }
            None => target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()),
        };
        if let Err(e) = added {
            log::error!("[events] failed to add {} listener: {:?}", kind, e);
            return;
        }
        self.listeners.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
    }

    pub fn remove_all(&mut self) {
        for l in self.listeners.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.remove_all();
    }
}

#[derive(Clone)]
pub struct Wiring {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: Rc<RefCell<SvgSurface>>,
}

pub fn wire_listeners(window: &web::Window, w: Wiring) -> ListenerSet {
    let mut set = ListenerSet::default();
    wire_resize(&mut set, window, &w);
    wire_mousemove(&mut set, window, &w);
    wire_touchmove(&mut set, &w);
    log::debug!("[events] {} listeners attached", set.len());
    set
}

fn wire_resize(set: &mut ListenerSet, window: &web::Window, w: &Wiring) {
    let w = w.clone();
    set.add(window, "resize", None, move |_ev| {
        let mut scene = w.scene.borrow_mut();
        w.surface.borrow_mut().sync_grid(&mut *scene);
    });
}

fn wire_mousemove(set: &mut ListenerSet, window: &web::Window, w: &Wiring) {
    let w = w.clone();
    set.add(window, "mousemove", None, move |ev| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let Some(origin) = w.surface.borrow().page_origin() else {
            return;
        };
        let pos = input::surface_local(input::mouse_page(ev), origin);
        w.scene.borrow_mut().pointer_moved(pos);
    });
}

fn wire_touchmove(set: &mut ListenerSet, w: &Wiring) {
    let target: web::EventTarget = w.surface.borrow().container().clone().into();
    let w = w.clone();
    set.add(&target, "touchmove", Some(false), move |ev| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some(page) = input::touch_page(ev) else {
            return;
        };
        let Some(origin) = w.surface.borrow().page_origin() else {
            return;
        };
        w.scene
            .borrow_mut()
            .pointer_moved(input::surface_local(page, origin));
    });
}
