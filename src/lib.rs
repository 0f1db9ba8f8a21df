#![cfg(target_arch = "wasm32")]
use crate::config::WavesConfig;
use crate::waves::{SimplexNoise, WaveScene};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod style;
mod waves;

pub(crate) type Scene = WaveScene<SimplexNoise>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cigol-waves loaded");
    Ok(())
}

struct Mounted {
    scene: Rc<RefCell<Scene>>,
    surface: Rc<RefCell<dom::SvgSurface>>,
    listeners: events::ListenerSet,
    frames: frame::FrameLoop,
}

impl Mounted {
    fn teardown(mut self) {
        // cancel the frame and drop listeners before touching shared state
        self.frames.stop();
        self.listeners.remove_all();
        self.scene.borrow_mut().teardown();
        self.surface.borrow_mut().detach();
        log::info!("[waves] unmounted");
    }
}

fn mount(container_id: &str, config: WavesConfig) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    let noise = SimplexNoise::new(config.resolve_seed());
    let seed = noise.seed();
    let surface = dom::SvgSurface::attach(&document, container_id, &config)?;
    let mut scene = WaveScene::new(noise);
    scene.mount(surface.measure());

    let scene = Rc::new(RefCell::new(scene));
    let surface = Rc::new(RefCell::new(surface));
    surface.borrow_mut().attach_paths(&*scene.borrow());
    log::info!(
        "[waves] mounted #{} seed={} lines={} pointer_size={}",
        container_id,
        seed,
        scene.borrow().line_count(),
        config.pointer_size
    );

    let listeners = events::wire_listeners(
        &window,
        events::Wiring {
            scene: scene.clone(),
            surface: surface.clone(),
        },
    );
    scene.borrow_mut().start();
    let frames = frame::FrameLoop::start(frame::FrameContext {
        scene: scene.clone(),
        surface: surface.clone(),
    });

    Ok(Mounted {
        scene,
        surface,
        listeners,
        frames,
    })
}

/// Animated wave background mounted into a host element.
#[wasm_bindgen]
pub struct Waves {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl Waves {
    /// Mount into the element with id `container_id` and start animating.
    ///
    /// Passing `seed` makes the wave pattern repeat across mounts.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        stroke_color: Option<String>,
        background_color: Option<String>,
        pointer_size: Option<f32>,
        seed: Option<u32>,
    ) -> Result<Waves, JsValue> {
        let config =
            WavesConfig::from_options(stroke_color, background_color, pointer_size, seed);
        let mounted = mount(container_id, config).map_err(|e| {
            log::error!("[waves] mount error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })?;
        Ok(Self {
            mounted: Some(mounted),
        })
    }

    /// Stop the loop, detach listeners and remove the SVG. Safe to repeat.
    pub fn destroy(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.teardown();
        }
    }

    #[wasm_bindgen(js_name = lineCount)]
    pub fn line_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.scene.borrow().line_count())
    }

    #[wasm_bindgen(js_name = pathCount)]
    pub fn path_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.surface.borrow().path_count())
    }

    #[wasm_bindgen(js_name = frameCount)]
    pub fn frame_count(&self) -> u64 {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.scene.borrow().frames())
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.frames.is_running() && m.scene.borrow().is_running())
    }
}

impl Drop for Waves {
    fn drop(&mut self) {
        self.destroy();
    }
}
