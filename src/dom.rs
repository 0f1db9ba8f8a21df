use crate::config::WavesConfig;
use crate::constants::{
    CONTAINER_STYLE_PROPS, GRADIENT_ID, GRADIENT_STOPS, STROKE_OPACITY, STROKE_WIDTH,
};
use crate::input;
use crate::style::{Restore, StyleSnapshot};
use crate::waves::{NoiseSource, SurfaceSize, WaveScene};
use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[inline]
fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

#[inline]
fn create_svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document.create_element_ns(Some(SVG_NS), tag).map_err(js_err)
}

/// `<defs>` with the default vertical stroke gradient.
fn gradient_defs(document: &web::Document) -> anyhow::Result<web::Element> {
    let defs = create_svg(document, "defs")?;
    let gradient = create_svg(document, "linearGradient")?;
    for (k, v) in [
        ("id", GRADIENT_ID),
        ("x1", "0%"),
        ("y1", "0%"),
        ("x2", "0%"),
        ("y2", "100%"),
    ] {
        gradient.set_attribute(k, v).map_err(js_err)?;
    }
    for (offset, color) in GRADIENT_STOPS {
        let stop = create_svg(document, "stop")?;
        stop.set_attribute("offset", offset).map_err(js_err)?;
        stop.set_attribute("stop-color", color).map_err(js_err)?;
        gradient.append_child(&stop).map_err(js_err)?;
    }
    defs.append_child(&gradient).map_err(js_err)?;
    Ok(defs)
}

/// The renderer's SVG inside its host container, plus one `<path>` per line.
pub struct SvgSurface {
    document: web::Document,
    container: web::HtmlElement,
    svg: web::Element,
    paths: Vec<web::Element>,
    stroke: String,
    saved_style: StyleSnapshot,
    /// Container corner in page coordinates, refreshed on mount and resize.
    page_origin: Option<Vec2>,
}

impl SvgSurface {
    pub fn attach(
        document: &web::Document,
        container_id: &str,
        config: &WavesConfig,
    ) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| anyhow!("missing #{}", container_id))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow!("{:?}", e))?;

        let style = container.style();
        let saved_style = StyleSnapshot::capture(&CONTAINER_STYLE_PROPS, |name| {
            style.get_property_value(name).unwrap_or_default()
        });
        _ = style.set_property("background", &config.background_color);
        _ = style.set_property("overflow", "hidden");
        _ = style.set_property("--x", "-0.5rem");
        _ = style.set_property("--y", "50%");

        let svg = create_svg(document, "svg")?;
        _ = svg.set_attribute("style", "display:block;width:100%;height:100%");
        svg.append_child(&gradient_defs(document)?).map_err(js_err)?;
        container.append_child(&svg).map_err(js_err)?;

        Ok(Self {
            document: document.clone(),
            container,
            svg,
            paths: Vec::new(),
            stroke: config.stroke_color.clone(),
            saved_style,
            page_origin: None,
        })
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.container.is_connected() && self.svg.is_connected()
    }

    /// Current container size; `None` once the container left the document.
    pub fn measure(&self) -> Option<SurfaceSize> {
        if !self.container.is_connected() {
            return None;
        }
        let rect = self.container.get_bounding_client_rect();
        Some(SurfaceSize::new(rect.width() as f32, rect.height() as f32))
    }

    /// Top-left corner of the container in page coordinates, as of the last
    /// mount or resize. Page coordinates stay valid while the window scrolls.
    pub fn page_origin(&self) -> Option<Vec2> {
        if !self.container.is_connected() {
            return None;
        }
        self.page_origin
    }

    fn measure_page_origin(&self) -> Option<Vec2> {
        if !self.container.is_connected() {
            return None;
        }
        let rect = self.container.get_bounding_client_rect();
        let window = self.document.default_view()?;
        let scroll = Vec2::new(
            window.scroll_x().unwrap_or_default() as f32,
            window.scroll_y().unwrap_or_default() as f32,
        );
        Some(input::page_origin(
            Vec2::new(rect.left() as f32, rect.top() as f32),
            scroll,
        ))
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn fit(&mut self, size: SurfaceSize) {
        self.page_origin = self.measure_page_origin();
        _ = self.svg.set_attribute(
            "style",
            &format!("display:block;width:{}px;height:{}px", size.width, size.height),
        );
    }

    /// Replace every path element with `count` fresh ones. `<defs>` stays.
    fn rebuild_paths(&mut self, count: usize) {
        for p in self.paths.drain(..) {
            p.remove();
        }
        for _ in 0..count {
            match self.new_path() {
                Ok(p) => self.paths.push(p),
                Err(e) => {
                    log::error!("[waves] path creation failed: {:?}", e);
                    break;
                }
            }
        }
    }

    fn new_path(&self) -> anyhow::Result<web::Element> {
        let path = create_svg(&self.document, "path")?;
        path.set_attribute("fill", "none").map_err(js_err)?;
        path.set_attribute("stroke", &self.stroke).map_err(js_err)?;
        path.set_attribute("stroke-width", STROKE_WIDTH).map_err(js_err)?;
        path.set_attribute("stroke-opacity", STROKE_OPACITY).map_err(js_err)?;
        self.svg.append_child(&path).map_err(js_err)?;
        Ok(path)
    }

    /// Size the SVG and its paths to the scene's current grid.
    pub fn attach_paths<N: NoiseSource>(&mut self, scene: &WaveScene<N>) {
        if let Some(size) = scene.size() {
            self.fit(size);
        }
        self.rebuild_paths(scene.line_count());
    }

    /// Re-measure and rebuild after a resize. No-op while detached.
    pub fn sync_grid<N: NoiseSource>(&mut self, scene: &mut WaveScene<N>) -> bool {
        if !scene.resize(self.measure()) {
            return false;
        }
        self.attach_paths(scene);
        true
    }

    pub fn write_paths(&self, paths: &[String]) {
        for (el, d) in self.paths.iter().zip(paths) {
            if !d.is_empty() {
                _ = el.set_attribute("d", d);
            }
        }
    }

    pub fn set_pointer_vars(&self, smoothed: Vec2) {
        let style = self.container.style();
        _ = style.set_property("--x", &format!("{}px", smoothed.x));
        _ = style.set_property("--y", &format!("{}px", smoothed.y));
    }

    /// Remove everything this surface added to the page and put back the
    /// container's inline styles.
    pub fn detach(&mut self) {
        for p in self.paths.drain(..) {
            p.remove();
        }
        self.svg.remove();
        self.page_origin = None;
        let style = self.container.style();
        for op in self.saved_style.restore_ops() {
            _ = match op {
                Restore::Set(name, value) => style.set_property(name, value),
                Restore::Remove(name) => style.remove_property(name).map(|_| ()),
            };
        }
    }
}
