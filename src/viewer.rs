//! Canvas renderer for the synthetic point cloud.

use crate::constants::*;
use crate::dom::{self, ListenerGuard};
use crate::events;
use crate::frame::CanvasMount;
use crate::overlay;
use crate::Shared;
use anomaly_core::{point_radius, synthesize, CloudShape, PointCloud, ViewState, Viewport};
use rand::rngs::StdRng;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct ViewerState {
    pub view: ViewState,
    cloud: Option<PointCloud>,
    // css colour per point, computed once per cloud
    colors: Vec<String>,
    processing: bool,
    generation: u64,
    point_count: usize,
    rng: StdRng,
}

impl ViewerState {
    pub fn new(point_count: usize, rng: StdRng) -> Self {
        Self {
            view: ViewState::default(),
            cloud: None,
            colors: Vec::new(),
            processing: false,
            generation: 0,
            point_count,
            rng,
        }
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn rendered_points(&self) -> usize {
        self.cloud.as_ref().map_or(0, PointCloud::len)
    }

    /// Start a load; any load already in flight is superseded.
    fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.processing = true;
        self.generation
    }

    fn finish_load(&mut self, generation: u64, file_name: &str) -> bool {
        if generation != self.generation {
            log::debug!("[viewer] dropping superseded load of {}", file_name);
            return false;
        }
        let cloud = synthesize(
            CloudShape::from_file_name(file_name),
            self.point_count,
            &mut self.rng,
        );
        log::info!("[viewer] {} -> {:?}, {} points", file_name, cloud.shape(), cloud.len());
        self.colors = cloud.points().iter().map(|p| p.color.to_css()).collect();
        self.cloud = Some(cloud);
        self.processing = false;
        true
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.processing = false;
        self.cloud = None;
        self.colors.clear();
    }

    fn draw(&self, ctx: &web::CanvasRenderingContext2d, vp: Viewport) -> Result<(), JsValue> {
        ctx.set_fill_style_str(VIEWER_BACKGROUND);
        ctx.fill_rect(0.0, 0.0, vp.width as f64, vp.height as f64);

        if self.view.show_grid {
            ctx.set_stroke_style_str(GRID_COLOR);
            ctx.set_line_width(GRID_LINE_WIDTH);
            ctx.begin_path();
            for seg in self.view.grid_segments(vp) {
                ctx.move_to(seg.from.x as f64, seg.from.y as f64);
                ctx.line_to(seg.to.x as f64, seg.to.y as f64);
            }
            ctx.stroke();
        }

        if self.view.show_axes {
            ctx.set_line_width(AXIS_LINE_WIDTH);
            for (axis, seg) in self.view.axis_segments(vp) {
                ctx.set_stroke_style_str(axis.css_color());
                ctx.begin_path();
                ctx.move_to(seg.from.x as f64, seg.from.y as f64);
                ctx.line_to(seg.to.x as f64, seg.to.y as f64);
                ctx.stroke();
            }
        }

        if let Some(cloud) = &self.cloud {
            for (i, p) in self.view.depth_sorted(cloud.points(), vp) {
                ctx.set_fill_style_str(&self.colors[i]);
                ctx.begin_path();
                ctx.arc(p.x as f64, p.y as f64, point_radius(p.scale) as f64, 0.0, TAU)?;
                ctx.fill();
            }
        }
        Ok(())
    }
}

/// Fabricate a cloud for `file_name` after the simulated processing delay.
pub async fn load_file(app: Shared, file_name: String) {
    let generation = app.viewer.borrow_mut().begin_load();
    app.sync_viewer_hud();
    if let Err(e) = dom::sleep_ms(app.config.processing_delay_ms).await {
        log::warn!("[viewer] processing delay failed: {:?}", e);
    }
    let replaced = app.viewer.borrow_mut().finish_load(generation, &file_name);
    if replaced {
        app.sync_viewer_hud();
    }
}

pub struct ViewerMount {
    _canvas: CanvasMount,
    _input: Vec<ListenerGuard>,
}

pub fn mount(app: &Shared) -> anyhow::Result<ViewerMount> {
    let canvas: web::HtmlCanvasElement = dom::by_id(&app.document, VIEWER_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;

    wire_toggles(app);
    let input = events::pointer::wire_viewer_input(&canvas, app.viewer.clone())?;

    let viewer = app.viewer.clone();
    let canvas_draw = canvas.clone();
    let mut failed = false;
    let mount = CanvasMount::new("viewer", &canvas, move || {
        let vp = Viewport::new(canvas_draw.width() as f32, canvas_draw.height() as f32);
        if let Err(e) = viewer.borrow().draw(&ctx, vp) {
            if !failed {
                log::warn!("[viewer] draw failed: {:?}", e);
                failed = true;
            }
        }
    })?;
    app.sync_viewer_hud();
    Ok(ViewerMount {
        _canvas: mount,
        _input: input,
    })
}

fn wire_toggles(app: &Shared) {
    let doc = &app.document;
    {
        let view = app.viewer.borrow().view;
        overlay::set_toggle(doc, GRID_TOGGLE_ID, view.show_grid);
        overlay::set_toggle(doc, AXES_TOGGLE_ID, view.show_axes);
    }

    let viewer = app.viewer.clone();
    let doc_grid = doc.clone();
    dom::add_click_listener(doc, GRID_TOGGLE_ID, move || {
        let on = viewer.borrow_mut().view.toggle_grid();
        overlay::set_toggle(&doc_grid, GRID_TOGGLE_ID, on);
    });

    let viewer = app.viewer.clone();
    let doc_axes = doc.clone();
    dom::add_click_listener(doc, AXES_TOGGLE_ID, move || {
        let on = viewer.borrow_mut().view.toggle_axes();
        overlay::set_toggle(&doc_axes, AXES_TOGGLE_ID, on);
    });
}
