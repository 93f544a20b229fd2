#![cfg(target_arch = "wasm32")]
use anomaly_core::{AppConfig, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod api;
mod constants;
mod dom;
mod events;
mod frame;
mod hero;
mod input;
mod overlay;
mod results;
mod toast;
mod viewer;

/// Handles shared by every event handler and async task on the page.
#[derive(Clone)]
pub(crate) struct Shared {
    pub document: web::Document,
    pub config: Rc<AppConfig>,
    pub session: Rc<RefCell<Session>>,
    pub viewer: Rc<RefCell<viewer::ViewerState>>,
    pub files: Rc<RefCell<input::SelectedFiles>>,
}

impl Shared {
    /// Re-render everything that depends on session state.
    pub fn refresh(&self) {
        events::form::sync(self);
        results::sync(self);
        toast::render(&self.document, self.session.borrow().toasts());
        self.sync_viewer_hud();
    }

    pub fn sync_viewer_hud(&self) {
        let (processing, points) = {
            let v = self.viewer.borrow();
            (v.is_processing(), v.rendered_points())
        };
        let session = self.session.borrow();
        overlay::sync_viewer(
            &self.document,
            processing || session.is_loading(),
            session.tiff().is_some(),
            points,
        );
    }
}

/// Everything that must stop when the page goes away.
struct Mounted {
    _hero: frame::CanvasMount,
    _viewer: viewer::ViewerMount,
}

fn rng_for(config: &AppConfig, stream: u64) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}

fn wire_pagehide(mounted: Mounted) {
    let slot = Rc::new(RefCell::new(Some(mounted)));
    let closure = Closure::wrap(Box::new(move || {
        if slot.borrow_mut().take().is_some() {
            log::info!("[page] hidden, animations stopped");
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("anomaly-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = dom::load_config(&document);
    log::info!(
        "[config] endpoint={} points={} delay={}ms seed={:?}",
        config.endpoint,
        config.point_count,
        config.processing_delay_ms,
        config.seed
    );

    let app = Shared {
        document: document.clone(),
        session: Rc::new(RefCell::new(Session::new(&config))),
        viewer: Rc::new(RefCell::new(viewer::ViewerState::new(
            config.point_count,
            rng_for(&config, 1),
        ))),
        files: Rc::new(RefCell::new(input::SelectedFiles::default())),
        config: Rc::new(config),
    };

    let hero = hero::mount(&document, rng_for(&app.config, 0))?;
    let viewer = viewer::mount(&app)?;

    events::form::wire_form(&app)?;
    results::wire_results(&app);
    toast::wire_dismiss(&app);
    app.refresh();

    wire_pagehide(Mounted {
        _hero: hero,
        _viewer: viewer,
    });
    Ok(())
}
