use crate::constants::{CONFIG_SCRIPT_ID, HIDDEN_CLASS};
use anomaly_core::AppConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element and cast it to the expected type.
pub fn by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach a click handler to", element_id);
    }
}

/// Match the canvas backing store to its parent's box.
pub fn sync_canvas_to_parent(canvas: &web::HtmlCanvasElement) {
    if let Some(parent) = canvas.parent_element() {
        let w = parent.client_width().max(1) as u32;
        let h = parent.client_height().max(1) as u32;
        if canvas.width() != w || canvas.height() != h {
            canvas.set_width(w);
            canvas.set_height(h);
        }
    }
}

/// An event listener that is removed again when dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Non-passive variant, needed to call `preventDefault` on wheel events.
    pub fn active(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        log::debug!("[dom] removed {} listener", self.event);
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_hidden(document: &web::Document, id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        if hidden {
            let _ = cl.add_1(HIDDEN_CLASS);
            // fallback for pages without the css class
            let _ = el.set_attribute("style", "display:none");
        } else {
            let _ = cl.remove_1(HIDDEN_CLASS);
            let _ = el.remove_attribute("style");
        }
    }
}

pub fn set_class(document: &web::Document, id: &str, class: &str, on: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.class_list().toggle_with_force(class, on);
    }
}

pub fn set_disabled(document: &web::Document, id: &str, disabled: bool) {
    if let Ok(button) = by_id::<web::HtmlButtonElement>(document, id) {
        button.set_disabled(disabled);
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: u32) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut scheduled = Ok(0);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32);
    });
    scheduled.map_err(|e| anyhow::anyhow!("{:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Read the optional `<script type="application/json" id="app-config">`.
pub fn load_config(document: &web::Document) -> AppConfig {
    match document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) if !text.trim().is_empty() => AppConfig::from_json_or_default(&text),
        _ => AppConfig::default(),
    }
}

/// Click a temporary anchor so the browser saves `href` as `file_name`.
pub fn trigger_download(document: &web::Document, href: &str, file_name: &str) -> anyhow::Result<()> {
    let anchor = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlAnchorElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    anchor.set_href(href);
    anchor.set_download(file_name);
    anchor.click();
    Ok(())
}
