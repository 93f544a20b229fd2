use crate::constants::{TOAST_CONTAINER_ID, TOAST_EXPIRY_SLACK_MS, TOAST_ID_ATTR};
use crate::dom;
use crate::Shared;
use anomaly_core::ToastQueue;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Rebuild the toast stack from the queue.
pub fn render(document: &web::Document, queue: &ToastQueue) {
    let Some(container) = document.get_element_by_id(TOAST_CONTAINER_ID) else {
        return;
    };
    container.set_inner_html("");
    for toast in queue.iter() {
        if let Err(e) = append_toast(document, &container, toast) {
            log::warn!("[toast] render failed: {:?}", e);
        }
    }
}

fn append_toast(
    document: &web::Document,
    container: &web::Element,
    toast: &anomaly_core::Toast,
) -> Result<(), wasm_bindgen::JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(&format!("toast {}", toast.kind.css_class()));
    el.set_attribute("role", "status")?;

    let text = document.create_element("span")?;
    text.set_text_content(Some(&toast.message));
    el.append_child(&text)?;

    let close = document.create_element("button")?;
    close.set_class_name("toast-close");
    close.set_attribute(TOAST_ID_ATTR, &toast.id.to_string())?;
    close.set_attribute("aria-label", "Dismiss")?;
    close.set_text_content(Some("×"));
    el.append_child(&close)?;

    container.append_child(&el)?;
    Ok(())
}

/// One delegated click handler for every close button in the stack.
pub fn wire_dismiss(app: &Shared) {
    let Some(container) = app.document.get_element_by_id(TOAST_CONTAINER_ID) else {
        log::warn!("[toast] no #{} container", TOAST_CONTAINER_ID);
        return;
    };
    let app = app.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        let id = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&format!("[{}]", TOAST_ID_ATTR)).ok().flatten())
            .and_then(|el| el.get_attribute(TOAST_ID_ATTR))
            .and_then(|id| id.parse::<u64>().ok());
        if let Some(id) = id {
            app.session.borrow_mut().toasts_mut().dismiss(id);
            render(&app.document, app.session.borrow().toasts());
        }
    }) as Box<dyn FnMut(_)>);
    let _ = container.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Drop expired toasts once the newest one's lifetime has run out.
pub fn schedule_expiry(app: &Shared) {
    let wait = {
        let session = app.session.borrow();
        session.toasts().lifetime_ms() as u32 + TOAST_EXPIRY_SLACK_MS
    };
    let app = app.clone();
    spawn_local(async move {
        if let Err(e) = dom::sleep_ms(wait).await {
            log::warn!("[toast] expiry timer failed: {:?}", e);
            return;
        }
        let expired = app
            .session
            .borrow_mut()
            .toasts_mut()
            .expire(js_sys::Date::now());
        if expired > 0 {
            render(&app.document, app.session.borrow().toasts());
        }
    });
}
