use crate::dom::ListenerGuard;
use crate::input;
use crate::viewer::ViewerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Orbit and zoom handlers for the viewer canvas. The returned guards keep
/// the listeners attached until they are dropped.
pub fn wire_viewer_input(
    canvas: &web::HtmlCanvasElement,
    viewer: Rc<RefCell<ViewerState>>,
) -> anyhow::Result<Vec<ListenerGuard>> {
    Ok(vec![
        wire_pointerdown(canvas, viewer.clone())?,
        wire_pointermove(canvas, viewer.clone())?,
        wire_pointerup(canvas, "pointerup", viewer.clone())?,
        wire_pointerup(canvas, "pointerleave", viewer.clone())?,
        wire_wheel(canvas, viewer)?,
    ])
}

fn wire_pointerdown(
    canvas: &web::HtmlCanvasElement,
    viewer: Rc<RefCell<ViewerState>>,
) -> anyhow::Result<ListenerGuard> {
    let canvas_capture = canvas.clone();
    ListenerGuard::new(canvas, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        viewer.borrow_mut().view.pointer_down(input::client_pos(ev));
        let _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        log::debug!("[mouse] begin orbit");
    })
}

fn wire_pointermove(
    canvas: &web::HtmlCanvasElement,
    viewer: Rc<RefCell<ViewerState>>,
) -> anyhow::Result<ListenerGuard> {
    ListenerGuard::new(canvas, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            viewer.borrow_mut().view.pointer_move(input::client_pos(ev));
        }
    })
}

fn wire_pointerup(
    canvas: &web::HtmlCanvasElement,
    event: &'static str,
    viewer: Rc<RefCell<ViewerState>>,
) -> anyhow::Result<ListenerGuard> {
    ListenerGuard::new(canvas, event, move |_| {
        let mut v = viewer.borrow_mut();
        if v.view.is_dragging() {
            v.view.pointer_up();
            log::debug!("[mouse] end orbit");
        }
    })
}

fn wire_wheel(
    canvas: &web::HtmlCanvasElement,
    viewer: Rc<RefCell<ViewerState>>,
) -> anyhow::Result<ListenerGuard> {
    ListenerGuard::active(canvas, "wheel", move |ev: web::Event| {
        ev.prevent_default();
        if let Some(ev) = ev.dyn_ref::<web::WheelEvent>() {
            let mut v = viewer.borrow_mut();
            v.view.wheel(ev.delta_y());
            log::debug!("[mouse] zoom {:.2}", v.view.zoom);
        }
    })
}
