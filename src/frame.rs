use crate::dom::{self, ListenerGuard};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A self-rescheduling requestAnimationFrame loop that can be cancelled.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // stopped between scheduling and firing
            if pending_tick.take().is_none() {
                return;
            }
            frame();
            pending_tick.set(request(&tick_clone));
        }) as Box<dyn FnMut()>));
        pending.set(request(&tick));
        Self { tick, pending }
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let closure = slot.as_ref()?;
    w.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

/// A canvas that follows its parent's size and redraws every frame.
/// Dropping it cancels the loop and removes the resize listener.
pub struct CanvasMount {
    name: &'static str,
    _frame_loop: FrameLoop,
    _resize: ListenerGuard,
}

impl CanvasMount {
    pub fn new(
        name: &'static str,
        canvas: &web::HtmlCanvasElement,
        frame: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        dom::sync_canvas_to_parent(canvas);
        let canvas_resize = canvas.clone();
        let resize = ListenerGuard::new(&window, "resize", move |_| {
            dom::sync_canvas_to_parent(&canvas_resize);
        })?;
        log::info!(
            "[{}] mounted at {}x{}",
            name,
            canvas.width(),
            canvas.height()
        );
        Ok(Self {
            name,
            _frame_loop: FrameLoop::start(frame),
            _resize: resize,
        })
    }
}

impl Drop for CanvasMount {
    fn drop(&mut self) {
        log::info!("[{}] torn down", self.name);
    }
}
