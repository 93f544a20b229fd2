use crate::constants::*;
use crate::dom;
use web_sys as web;

/// Viewer HUD: busy overlay, empty-state prompt and point readout.
pub fn sync_viewer(document: &web::Document, processing: bool, has_tiff: bool, points: usize) {
    dom::set_hidden(document, PROCESSING_OVERLAY_ID, !processing);
    dom::set_hidden(document, EMPTY_OVERLAY_ID, has_tiff || processing);
    dom::set_text(document, POINT_COUNT_ID, &format!("{} points rendered", points));
}

/// Reflect a toggle's state on its button.
#[inline]
pub fn set_toggle(document: &web::Document, id: &str, on: bool) {
    dom::set_class(document, id, ACTIVE_CLASS, on);
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("aria-pressed", if on { "true" } else { "false" });
    }
}
