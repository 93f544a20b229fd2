use anomaly_core::FileMeta;
use glam::Vec2;
use web_sys as web;

/// Pointer position in client pixels. Only deltas are used, so the canvas
/// offset does not matter.
#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn file_meta(file: &web::File) -> FileMeta {
    FileMeta::new(file.name(), file.type_(), file.size() as u64)
}

#[inline]
pub fn selected_file(input: &web::HtmlInputElement) -> Option<web::File> {
    input.files().and_then(|list| list.get(0))
}

/// Browser handles for the picked files; the session only keeps metadata.
#[derive(Default, Clone)]
pub struct SelectedFiles {
    pub rgb: Option<web::File>,
    pub tiff: Option<web::File>,
}
