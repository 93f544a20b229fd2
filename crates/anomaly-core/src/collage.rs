//! Layout of the 2x2 labelled collage exported from the results view.

use crate::inference::ResultKind;

pub const COLLAGE_CELL_PX: u32 = 256;
pub const COLLAGE_LABEL_PX: u32 = 28;
pub const COLLAGE_LABEL_BASELINE_PX: u32 = 22;
pub const COLLAGE_COLUMNS: u32 = 2;
pub const COLLAGE_FILE_NAME: &str = "collage.png";
pub const COLLAGE_FONT: &str = "bold 18px sans-serif";
pub const COLLAGE_BACKGROUND: &str = "#fff";
pub const COLLAGE_TEXT_COLOR: &str = "#222";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollageCell {
    pub kind: ResultKind,
    pub label: &'static str,
    /// Centre of the caption, on its baseline.
    pub label_x: f64,
    pub label_y: f64,
    pub image_x: f64,
    pub image_y: f64,
    pub image_size: f64,
}

/// Width and height of the whole canvas.
pub fn collage_size() -> (u32, u32) {
    let rows = (ResultKind::ALL.len() as u32).div_ceil(COLLAGE_COLUMNS);
    (
        COLLAGE_CELL_PX * COLLAGE_COLUMNS,
        (COLLAGE_CELL_PX + COLLAGE_LABEL_PX) * rows,
    )
}

pub fn collage_layout() -> [CollageCell; 4] {
    let cell = COLLAGE_CELL_PX as f64;
    let band = COLLAGE_LABEL_PX as f64;
    let mut i = 0u32;
    ResultKind::ALL.map(|kind| {
        let row = (i / COLLAGE_COLUMNS) as f64;
        let col = (i % COLLAGE_COLUMNS) as f64;
        i += 1;
        let top = row * (cell + band);
        CollageCell {
            kind,
            label: kind.collage_label(),
            label_x: col * cell + cell / 2.0,
            label_y: top + COLLAGE_LABEL_BASELINE_PX as f64,
            image_x: col * cell,
            image_y: top + band,
            image_size: cell,
        }
    })
}
