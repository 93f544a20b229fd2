//! Results tab: loading feedback, the four result tiles, the enlarged view,
//! downloads and the collage export.

use crate::constants::*;
use crate::dom;
use crate::Shared;
use anomaly_core::collage::*;
use anomaly_core::constants::LOADING_MESSAGE_INTERVAL_MS;
use anomaly_core::{loading_message, InferenceResults, ResultKind, ResultTile, Tab};
use instant::Instant;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Bring the tabs and results panel in line with the session.
pub fn sync(app: &Shared) {
    let doc = &app.document;
    let session = app.session.borrow();
    let on_results = session.tab() == Tab::Results;
    dom::set_hidden(doc, UPLOAD_PANEL_ID, on_results);
    dom::set_hidden(doc, RESULTS_PANEL_ID, !on_results);
    dom::set_class(doc, UPLOAD_TAB_ID, ACTIVE_CLASS, !on_results);
    dom::set_class(doc, RESULTS_TAB_ID, ACTIVE_CLASS, on_results);

    let loading = session.is_loading();
    dom::set_hidden(doc, LOADING_ID, !loading);
    dom::set_hidden(doc, RESULTS_EMPTY_ID, loading || session.results().is_some());
    dom::set_disabled(doc, COLLAGE_BUTTON_ID, session.results().is_none());
    dom::set_disabled(doc, DOWNLOAD_ALL_ID, session.results().is_none());

    let enlarged = session
        .selected()
        .and_then(|kind| session.results().map(|r| (kind, r.url(kind))));
    dom::set_hidden(doc, RESULTS_GRID_ID, enlarged.is_some());
    dom::set_hidden(doc, DETAIL_PANEL_ID, enlarged.is_none());
    if let Some((kind, url)) = enlarged {
        if let Ok(img) = dom::by_id::<web::HtmlImageElement>(doc, DETAIL_IMAGE_ID) {
            img.set_src(url);
            img.set_alt(kind.label());
        }
        dom::set_text(doc, DETAIL_TITLE_ID, kind.label());
    }

    if let Err(e) = render_tiles(doc, session.results()) {
        log::warn!("[results] render failed: {:?}", e);
    }
}

fn render_tiles(document: &web::Document, results: Option<&InferenceResults>) -> Result<(), JsValue> {
    let Some(grid) = document.get_element_by_id(RESULTS_GRID_ID) else {
        return Ok(());
    };
    grid.set_inner_html("");
    let Some(results) = results else {
        return Ok(());
    };
    for tile in results.tiles() {
        grid.append_child(&tile_element(document, tile)?)?;
    }
    Ok(())
}

fn tile_element(document: &web::Document, tile: ResultTile<'_>) -> Result<web::Element, JsValue> {
    let card = document.create_element("figure")?;
    card.set_class_name("result-tile");
    card.set_attribute(RESULT_KIND_ATTR, tile.kind.key())?;

    let img = document.create_element("img")?;
    img.set_attribute("src", tile.url)?;
    img.set_attribute("alt", tile.kind.label())?;
    card.append_child(&img)?;

    let caption = document.create_element("figcaption")?;
    let title = document.create_element("h3")?;
    title.set_text_content(Some(tile.kind.label()));
    caption.append_child(&title)?;
    let desc = document.create_element("p")?;
    desc.set_text_content(Some(tile.kind.description()));
    caption.append_child(&desc)?;

    let link = document.create_element("a")?;
    link.set_attribute("href", tile.url)?;
    link.set_attribute("download", &tile.kind.download_name())?;
    link.set_class_name("download");
    link.set_text_content(Some("Download"));
    caption.append_child(&link)?;

    card.append_child(&caption)?;
    Ok(card)
}

/// Step the loading caption while this submit is in flight. A later submit
/// starts its own ticker, so this one stops as soon as the id moves on.
pub fn start_loading_ticker(app: &Shared) {
    let app = app.clone();
    let submit_id = app.session.borrow().submit_id();
    spawn_local(async move {
        let started = Instant::now();
        loop {
            {
                let session = app.session.borrow();
                if !session.is_loading() || session.submit_id() != submit_id {
                    break;
                }
            }
            dom::set_text(&app.document, LOADING_TEXT_ID, loading_message(started.elapsed()));
            if let Err(e) = dom::sleep_ms(LOADING_MESSAGE_INTERVAL_MS as u32).await {
                log::warn!("[results] loading ticker stopped: {:?}", e);
                break;
            }
        }
    });
}

pub fn wire_results(app: &Shared) {
    wire_tile_select(app);
    wire_detail_close(app);
    wire_download_all(app);
    wire_collage(app);
}

/// One delegated click handler on the grid; tiles carry their result key.
fn wire_tile_select(app: &Shared) {
    let Some(grid) = app.document.get_element_by_id(RESULTS_GRID_ID) else {
        log::warn!("[results] no #{} grid", RESULTS_GRID_ID);
        return;
    };
    let app = app.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) else {
            return;
        };
        // the per-tile download link keeps its own behaviour
        if target.closest("a").ok().flatten().is_some() {
            return;
        }
        let kind = target
            .closest(&format!("[{}]", RESULT_KIND_ATTR))
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute(RESULT_KIND_ATTR))
            .and_then(|key| ResultKind::from_key(&key));
        if let Some(kind) = kind {
            if app.session.borrow_mut().select_result(kind) {
                log::debug!("[results] enlarged {}", kind.key());
                app.refresh();
            }
        }
    }) as Box<dyn FnMut(_)>);
    let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_detail_close(app: &Shared) {
    for id in [DETAIL_CLOSE_ID, DETAIL_IMAGE_ID] {
        let app_click = app.clone();
        dom::add_click_listener(&app.document, id, move || {
            app_click.session.borrow_mut().close_selected();
            app_click.refresh();
        });
    }
}

fn wire_download_all(app: &Shared) {
    let app_click = app.clone();
    dom::add_click_listener(&app.document, DOWNLOAD_ALL_ID, move || {
        let session = app_click.session.borrow();
        let Some(results) = session.results() else {
            return;
        };
        for tile in results.tiles() {
            let name = tile.kind.download_name();
            if let Err(e) = dom::trigger_download(&app_click.document, tile.url, &name) {
                log::error!("[results] download of {} failed: {:?}", tile.kind.key(), e);
            }
        }
        log::info!("[results] downloaded all images");
    });
}

fn wire_collage(app: &Shared) {
    let app_click = app.clone();
    dom::add_click_listener(&app.document, COLLAGE_BUTTON_ID, move || {
        let Some(results) = app_click.session.borrow().results().cloned() else {
            return;
        };
        let document = app_click.document.clone();
        spawn_local(async move {
            match export_collage(&document, &results).await {
                Ok(()) => log::info!("[results] collage saved"),
                Err(e) => log::error!("[results] collage failed: {:?}", e),
            }
        });
    });
}

async fn export_collage(document: &web::Document, results: &InferenceResults) -> anyhow::Result<()> {
    let js = |e: JsValue| anyhow::anyhow!("{:?}", e);
    let canvas = document
        .create_element("canvas")
        .map_err(js)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(js)?;
    let (w, h) = collage_size();
    canvas.set_width(w);
    canvas.set_height(h);
    let ctx = dom::context_2d(&canvas)?;

    ctx.set_fill_style_str(COLLAGE_BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    ctx.set_font(COLLAGE_FONT);
    ctx.set_text_align("center");

    for cell in collage_layout() {
        let img = load_image(results.url(cell.kind)).await?;
        ctx.set_fill_style_str(COLLAGE_TEXT_COLOR);
        ctx.fill_text(cell.label, cell.label_x, cell.label_y).map_err(js)?;
        ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &img,
            cell.image_x,
            cell.image_y,
            cell.image_size,
            cell.image_size,
        )
        .map_err(js)?;
    }

    let url = canvas.to_data_url_with_type("image/png").map_err(js)?;
    dom::trigger_download(document, &url, COLLAGE_FILE_NAME)
}

async fn load_image(src: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // keeps the canvas exportable for same-origin and CORS-enabled hosts
    img.set_cross_origin(Some("anonymous"));
    img.set_src(src);
    JsFuture::from(img.decode())
        .await
        .map_err(|e| anyhow::anyhow!("image {} failed to load: {:?}", src, e))?;
    Ok(img)
}
