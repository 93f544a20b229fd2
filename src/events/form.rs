//! Upload form wiring: file pickers, class select, submit and reset.

use crate::api;
use crate::constants::*;
use crate::dom;
use crate::input;
use crate::results;
use crate::toast;
use crate::viewer;
use crate::Shared;
use anomaly_core::{classes_in, Dataset, Tab};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Rgb,
    Tiff,
}

impl Slot {
    fn input_id(self) -> &'static str {
        match self {
            Slot::Rgb => RGB_INPUT_ID,
            Slot::Tiff => TIFF_INPUT_ID,
        }
    }
}

pub fn wire_form(app: &Shared) -> anyhow::Result<()> {
    populate_class_select(app)?;
    wire_file_input(app, Slot::Rgb)?;
    wire_file_input(app, Slot::Tiff)?;
    wire_remove(app, RGB_REMOVE_ID, Slot::Rgb);
    wire_remove(app, TIFF_REMOVE_ID, Slot::Tiff);
    wire_class_select(app)?;
    wire_tabs(app);

    let app_submit = app.clone();
    dom::add_click_listener(&app.document, SUBMIT_ID, move || submit(&app_submit));

    let app_reset = app.clone();
    dom::add_click_listener(&app.document, TRY_AGAIN_ID, move || {
        app_reset.session.borrow_mut().reset_inputs();
        *app_reset.files.borrow_mut() = input::SelectedFiles::default();
        for slot in [Slot::Rgb, Slot::Tiff] {
            clear_input(&app_reset.document, slot);
        }
        app_reset.viewer.borrow_mut().clear();
        log::info!("[form] reset");
        app_reset.refresh();
    });
    Ok(())
}

/// Option groups per dataset, default class preselected.
fn populate_class_select(app: &Shared) -> anyhow::Result<()> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let select: web::HtmlSelectElement = dom::by_id(&app.document, CLASS_SELECT_ID)?;
    select.set_inner_html("");
    for dataset in Dataset::ALL {
        let group = app.document.create_element("optgroup").map_err(js)?;
        group.set_attribute("label", dataset.label()).map_err(js)?;
        for class in classes_in(dataset) {
            let option = app.document.create_element("option").map_err(js)?;
            option.set_attribute("value", class.name).map_err(js)?;
            option.set_text_content(Some(&class.display_name()));
            group.append_child(&option).map_err(js)?;
        }
        select.append_child(&group).map_err(js)?;
    }
    select.set_value(app.session.borrow().class_name());
    Ok(())
}

fn wire_file_input(app: &Shared, slot: Slot) -> anyhow::Result<()> {
    let el: web::HtmlInputElement = dom::by_id(&app.document, slot.input_id())?;
    let app = app.clone();
    let el_change = el.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let file = input::selected_file(&el_change);
        let meta = file.as_ref().map(input::file_meta);
        if let Some(meta) = &meta {
            log::info!("[form] picked {} ({}, {})", meta.name, meta.mime, meta.size_label());
        }
        {
            let mut session = app.session.borrow_mut();
            let mut files = app.files.borrow_mut();
            match slot {
                Slot::Rgb => {
                    session.set_rgb(meta.clone());
                    files.rgb = file;
                }
                Slot::Tiff => {
                    session.set_tiff(meta.clone());
                    files.tiff = file;
                }
            }
        }
        if slot == Slot::Tiff {
            match meta {
                Some(meta) => spawn_local(viewer::load_file(app.clone(), meta.name)),
                None => app.viewer.borrow_mut().clear(),
            }
        }
        app.refresh();
    }) as Box<dyn FnMut(_)>);
    el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

fn wire_remove(app: &Shared, button_id: &str, slot: Slot) {
    let app_remove = app.clone();
    dom::add_click_listener(&app.document, button_id, move || {
        let app = &app_remove;
        match slot {
            Slot::Rgb => {
                app.session.borrow_mut().set_rgb(None);
                app.files.borrow_mut().rgb = None;
            }
            Slot::Tiff => {
                app.session.borrow_mut().set_tiff(None);
                app.files.borrow_mut().tiff = None;
                app.viewer.borrow_mut().clear();
            }
        }
        clear_input(&app.document, slot);
        app.refresh();
    });
}

fn clear_input(document: &web::Document, slot: Slot) {
    if let Ok(el) = dom::by_id::<web::HtmlInputElement>(document, slot.input_id()) {
        el.set_value("");
    }
}

fn wire_class_select(app: &Shared) -> anyhow::Result<()> {
    let select: web::HtmlSelectElement = dom::by_id(&app.document, CLASS_SELECT_ID)?;
    let app = app.clone();
    let select_change = select.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let value = select_change.value();
        if !app.session.borrow_mut().set_class(&value) {
            select_change.set_value(app.session.borrow().class_name());
        }
    }) as Box<dyn FnMut(_)>);
    select
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

fn wire_tabs(app: &Shared) {
    for (id, tab) in [(UPLOAD_TAB_ID, Tab::Upload), (RESULTS_TAB_ID, Tab::Results)] {
        let app_tab = app.clone();
        dom::add_click_listener(&app.document, id, move || {
            app_tab.session.borrow_mut().set_tab(tab);
            results::sync(&app_tab);
        });
    }
}

fn submit(app: &Shared) {
    let request = app.session.borrow_mut().begin_submit(js_sys::Date::now());
    let Some(request) = request else {
        // rejected or already running; a rejection left a toast behind
        app.refresh();
        toast::schedule_expiry(app);
        return;
    };
    let files = app.files.borrow().clone();
    let (Some(rgb), Some(tiff)) = (files.rgb, files.tiff) else {
        log::error!("[form] session accepted files the page no longer holds");
        app.session.borrow_mut().reset_inputs();
        app.refresh();
        return;
    };
    app.refresh();
    results::start_loading_ticker(app);

    let app = app.clone();
    spawn_local(async move {
        log::info!(
            "[infer] posting {} + {} as {}",
            request.rgb.name,
            request.tiff.name,
            request.class_name
        );
        let outcome =
            api::post_inference(&app.config.endpoint, &rgb, &tiff, &request.class_name).await;
        app.session
            .borrow_mut()
            .finish_submit(outcome, js_sys::Date::now());
        app.refresh();
        toast::schedule_expiry(&app);
    });
}

/// File summaries and the submit button.
pub fn sync(app: &Shared) {
    let doc = &app.document;
    let session = app.session.borrow();
    for (meta, summary_id, remove_id) in [
        (session.rgb(), RGB_SUMMARY_ID, RGB_REMOVE_ID),
        (session.tiff(), TIFF_SUMMARY_ID, TIFF_REMOVE_ID),
    ] {
        match meta {
            Some(m) => dom::set_text(doc, summary_id, &format!("{} ({})", m.name, m.size_label())),
            None => dom::set_text(doc, summary_id, ""),
        }
        dom::set_hidden(doc, remove_id, meta.is_none());
    }
    dom::set_disabled(doc, SUBMIT_ID, !session.can_submit());
    let label = if session.is_loading() {
        "Processing..."
    } else {
        "Run Anomaly Detection"
    };
    dom::set_text(doc, SUBMIT_ID, label);
}
