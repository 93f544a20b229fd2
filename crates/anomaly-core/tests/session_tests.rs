// End-to-end tests of the submit flow against an in-process stub backend.

use anomaly_core::*;

/// Records every request it is asked to serve.
#[derive(Default)]
struct StubBackend {
    calls: Vec<InferenceRequest>,
}

impl StubBackend {
    fn serve(&mut self, req: &InferenceRequest) -> Result<InferenceResults, InferenceError> {
        self.calls.push(req.clone());
        InferenceResults::from_json(
            r#"{
                "input_rgb": "/img/rgb.png",
                "point_cloud_mean": "/img/pc.png",
                "residual_2d": "/img/r2d.png",
                "combined_residual": "/img/comb.png"
            }"#,
        )
    }
}

fn submit(session: &mut Session, backend: &mut StubBackend, now_ms: f64) {
    if let Some(req) = session.begin_submit(now_ms) {
        let outcome = backend.serve(&req);
        session.finish_submit(outcome, now_ms + 2000.0);
    }
}

fn png() -> FileMeta {
    FileMeta::new("bagel_000.png", "image/png", 512_000)
}

fn tiff() -> FileMeta {
    FileMeta::new("bagel_000.tiff", "image/tiff", 2_048_000)
}

#[test]
fn valid_submit_shows_four_labelled_results_in_order() {
    let mut session = Session::new(&AppConfig::default());
    let mut backend = StubBackend::default();
    session.set_rgb(Some(png()));
    session.set_tiff(Some(tiff()));
    assert!(session.set_class("bagel"));
    assert!(session.can_submit());

    submit(&mut session, &mut backend, 0.0);

    assert_eq!(backend.calls.len(), 1);
    assert_eq!(backend.calls[0].class_name, "bagel");
    assert_eq!(session.tab(), Tab::Results);
    assert!(!session.is_loading());

    let results = session.results().expect("results");
    let shown: Vec<(&str, &str)> = results.tiles().iter().map(|t| (t.kind.label(), t.url)).collect();
    assert_eq!(
        shown,
        [
            ("RGB", "/img/rgb.png"),
            ("Point Cloud", "/img/pc.png"),
            ("2D", "/img/r2d.png"),
            ("Anomaly Map", "/img/comb.png"),
        ]
    );
    assert_eq!(
        session.toasts().last().map(|t| (t.kind, t.message.as_str())),
        Some((ToastKind::Success, "Anomaly detection completed successfully!"))
    );
}

#[test]
fn non_png_rgb_is_rejected_without_a_request() {
    let mut session = Session::new(&AppConfig::default());
    let mut backend = StubBackend::default();
    session.set_rgb(Some(FileMeta::new("photo.jpg", "image/jpeg", 10)));
    session.set_tiff(Some(tiff()));

    submit(&mut session, &mut backend, 0.0);

    assert!(backend.calls.is_empty());
    assert_eq!(session.tab(), Tab::Upload);
    assert_eq!(
        session.toasts().last().map(|t| (t.kind, t.message.as_str())),
        Some((ToastKind::Error, "RGB file must be a PNG image"))
    );
}

#[test]
fn non_tiff_cloud_is_rejected_without_a_request() {
    let mut session = Session::new(&AppConfig::default());
    let mut backend = StubBackend::default();
    session.set_rgb(Some(png()));
    session.set_tiff(Some(FileMeta::new("cloud.ply", "application/octet-stream", 10)));

    submit(&mut session, &mut backend, 0.0);

    assert!(backend.calls.is_empty());
    assert_eq!(
        session.toasts().last().map(|t| t.message.as_str()),
        Some("Point cloud file must be a TIFF file")
    );
}

#[test]
fn missing_file_is_rejected_and_toast_expires() {
    let mut session = Session::new(&AppConfig::default());
    let mut backend = StubBackend::default();
    session.set_rgb(Some(png()));

    submit(&mut session, &mut backend, 100.0);

    assert!(backend.calls.is_empty());
    assert_eq!(session.toasts().len(), 1);
    assert_eq!(session.toasts_mut().expire(5099.0), 0);
    assert_eq!(session.toasts_mut().expire(5100.0), 1);
}

#[test]
fn new_submit_clears_previous_results() {
    let mut session = Session::new(&AppConfig::default());
    let mut backend = StubBackend::default();
    session.set_rgb(Some(png()));
    session.set_tiff(Some(tiff()));
    submit(&mut session, &mut backend, 0.0);
    assert!(session.results().is_some());

    assert!(session.begin_submit(10_000.0).is_some());
    assert!(session.results().is_none());
    assert!(session.is_loading());
}

#[test]
fn clicked_result_is_enlarged_until_closed_or_resubmitted() {
    let mut session = Session::new(&AppConfig::default());
    let mut backend = StubBackend::default();
    session.set_rgb(Some(png()));
    session.set_tiff(Some(tiff()));
    submit(&mut session, &mut backend, 0.0);

    let kind = ResultKind::from_key("combined_residual").expect("known key");
    assert!(session.select_result(kind));
    let url = session.selected().and_then(|k| session.results().map(|r| r.url(k)));
    assert_eq!(url, Some("/img/comb.png"));

    session.close_selected();
    assert_eq!(session.selected(), None);

    assert!(session.select_result(ResultKind::InputRgb));
    assert!(session.begin_submit(10_000.0).is_some());
    assert_eq!(session.selected(), None);
}

#[test]
fn download_all_names_every_result_by_its_key() {
    let mut session = Session::new(&AppConfig::default());
    let mut backend = StubBackend::default();
    session.set_rgb(Some(png()));
    session.set_tiff(Some(tiff()));
    submit(&mut session, &mut backend, 0.0);

    let results = session.results().expect("results");
    let downloads: Vec<(&str, String)> = results
        .tiles()
        .iter()
        .map(|t| (t.url, t.kind.download_name()))
        .collect();
    assert_eq!(
        downloads,
        [
            ("/img/rgb.png", "input_rgb.png".to_string()),
            ("/img/pc.png", "point_cloud_mean.png".to_string()),
            ("/img/r2d.png", "residual_2d.png".to_string()),
            ("/img/comb.png", "combined_residual.png".to_string()),
        ]
    );
}
