//! Upload-and-submit state for the analysis panel.
//!
//! The session never performs I/O. [`Session::begin_submit`] hands back the
//! request to send (or nothing, when validation fails) and the caller feeds
//! the outcome back through [`Session::finish_submit`].

use crate::config::AppConfig;
use crate::inference::{
    find_class, InferenceError, InferenceRequest, InferenceResults, ResultKind, SUCCESS_MESSAGE,
};
use crate::toast::{ToastKind, ToastQueue};
use crate::upload::{validate, FileMeta};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Upload,
    Results,
}

#[derive(Clone, Debug)]
pub struct Session {
    rgb: Option<FileMeta>,
    tiff: Option<FileMeta>,
    class_name: String,
    loading: bool,
    results: Option<InferenceResults>,
    tab: Tab,
    toasts: ToastQueue,
    /// Bumped on every accepted submit; background tasks compare against it.
    submit_id: u64,
    /// Result shown enlarged instead of the grid.
    selected: Option<ResultKind>,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            rgb: None,
            tiff: None,
            class_name: config.default_class.clone(),
            loading: false,
            results: None,
            tab: Tab::Upload,
            toasts: ToastQueue::new(config.toast_lifetime_ms),
            submit_id: 0,
            selected: None,
        }
    }

    pub fn rgb(&self) -> Option<&FileMeta> {
        self.rgb.as_ref()
    }

    pub fn tiff(&self) -> Option<&FileMeta> {
        self.tiff.as_ref()
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> Option<&InferenceResults> {
        self.results.as_ref()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn submit_id(&self) -> u64 {
        self.submit_id
    }

    pub fn selected(&self) -> Option<ResultKind> {
        self.selected
    }

    /// Enlarge one result. Ignored while there is nothing to show.
    pub fn select_result(&mut self, kind: ResultKind) -> bool {
        if self.results.is_none() {
            return false;
        }
        self.selected = Some(kind);
        true
    }

    pub fn close_selected(&mut self) {
        self.selected = None;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastQueue {
        &mut self.toasts
    }

    pub fn set_rgb(&mut self, file: Option<FileMeta>) {
        self.rgb = file;
    }

    pub fn set_tiff(&mut self, file: Option<FileMeta>) {
        self.tiff = file;
    }

    /// Only catalogued classes are accepted; anything else is ignored.
    pub fn set_class(&mut self, name: &str) -> bool {
        if find_class(name).is_none() {
            log::warn!("[session] ignoring unknown class {:?}", name);
            return false;
        }
        self.class_name = name.to_string();
        true
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        self.rgb.is_some() && self.tiff.is_some() && !self.loading
    }

    /// Validate the inputs and, if they pass, move into the loading state.
    /// Returns the request to send. A rejected submit leaves an error toast
    /// and changes nothing else; a submit while one is in flight is dropped.
    pub fn begin_submit(&mut self, now_ms: f64) -> Option<InferenceRequest> {
        if self.loading {
            return None;
        }
        if let Err(e) = validate(self.rgb.as_ref(), self.tiff.as_ref()) {
            log::info!("[session] submit rejected: {}", e);
            self.toasts.push(ToastKind::Error, e.to_string(), now_ms);
            return None;
        }
        let (rgb, tiff) = (self.rgb.clone()?, self.tiff.clone()?);
        self.results = None;
        self.selected = None;
        self.tab = Tab::Results;
        self.loading = true;
        self.submit_id += 1;
        Some(InferenceRequest {
            rgb,
            tiff,
            class_name: self.class_name.clone(),
        })
    }

    pub fn finish_submit(&mut self, outcome: Result<InferenceResults, InferenceError>, now_ms: f64) {
        self.loading = false;
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.toasts.push(ToastKind::Success, SUCCESS_MESSAGE, now_ms);
            }
            Err(e) => {
                log::warn!("[session] inference failed: {}", e);
                self.toasts.push(ToastKind::Error, e.user_message(), now_ms);
            }
        }
    }

    /// Back to a blank upload form.
    pub fn reset_inputs(&mut self) {
        self.tab = Tab::Upload;
        self.results = None;
        self.selected = None;
        self.rgb = None;
        self.tiff = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> Session {
        let mut s = Session::new(&AppConfig::default());
        s.set_rgb(Some(FileMeta::new("a.png", "image/png", 10)));
        s.set_tiff(Some(FileMeta::new("a.tiff", "image/tiff", 10)));
        s
    }

    #[test]
    fn second_submit_while_loading_is_dropped() {
        let mut s = ready();
        assert!(s.begin_submit(0.0).is_some());
        assert!(!s.can_submit());
        assert!(s.begin_submit(1.0).is_none());
        assert!(s.toasts().is_empty());
    }

    #[test]
    fn failure_clears_loading_and_keeps_no_results() {
        let mut s = ready();
        s.begin_submit(0.0);
        s.finish_submit(Err(InferenceError::Http("Bad Request".into())), 5.0);
        assert!(!s.is_loading());
        assert!(s.results().is_none());
        assert_eq!(
            s.toasts().last().map(|t| t.message.as_str()),
            Some("Anomaly detection failed. Please try again.")
        );
    }

    #[test]
    fn reset_returns_to_upload() {
        let mut s = ready();
        s.begin_submit(0.0);
        assert_eq!(s.tab(), Tab::Results);
        s.reset_inputs();
        assert_eq!(s.tab(), Tab::Upload);
        assert!(s.rgb().is_none() && s.tiff().is_none());
    }

    #[test]
    fn each_accepted_submit_gets_a_new_id() {
        let mut s = ready();
        assert_eq!(s.submit_id(), 0);
        s.begin_submit(0.0);
        assert_eq!(s.submit_id(), 1);
        // dropped while in flight
        s.begin_submit(1.0);
        assert_eq!(s.submit_id(), 1);
        s.finish_submit(Err(InferenceError::Network("down".into())), 2.0);
        s.begin_submit(3.0);
        assert_eq!(s.submit_id(), 2);

        s.finish_submit(Err(InferenceError::Network("down".into())), 4.0);
        s.set_rgb(None);
        assert!(s.begin_submit(5.0).is_none());
        assert_eq!(s.submit_id(), 2);
    }

    #[test]
    fn selection_needs_results() {
        let mut s = ready();
        assert!(!s.select_result(ResultKind::Residual2d));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn unknown_class_is_ignored() {
        let mut s = ready();
        assert!(!s.set_class("teapot"));
        assert_eq!(s.class_name(), "cable_gland");
        assert!(s.set_class("bagel"));
    }
}
