//! Request/response envelope for the inference endpoint, the object class
//! catalogue and the four result tiles.

use crate::constants::LOADING_MESSAGE_INTERVAL_MS;
use crate::upload::FileMeta;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

// Multipart field names
pub const FIELD_RGB: &str = "rgb_file";
pub const FIELD_TIFF: &str = "tiff_file";
pub const FIELD_CLASS: &str = "class_name";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dataset {
    MvTec3dAd,
    Eyecandies,
    BrokenChair180k,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::MvTec3dAd, Dataset::Eyecandies, Dataset::BrokenChair180k];

    pub fn label(self) -> &'static str {
        match self {
            Dataset::MvTec3dAd => "MVTec 3D-AD",
            Dataset::Eyecandies => "Eyecandies",
            Dataset::BrokenChair180k => "BrokenChair180k",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectClass {
    pub name: &'static str,
    pub dataset: Dataset,
}

impl ObjectClass {
    const fn new(name: &'static str, dataset: Dataset) -> Self {
        Self { name, dataset }
    }

    /// `cable_gland` reads as `cable gland`; only the first underscore goes.
    pub fn display_name(&self) -> String {
        self.name.replacen('_', " ", 1)
    }
}

pub const OBJECT_CLASSES: [ObjectClass; 21] = [
    ObjectClass::new("bagel", Dataset::MvTec3dAd),
    ObjectClass::new("cable_gland", Dataset::MvTec3dAd),
    ObjectClass::new("carrot", Dataset::MvTec3dAd),
    ObjectClass::new("cookie", Dataset::MvTec3dAd),
    ObjectClass::new("dowel", Dataset::MvTec3dAd),
    ObjectClass::new("foam", Dataset::MvTec3dAd),
    ObjectClass::new("peach", Dataset::MvTec3dAd),
    ObjectClass::new("potato", Dataset::MvTec3dAd),
    ObjectClass::new("rope", Dataset::MvTec3dAd),
    ObjectClass::new("tire", Dataset::MvTec3dAd),
    ObjectClass::new("CandyCane", Dataset::Eyecandies),
    ObjectClass::new("ChocolateCookie", Dataset::Eyecandies),
    ObjectClass::new("ChocolatePraline", Dataset::Eyecandies),
    ObjectClass::new("Confetto", Dataset::Eyecandies),
    ObjectClass::new("GummyBear", Dataset::Eyecandies),
    ObjectClass::new("HazelnutTruffle", Dataset::Eyecandies),
    ObjectClass::new("LicoriceSandwich", Dataset::Eyecandies),
    ObjectClass::new("Lollipop", Dataset::Eyecandies),
    ObjectClass::new("Marshmallow", Dataset::Eyecandies),
    ObjectClass::new("PeppermintCandy", Dataset::Eyecandies),
    ObjectClass::new("Chair", Dataset::BrokenChair180k),
];

pub const DEFAULT_CLASS: &str = "cable_gland";

pub fn find_class(name: &str) -> Option<&'static ObjectClass> {
    OBJECT_CLASSES.iter().find(|c| c.name == name)
}

pub fn classes_in(dataset: Dataset) -> impl Iterator<Item = &'static ObjectClass> {
    OBJECT_CLASSES.iter().filter(move |c| c.dataset == dataset)
}

/// What gets posted: two files and the chosen class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InferenceRequest {
    pub rgb: FileMeta,
    pub tiff: FileMeta,
    pub class_name: String,
}

/// Success body: one image URL per result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceResults {
    pub input_rgb: String,
    pub point_cloud_mean: String,
    pub residual_2d: String,
    pub combined_residual: String,
}

impl InferenceResults {
    pub fn from_json(body: &str) -> Result<Self, InferenceError> {
        serde_json::from_str(body).map_err(|e| InferenceError::Malformed(e.to_string()))
    }

    pub fn url(&self, kind: ResultKind) -> &str {
        match kind {
            ResultKind::InputRgb => &self.input_rgb,
            ResultKind::PointCloudMean => &self.point_cloud_mean,
            ResultKind::Residual2d => &self.residual_2d,
            ResultKind::CombinedResidual => &self.combined_residual,
        }
    }

    /// Tiles in display order.
    pub fn tiles(&self) -> [ResultTile<'_>; 4] {
        ResultKind::ALL.map(|kind| ResultTile {
            kind,
            url: self.url(kind),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    InputRgb,
    PointCloudMean,
    Residual2d,
    CombinedResidual,
}

impl ResultKind {
    pub const ALL: [ResultKind; 4] = [
        ResultKind::InputRgb,
        ResultKind::PointCloudMean,
        ResultKind::Residual2d,
        ResultKind::CombinedResidual,
    ];

    /// Response field this image comes from.
    pub fn key(self) -> &'static str {
        match self {
            ResultKind::InputRgb => "input_rgb",
            ResultKind::PointCloudMean => "point_cloud_mean",
            ResultKind::Residual2d => "residual_2d",
            ResultKind::CombinedResidual => "combined_residual",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            ResultKind::InputRgb => "RGB",
            ResultKind::PointCloudMean => "Point Cloud",
            ResultKind::Residual2d => "2D",
            ResultKind::CombinedResidual => "Anomaly Map",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResultKind::InputRgb => "Original RGB input image",
            ResultKind::PointCloudMean => "Grayscale point cloud visualization",
            ResultKind::Residual2d => "Residual analysis (jet colormap)",
            ResultKind::CombinedResidual => "Combined 2D/3D residual analysis",
        }
    }

    /// Caption used in the exported collage, which spells out the residuals.
    pub fn collage_label(self) -> &'static str {
        match self {
            ResultKind::InputRgb => "RGB",
            ResultKind::PointCloudMean => "Point Cloud",
            ResultKind::Residual2d => "2D Residual",
            ResultKind::CombinedResidual => "Combined Residual",
        }
    }

    pub fn download_name(self) -> String {
        format!("{}.png", self.key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultTile<'a> {
    pub kind: ResultKind,
    pub url: &'a str,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InferenceError {
    /// Non-2xx response; carries the status text.
    #[error("API request failed: {0}")]
    Http(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl InferenceError {
    /// All failures look the same to the user.
    pub fn user_message(&self) -> &'static str {
        "Anomaly detection failed. Please try again."
    }
}

pub const SUCCESS_MESSAGE: &str = "Anomaly detection completed successfully!";

pub const LOADING_MESSAGES: [&str; 4] = [
    "Processing Image...",
    "Processing Point Clouds...",
    "Feature Extraction...",
    "Detecting Anomaly...",
];

/// Steps through the loading messages and stays on the last one.
pub fn loading_message(elapsed: Duration) -> &'static str {
    let step = (elapsed.as_millis() / LOADING_MESSAGE_INTERVAL_MS as u128) as usize;
    LOADING_MESSAGES[step.min(LOADING_MESSAGES.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_groups_by_dataset() {
        assert_eq!(classes_in(Dataset::MvTec3dAd).count(), 10);
        assert_eq!(classes_in(Dataset::Eyecandies).count(), 10);
        assert_eq!(classes_in(Dataset::BrokenChair180k).count(), 1);
        assert!(find_class(DEFAULT_CLASS).is_some());
        assert!(find_class("Bagel").is_none());
    }

    #[test]
    fn display_name_replaces_first_underscore() {
        let c = find_class("cable_gland").copied();
        assert_eq!(c.map(|c| c.display_name()), Some("cable gland".to_string()));
    }

    #[test]
    fn loading_messages_advance_then_hold() {
        assert_eq!(loading_message(Duration::from_millis(0)), "Processing Image...");
        assert_eq!(loading_message(Duration::from_millis(1500)), "Processing Point Clouds...");
        assert_eq!(loading_message(Duration::from_millis(3200)), "Feature Extraction...");
        assert_eq!(loading_message(Duration::from_secs(60)), "Detecting Anomaly...");
    }

    #[test]
    fn missing_field_is_malformed() {
        let body = r#"{"input_rgb":"a","point_cloud_mean":"b","residual_2d":"c"}"#;
        assert!(matches!(
            InferenceResults::from_json(body),
            Err(InferenceError::Malformed(_))
        ));
    }

    #[test]
    fn download_names_follow_keys() {
        assert_eq!(ResultKind::Residual2d.download_name(), "residual_2d.png");
    }

    #[test]
    fn kinds_round_trip_through_their_keys() {
        for kind in ResultKind::ALL {
            assert_eq!(ResultKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ResultKind::from_key("depth"), None);
    }
}
