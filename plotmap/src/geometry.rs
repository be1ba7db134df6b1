//! Geometry loader: plot features from the backend turned into hit-testable shapes.
//!
//! The backend delivers a GeoJSON-like feature list whose rings are in image
//! pixel space with the origin at the top-left. [`PlotScene::load_features`]
//! flips each ring into the y-up world space used by the camera, computes the
//! label centroid and the status fill colour, and replaces the previous
//! snapshot wholesale. Features that cannot form a valid polygon are skipped
//! individually so one bad record never blanks the map.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::collections::HashSet;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::labels::LabelAnchor;
use crate::math::{Bounds, Point, polygon_centroid};

// =============================================================
// Status
// =============================================================

/// Sales status of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlotStatus {
    Available,
    Sold,
    Booked,
    Reserved,
    Hold,
    TentativelyBooked,
    Cip,
    Blocked,
    #[default]
    Unknown,
}

impl PlotStatus {
    /// Every status in legend order.
    pub const ALL: [PlotStatus; 9] = [
        Self::Available,
        Self::Booked,
        Self::TentativelyBooked,
        Self::Reserved,
        Self::Hold,
        Self::Sold,
        Self::Cip,
        Self::Blocked,
        Self::Unknown,
    ];

    /// Parse a backend status string. Case, spaces and hyphens are ignored; anything else is `Unknown`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "available" => Self::Available,
            "sold" => Self::Sold,
            "booked" => Self::Booked,
            "reserved" => Self::Reserved,
            "hold" | "on_hold" => Self::Hold,
            "tentatively_booked" => Self::TentativelyBooked,
            "cip" => Self::Cip,
            "blocked" => Self::Blocked,
            _ => Self::Unknown,
        }
    }

    /// Wire name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Booked => "booked",
            Self::Reserved => "reserved",
            Self::Hold => "hold",
            Self::TentativelyBooked => "tentatively_booked",
            Self::Cip => "cip",
            Self::Blocked => "blocked",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label for legends and dialogs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Sold => "Sold",
            Self::Booked => "Booked",
            Self::Reserved => "Reserved",
            Self::Hold => "On hold",
            Self::TentativelyBooked => "Tentatively booked",
            Self::Cip => "CIP",
            Self::Blocked => "Blocked",
            Self::Unknown => "Unknown",
        }
    }

    /// Fill colour for the plot polygon. Total: unmapped statuses get neutral grey.
    #[must_use]
    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Available => "#22c55e",
            Self::Sold => "#ef4444",
            Self::Booked => "#f97316",
            Self::Reserved => "#3b82f6",
            Self::Hold => "#a855f7",
            Self::TentativelyBooked => "#facc15",
            Self::Cip => "#06b6d4",
            Self::Blocked => "#475569",
            Self::Unknown => "#9ca3af",
        }
    }
}

impl Serialize for PlotStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlotStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Any non-string value is an unrecognised status, not a broken feature.
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => Self::parse(&s),
            _ => Self::Unknown,
        })
    }
}

// =============================================================
// Wire types
// =============================================================

/// Envelope of `GET /plots`. Features stay raw so each one is validated on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
}

/// One plot polygon as delivered by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotFeature {
    pub geometry: PlotGeometry,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub properties: PlotProperties,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Polygon geometry. Only the first (outer) ring is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Rings of `[x, y]` pixel pairs; extra ordinates are ignored.
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

/// Plot metadata carried alongside the polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotProperties {
    /// Plot number shown on the label; numbers on the wire are stringified.
    #[serde(default, alias = "plot_no", deserialize_with = "deserialize_string_or_number")]
    pub plot_no: String,
    #[serde(default)]
    pub status: PlotStatus,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub area: Option<f64>,
    #[serde(default)]
    pub facing: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    /// Any other fields (customer, notes, ...) preserved for the detail dialog.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s.trim().to_owned()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        serde_json::Value::String(s) => match s.trim().replace(',', "").parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => None,
        },
        _ => None,
    })
}

/// Why a feature could not become a plot shape.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("feature {index}: malformed payload: {source}")]
    Malformed { index: usize, source: serde_json::Error },
    #[error("plot {plot_no:?}: polygon has no outer ring")]
    MissingRing { plot_no: String },
    #[error("plot {plot_no:?}: coordinate {position} is not a finite [x, y] pair")]
    InvalidCoordinate { plot_no: String, position: usize },
    #[error("plot {plot_no:?}: ring needs at least 3 distinct points, found {found}")]
    TooFewPoints { plot_no: String, found: usize },
    #[error("plot {plot_no:?}: ring encloses no area")]
    ZeroArea { plot_no: String },
}

/// Deserialize each raw feature independently.
///
/// Returns the features that parsed plus one error per feature that did not.
#[must_use]
pub fn parse_features(values: Vec<serde_json::Value>) -> (Vec<PlotFeature>, Vec<GeometryError>) {
    let mut features = Vec::with_capacity(values.len());
    let mut errors = Vec::new();
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<PlotFeature>(value) {
            Ok(feature) => features.push(feature),
            Err(source) => errors.push(GeometryError::Malformed { index, source }),
        }
    }
    (features, errors)
}

// =============================================================
// Shapes
// =============================================================

/// A filled plot polygon in world space, tagged with its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotShape {
    pub properties: PlotProperties,
    /// Outer ring in world space, without a repeated closing point.
    pub ring: Vec<Point>,
    pub bounds: Bounds,
    /// Area-weighted centroid; the label anchor.
    pub centroid: Point,
    pub fill: &'static str,
    pub visible: bool,
}

impl PlotShape {
    /// Build a shape from a feature, flipping pixel y into world y.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when the outer ring is missing, contains a
    /// non-finite or short coordinate, has fewer than three distinct points,
    /// or encloses no area.
    pub fn build(feature: &PlotFeature, image_height: f64) -> Result<Self, GeometryError> {
        let plot_no = feature.properties.plot_no.clone();
        let Some(raw_ring) = feature.geometry.coordinates.first() else {
            return Err(GeometryError::MissingRing { plot_no });
        };

        let mut ring: Vec<Point> = Vec::with_capacity(raw_ring.len());
        for (position, pair) in raw_ring.iter().enumerate() {
            let (Some(&x), Some(&y)) = (pair.first(), pair.get(1)) else {
                return Err(GeometryError::InvalidCoordinate { plot_no, position });
            };
            let world = Point::new(x, image_height - y);
            if !world.is_finite() {
                return Err(GeometryError::InvalidCoordinate { plot_no, position });
            }
            if ring.last() != Some(&world) {
                ring.push(world);
            }
        }
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(GeometryError::TooFewPoints { plot_no, found: ring.len() });
        }

        let Some(centroid) = polygon_centroid(&ring) else {
            return Err(GeometryError::ZeroArea { plot_no });
        };
        let Some(bounds) = Bounds::from_points(&ring) else {
            return Err(GeometryError::TooFewPoints { plot_no, found: 0 });
        };

        Ok(Self {
            fill: feature.properties.status.fill_color(),
            properties: feature.properties.clone(),
            ring,
            bounds,
            centroid,
            visible: true,
        })
    }

    #[must_use]
    pub fn plot_no(&self) -> &str {
        &self.properties.plot_no
    }

    #[must_use]
    pub fn status(&self) -> PlotStatus {
        self.properties.status
    }

    /// World-space containment: bounding-box reject, then ray cast.
    #[must_use]
    pub fn contains(&self, world: Point) -> bool {
        self.bounds.contains(world) && crate::math::point_in_polygon(world, &self.ring)
    }
}

fn status_allowed(filter: Option<&HashSet<PlotStatus>>, status: PlotStatus) -> bool {
    filter.is_none_or(|allowed| allowed.contains(&status))
}

/// Outcome of a geometry rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

// =============================================================
// Scene
// =============================================================

/// The plot shapes for one venture snapshot.
///
/// Owned by one viewer instance. Every load replaces all shapes; there is no
/// incremental patching.
#[derive(Debug, Default)]
pub struct PlotScene {
    shapes: Vec<PlotShape>,
    features: Vec<PlotFeature>,
    image_height: Option<f64>,
    status_filter: Option<HashSet<PlotStatus>>,
}

impl PlotScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with `features`.
    ///
    /// If the image size is not known yet the features are kept and built by
    /// [`PlotScene::set_image_size`].
    pub fn load_features(&mut self, features: Vec<PlotFeature>) -> LoadReport {
        self.features = features;
        self.rebuild()
    }

    /// Record the site image height (needed for the y-flip) and rebuild.
    pub fn set_image_size(&mut self, image_height: f64) -> LoadReport {
        self.image_height = Some(image_height);
        self.rebuild()
    }

    /// Drop all shapes, retained features and the image size.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.features.clear();
        self.image_height = None;
    }

    fn rebuild(&mut self) -> LoadReport {
        self.shapes.clear();
        let Some(image_height) = self.image_height else {
            return LoadReport::default();
        };
        let mut report = LoadReport::default();
        for feature in &self.features {
            match PlotShape::build(feature, image_height) {
                Ok(mut shape) => {
                    shape.visible = status_allowed(self.status_filter.as_ref(), shape.status());
                    self.shapes.push(shape);
                    report.loaded += 1;
                }
                Err(err) => {
                    log::warn!("skipping plot feature: {err}");
                    report.skipped += 1;
                }
            }
        }
        report
    }

    /// Show only the given statuses; `None` shows everything.
    pub fn set_status_filter(&mut self, filter: Option<HashSet<PlotStatus>>) {
        for shape in &mut self.shapes {
            shape.visible = status_allowed(filter.as_ref(), shape.status());
        }
        self.status_filter = filter;
    }

    /// Shapes in insertion order (later shapes are drawn on top).
    #[must_use]
    pub fn shapes(&self) -> &[PlotShape] {
        &self.shapes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Topmost shape with this plot number.
    #[must_use]
    pub fn find(&self, plot_no: &str) -> Option<&PlotShape> {
        self.shapes.iter().rev().find(|s| s.plot_no() == plot_no)
    }

    /// One label anchor per shape, in shape order.
    #[must_use]
    pub fn anchors(&self) -> Vec<LabelAnchor> {
        self.shapes
            .iter()
            .map(|s| LabelAnchor {
                plot_no: s.plot_no().to_owned(),
                status: s.status(),
                world: s.centroid,
                visible: s.visible,
            })
            .collect()
    }

    /// Shape count per status in [`PlotStatus::ALL`] order, zero counts omitted.
    #[must_use]
    pub fn status_counts(&self) -> Vec<(PlotStatus, usize)> {
        PlotStatus::ALL
            .iter()
            .map(|&status| (status, self.shapes.iter().filter(|s| s.status() == status).count()))
            .filter(|&(_, count)| count > 0)
            .collect()
    }
}
