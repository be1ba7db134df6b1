//! Wire DTOs for the REST boundary.
//!
//! DESIGN
//! ======
//! The backend is loosely typed: ids arrive as strings or numbers and list
//! endpoints may or may not wrap their arrays. These types normalise that at
//! the edge so the rest of the client sees one shape. Plot payloads are not
//! modelled here; they stay raw JSON until `state::plot_sync` compares them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A land development whose site plan the viewer shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venture {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Site-plan raster; ventures without one cannot be viewed.
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub calibration: Calibration,
}

/// Whether image pixels have been mapped to real-world units.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    #[serde(default)]
    pub is_calibrated: bool,
}

/// `GET /ventures` body: either a bare array or `{ "ventures": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VentureList {
    Bare(Vec<Venture>),
    Wrapped { ventures: Vec<Venture> },
}

impl VentureList {
    #[must_use]
    pub fn into_vec(self) -> Vec<Venture> {
        match self {
            Self::Bare(ventures) | Self::Wrapped { ventures } => ventures,
        }
    }
}

/// `POST /enquiries` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryRequest {
    pub venture_id: String,
    pub plot_no: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_owned()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("invalid venture id: {other}"))),
    }
}
