//! VIN Decoder
//!
//! Looks up a vehicle identification number with the NHTSA vPIC
//! `decodevin` endpoint and matches the result against the catalog.
//!
//! ## Usage
//!
//! ```ignore
//! let decoder = VinDecoder::new();
//! let decoded = decoder.decode("JHMBB2155RC000000").await?;
//! println!("{}", decoded.summary_message(&VehicleCatalog::builtin()));
//! ```
//!
//! One request per call, no retry.

mod error;

pub use error::VinError;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::catalog::{CarModel, VehicleCatalog};

/// Public NHTSA vPIC endpoint
pub const DEFAULT_VIN_API_BASE: &str = "https://vpic.nhtsa.dot.gov/api/vehicles/decodevin";

/// Shortest input sent to the API
pub const MIN_VIN_LENGTH: usize = 5;

/// Maximum number of fields in [`VinDecode::display_fields`]
pub const DISPLAY_FIELD_LIMIT: usize = 10;

/// One decoded variable, e.g. `Make = HONDA`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinField {
    /// vPIC variable name, e.g. "Model Year"
    #[serde(rename = "Variable")]
    pub variable: String,
    /// Decoded value; vPIC sends null for unknown variables
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

/// vPIC response envelope; only the results are used
#[derive(Debug, Deserialize)]
struct DecodeResponse {
    #[serde(rename = "Results")]
    results: Option<Vec<VinField>>,
}

/// Decoded VIN
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VinDecode {
    /// Every variable in response order
    pub fields: Vec<VinField>,
}

impl VinDecode {
    /// Parse a vPIC JSON body
    pub fn from_json(body: &str) -> Result<Self, VinError> {
        let response: DecodeResponse = serde_json::from_str(body)?;
        let fields = response.results.ok_or(VinError::NoResults)?;
        Ok(Self { fields })
    }

    /// Value of a variable, `None` when missing or null
    pub fn value(&self, variable: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.variable == variable)
            .and_then(|f| f.value.as_deref())
    }

    /// Manufacturer name
    pub fn make(&self) -> Option<&str> {
        self.value("Make")
    }

    /// Model name
    pub fn model(&self) -> Option<&str> {
        self.value("Model")
    }

    /// Model year
    pub fn model_year(&self) -> Option<u16> {
        self.value("Model Year")?.trim().parse().ok()
    }

    /// Fields worth showing: non-empty, not "Not Applicable", at most ten
    pub fn display_fields(&self) -> Vec<&VinField> {
        self.fields
            .iter()
            .filter(|f| {
                f.value
                    .as_deref()
                    .is_some_and(|v| !v.is_empty() && v != "Not Applicable")
            })
            .take(DISPLAY_FIELD_LIMIT)
            .collect()
    }

    /// Catalog model whose name contains the decoded model and whose
    /// production years include the decoded year
    ///
    /// The year is checked numerically against the range, so 1994 matches
    /// "1992-1996" while a substring test would not. An empty model never
    /// matches, rather than matching every name.
    pub fn match_catalog<'a>(&self, catalog: &'a VehicleCatalog) -> Option<&'a CarModel> {
        let model = self.model()?.trim().to_lowercase();
        let year = self.model_year()?;
        if model.is_empty() {
            return None;
        }
        catalog
            .models()
            .find(|m| m.name.to_lowercase().contains(&model) && m.built_in(year))
    }

    /// Banner text describing the decode result
    pub fn summary_message(&self, catalog: &VehicleCatalog) -> String {
        let year = self.value("Model Year").unwrap_or("unknown");
        let make = self.make().unwrap_or("unknown");
        let model = self.model().unwrap_or("unknown");
        match self.match_catalog(catalog) {
            Some(_) => format!("VIN decoded: {year} {make} {model}. Click to select."),
            None => format!("VIN decoded: {year} {make} {model}. No exact match in database."),
        }
    }
}

/// Check a VIN before any request is made
pub fn validate_vin(vin: &str) -> Result<&str, VinError> {
    let vin = vin.trim();
    let actual = vin.chars().count();
    if actual < MIN_VIN_LENGTH {
        return Err(VinError::TooShort {
            min: MIN_VIN_LENGTH,
            actual,
        });
    }
    Ok(vin)
}

/// VIN decoding client
pub struct VinDecoder {
    /// HTTP client for API requests
    client: reqwest::Client,
    /// Endpoint the VIN is appended to
    base_url: String,
}

impl Default for VinDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl VinDecoder {
    /// Client for the public NHTSA endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_VIN_API_BASE, concat!("AutoTech/", env!("CARGO_PKG_VERSION")))
    }

    /// Client for a custom endpoint
    pub fn with_base_url(base_url: &str, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        VinDecoder {
            client,
            base_url: base_url.to_string(),
        }
    }

    /// Endpoint in use
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request URL for a VIN: `{base}/{vin}?format=json`
    pub fn decode_url(&self, vin: &str) -> Result<Url, VinError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| VinError::InvalidBaseUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| VinError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(vin);
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }

    /// Decode a VIN
    pub async fn decode(&self, vin: &str) -> Result<VinDecode, VinError> {
        let vin = validate_vin(vin)?;
        let url = self.decode_url(vin)?;
        tracing::info!(%url, "decoding VIN");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "VIN API returned an error");
            return Err(VinError::Status(response.status()));
        }

        let body = response.text().await?;
        let decoded = VinDecode::from_json(&body)?;
        tracing::debug!(fields = decoded.fields.len(), "VIN decoded");
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_vin() {
        assert!(matches!(
            validate_vin(" 1234 "),
            Err(VinError::TooShort { min: 5, actual: 4 })
        ));
        assert_eq!(validate_vin(" JHMBB2155RC000000 ").unwrap(), "JHMBB2155RC000000");
    }

    #[test]
    fn test_decode_url() {
        let decoder = VinDecoder::new();
        assert_eq!(
            decoder.decode_url("JHMBB2155RC000000").unwrap().as_str(),
            "https://vpic.nhtsa.dot.gov/api/vehicles/decodevin/JHMBB2155RC000000?format=json"
        );
    }

    #[test]
    fn test_decode_url_escapes_path() {
        let decoder = VinDecoder::with_base_url("http://localhost:9/decode/", "test");
        assert_eq!(
            decoder.decode_url("AB/CD 1").unwrap().as_str(),
            "http://localhost:9/decode/AB%2FCD%201?format=json"
        );
    }

    #[test]
    fn test_user_messages() {
        let short = validate_vin("").unwrap_err();
        assert_eq!(short.user_message(), "Please enter a valid VIN.");
        assert_eq!(VinError::NoResults.user_message(), "VIN decode failed.");
    }
}
