//! Depot contact directory.
//!
//! Static reference data: enquiry numbers for bus depots, grouped by
//! district. Depot names are display text and are not required to match
//! gazetteer stop names.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

const BUILTIN_DEPOTS: &str = include_str!("depots.json");

/// Errors loading a depot directory.
#[derive(Debug, thiserror::Error)]
pub enum DepotError {
    /// The directory JSON is malformed
    #[error("invalid depot directory: {0}")]
    Json(#[from] serde_json::Error),
}

/// A depot and its enquiry number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Depot {
    pub name: String,
    pub phone: String,
}

/// The depots of one district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "district")]
    pub name: String,
    pub depots: Vec<Depot>,
}

/// A depot found by [`DepotDirectory::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepotMatch<'a> {
    pub district: &'a str,
    #[serde(flatten)]
    pub depot: &'a Depot,
}

/// Read-only depot directory. Cloning shares the data.
#[derive(Debug, Clone, Default)]
pub struct DepotDirectory {
    districts: Arc<[District]>,
}

impl DepotDirectory {
    /// Create a directory from districts, kept in the order given.
    pub fn new(districts: Vec<District>) -> Self {
        Self {
            districts: districts.into(),
        }
    }

    /// Parse a directory from a JSON array of districts.
    ///
    /// # Examples
    ///
    /// ```
    /// use evidebus::depots::DepotDirectory;
    ///
    /// let json = r#"[{"district": "Idukki", "depots": [{"name": "Munnar", "phone": "1"}]}]"#;
    /// let directory = DepotDirectory::from_json(json).unwrap();
    /// assert_eq!(directory.depot_count(), 1);
    /// assert_eq!(directory.districts()[0].name, "Idukki");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, DepotError> {
        let districts: Vec<District> = serde_json::from_str(json)?;
        Ok(Self::new(districts))
    }

    /// The directory compiled into the binary.
    pub fn builtin() -> Result<Self, DepotError> {
        Self::from_json(BUILTIN_DEPOTS)
    }

    /// All districts in directory order.
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// Look up a district by name, ignoring case.
    pub fn district(&self, name: &str) -> Option<&District> {
        let name = name.trim();
        self.districts
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Depots whose name or district contains `query`, ignoring case.
    ///
    /// Results follow directory order. An empty query returns every depot.
    pub fn search(&self, query: &str) -> Vec<DepotMatch<'_>> {
        let needle = query.trim().to_lowercase();
        self.districts
            .iter()
            .flat_map(|district| {
                let district_hit = district.name.to_lowercase().contains(&needle);
                let needle = needle.clone();
                district
                    .depots
                    .iter()
                    .filter(move |depot| {
                        district_hit || depot.name.to_lowercase().contains(&needle)
                    })
                    .map(move |depot| DepotMatch {
                        district: &district.name,
                        depot,
                    })
            })
            .collect()
    }

    /// Total number of depots across all districts.
    pub fn depot_count(&self) -> usize {
        self.districts.iter().map(|d| d.depots.len()).sum()
    }
}
