use serde::{Deserialize, Serialize};

/// Bir (enlik, uzunluq) cütü — xəritə ilə form arasında paylaşılan dəyər.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn in_bounds(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchStatus {
    Active,
    Inactive,
}

impl BranchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BranchStatus::Active => "active",
            BranchStatus::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BranchStatus::Active => "Aktiv",
            BranchStatus::Inactive => "Deaktiv",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            BranchStatus::Active => BranchStatus::Inactive,
            BranchStatus::Inactive => BranchStatus::Active,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub lat: f64,
    pub lng: f64,
    /// Directly settable, not derived
    pub status: BranchStatus,
}

impl Branch {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }

    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.lat = coordinate.lat;
        self.lng = coordinate.lng;
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchPayload {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBranchPayload {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub lat: f64,
    pub lng: f64,
    pub is_active: bool,
}
