use serde::{Deserialize, Serialize};
use std::fmt;

/// Coordenadas en el orden GeoJSON/Mapbox: (longitude, latitude)
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self { longitude, latitude }
    }

    /// Valida rangos geográficos: lng en [-180, 180], lat en [-90, 90]
    pub fn is_valid(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Posición GeoJSON [lng, lat]
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }

    /// Desde una posición GeoJSON; ignora altitud si viene
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Some(Self::new(*lng, *lat)),
            _ => None,
        }
    }
}

/// Propiedades de una cancha tal como viajan en el GeoJSON
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CourtProperties {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub court_type: String,
    pub hoops: u32,
    pub surface: String,
}

/// Cancha de básquet (punto de interés)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Court {
    pub id: String,
    pub properties: CourtProperties,
    pub coordinates: Coordinates,
}

impl Court {
    pub fn name(&self) -> &str {
        &self.properties.name
    }
}

/// Errores del dataset de canchas
#[derive(Debug, Clone, PartialEq)]
pub enum CourtDataError {
    Parse(String),
    NotAFeatureCollection,
    MissingId { index: usize },
    DuplicateId(String),
    InvalidGeometry { id: String },
    OutOfBounds { id: String, coordinates: Coordinates },
    EmptyName { id: String },
    InvalidProperties { id: String, reason: String },
}

impl fmt::Display for CourtDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourtDataError::Parse(msg) => write!(f, "Invalid GeoJSON: {}", msg),
            CourtDataError::NotAFeatureCollection => write!(f, "Dataset is not a FeatureCollection"),
            CourtDataError::MissingId { index } => write!(f, "Feature #{} has no id", index),
            CourtDataError::DuplicateId(id) => write!(f, "Duplicate court id: {}", id),
            CourtDataError::InvalidGeometry { id } => write!(f, "Court {} is not a Point", id),
            CourtDataError::OutOfBounds { id, coordinates } => write!(
                f,
                "Court {} has out-of-range coordinates ({}, {})",
                id, coordinates.longitude, coordinates.latitude
            ),
            CourtDataError::EmptyName { id } => write!(f, "Court {} has an empty name", id),
            CourtDataError::InvalidProperties { id, reason } => {
                write!(f, "Court {} has invalid properties: {}", id, reason)
            }
        }
    }
}

impl std::error::Error for CourtDataError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinates::new(180.0, -90.0).is_valid());
        assert!(Coordinates::new(139.7005, 35.6617).is_valid());
        assert!(!Coordinates::new(180.5, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, 91.0).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_position_conversion() {
        assert_eq!(
            Coordinates::from_position(&[139.70, 35.67, 12.0]),
            Some(Coordinates::new(139.70, 35.67))
        );
        assert_eq!(Coordinates::from_position(&[1.0]), None);
    }

    #[test]
    fn test_properties_use_camel_case() {
        let json = r#"{"name":"Court A","courtType":"outdoor","hoops":2,"surface":"asphalt"}"#;
        let props: CourtProperties = serde_json::from_str(json).unwrap();
        assert_eq!(props.court_type, "outdoor");
        assert_eq!(props.description, "");
        assert_eq!(props.hoops, 2);
    }
}
