// ============================================================================
// COURT SERVICE - Dataset estático de canchas (GeoJSON embebido en el binario)
// ============================================================================
// Se parsea y valida una sola vez; la colección es inmutable
// ============================================================================

use std::collections::HashSet;
use geojson::{feature::Id, Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use crate::models::{Coordinates, Court, CourtDataError, CourtProperties};

const COURTS_GEOJSON: &str = include_str!("../../assets/courts.geojson");

lazy_static::lazy_static! {
    static ref BUNDLED_COURTS: Result<Vec<Court>, CourtDataError> =
        CourtService::parse_courts(COURTS_GEOJSON);
}

pub struct CourtService;

impl CourtService {
    /// Canchas embebidas (parseadas en el primer acceso)
    pub fn bundled_courts() -> Result<&'static [Court], CourtDataError> {
        match &*BUNDLED_COURTS {
            Ok(courts) => Ok(courts.as_slice()),
            Err(e) => Err(e.clone()),
        }
    }

    /// Parsear y validar un FeatureCollection de canchas
    pub fn parse_courts(raw: &str) -> Result<Vec<Court>, CourtDataError> {
        let geojson: GeoJson = raw
            .parse()
            .map_err(|e: geojson::Error| CourtDataError::Parse(e.to_string()))?;
        let collection = FeatureCollection::try_from(geojson)
            .map_err(|_| CourtDataError::NotAFeatureCollection)?;

        let mut seen = HashSet::new();
        let mut courts = Vec::with_capacity(collection.features.len());
        for (index, feature) in collection.features.into_iter().enumerate() {
            let court = Self::court_from_feature(index, feature)?;
            if !seen.insert(court.id.clone()) {
                return Err(CourtDataError::DuplicateId(court.id));
            }
            courts.push(court);
        }

        log::info!("🏀 {} canchas cargadas", courts.len());
        Ok(courts)
    }

    fn court_from_feature(index: usize, feature: Feature) -> Result<Court, CourtDataError> {
        let id = match &feature.id {
            Some(Id::String(id)) => id.clone(),
            Some(Id::Number(n)) => n.to_string(),
            None => feature
                .property("id")
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or(CourtDataError::MissingId { index })?,
        };
        if id.trim().is_empty() {
            return Err(CourtDataError::MissingId { index });
        }

        let coordinates = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(position)) => Coordinates::from_position(position),
            _ => None,
        }
        .ok_or_else(|| CourtDataError::InvalidGeometry { id: id.clone() })?;

        if !coordinates.is_valid() {
            return Err(CourtDataError::OutOfBounds { id, coordinates });
        }

        let properties: CourtProperties = serde_json::from_value(serde_json::Value::Object(
            feature.properties.unwrap_or_default(),
        ))
        .map_err(|e| CourtDataError::InvalidProperties {
            id: id.clone(),
            reason: e.to_string(),
        })?;

        if properties.name.trim().is_empty() {
            return Err(CourtDataError::EmptyName { id });
        }

        Ok(Court { id, properties, coordinates })
    }

    /// FeatureCollection para la fuente del mapa.
    /// El id también va en properties porque Mapbox descarta ids string.
    pub fn to_feature_collection(courts: &[Court]) -> FeatureCollection {
        let features = courts
            .iter()
            .map(|court| {
                let mut properties = match serde_json::to_value(&court.properties) {
                    Ok(serde_json::Value::Object(map)) => map,
                    _ => JsonObject::new(),
                };
                properties.insert("id".to_string(), court.id.clone().into());

                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::Point(court.coordinates.to_position()))),
                    id: Some(Id::String(court.id.clone())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}
