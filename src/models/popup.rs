use super::court::{Coordinates, CourtProperties};

/// Fila "etiqueta: valor" del popup
#[derive(Clone, PartialEq, Debug)]
pub struct PopupRow {
    pub label: &'static str,
    pub value: String,
}

/// Contenido del popup de una cancha: título, descripción y filas fijas
#[derive(Clone, PartialEq, Debug)]
pub struct PopupContent {
    pub anchor: Coordinates,
    pub title: String,
    pub description: String,
    pub rows: Vec<PopupRow>,
}

impl PopupContent {
    /// Estructura fija: nombre, descripción, tipo, aros, superficie
    pub fn for_court(properties: &CourtProperties, anchor: Coordinates) -> Self {
        Self {
            anchor,
            title: properties.name.clone(),
            description: properties.description.clone(),
            rows: vec![
                PopupRow { label: "Type", value: properties.court_type.clone() },
                PopupRow { label: "Hoops", value: properties.hoops.to_string() },
                PopupRow { label: "Surface", value: properties.surface.clone() },
            ],
        }
    }

    /// Texto plano del cuerpo (una línea por elemento)
    pub fn body_text(&self) -> String {
        let mut lines = vec![self.title.clone()];
        if !self.description.is_empty() {
            lines.push(self.description.clone());
        }
        lines.extend(self.rows.iter().map(|row| format!("{}: {}", row.label, row.value)));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(description: &str) -> CourtProperties {
        CourtProperties {
            name: "Court A".to_string(),
            description: description.to_string(),
            court_type: "outdoor".to_string(),
            hoops: 2,
            surface: "asphalt".to_string(),
        }
    }

    #[test]
    fn test_body_has_fixed_rows() {
        let popup = PopupContent::for_court(&props("Nice court"), Coordinates::new(139.70, 35.66));
        assert_eq!(
            popup.body_text(),
            "Court A\nNice court\nType: outdoor\nHoops: 2\nSurface: asphalt"
        );
    }

    #[test]
    fn test_empty_description_is_skipped() {
        let popup = PopupContent::for_court(&props(""), Coordinates::new(0.0, 0.0));
        assert_eq!(popup.body_text().lines().count(), 4);
    }
}
