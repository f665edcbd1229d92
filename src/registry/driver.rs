use serde::{Deserialize, Serialize};

/// Location recorded for drivers who registered without one.
pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub current_location: String,
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewDriver {
    pub name: String,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub vehicle_type: Option<String>,
}

impl NewDriver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.current_location = Some(location.into());
        self
    }
}

impl Driver {
    pub fn from_registration(id: i64, new: NewDriver) -> Self {
        Self {
            id,
            name: new.name,
            current_location: new
                .current_location
                .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
            phone: new.phone,
            vehicle_type: new.vehicle_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_location_defaults_to_unknown() {
        let driver = Driver::from_registration(3, NewDriver::new("Ana"));
        assert_eq!(driver.current_location, "Unknown");

        let explicit_null: NewDriver =
            serde_json::from_value(json!({ "name": "Ana", "current_location": null })).unwrap();
        let driver = Driver::from_registration(4, explicit_null);
        assert_eq!(driver.current_location, "Unknown");
    }

    #[test]
    fn name_is_required() {
        assert!(serde_json::from_value::<NewDriver>(json!({ "phone": "555" })).is_err());
        assert!(serde_json::from_value::<NewDriver>(json!({ "name": null })).is_err());
    }
}
