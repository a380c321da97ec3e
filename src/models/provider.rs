use serde::Deserialize;
use serde_json::Value;

/// Raw search response from the recommendation provider. The schema is not
/// guaranteed, so results are kept as loose JSON values and parsed into
/// `ProviderRecord`s one at a time.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderRecord {
    pub entity_id: Option<String>,
    pub name: Option<String>,
    pub types: Vec<String>,
    pub properties: Option<Value>,
    pub popularity: Option<f64>,
    pub location: Option<ProviderLocation>,
}

/// The provider emits either `lon` or `lng` depending on the endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderLocation {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub lng: Option<f64>,
}

impl ProviderRecord {
    /// Parse a batch of raw values, skipping anything that does not fit.
    /// A bad record never aborts the batch.
    pub fn parse_batch(raw: &[Value]) -> Vec<ProviderRecord> {
        let mut records = Vec::with_capacity(raw.len());
        for (i, value) in raw.iter().enumerate() {
            match serde_json::from_value::<ProviderRecord>(value.clone()) {
                Ok(record) => records.push(record),
                Err(err) => {
                    eprintln!("Skipping unparseable provider record {}: {}", i, err);
                }
            }
        }
        records
    }

    /// Look up a string under `properties`, e.g. `prop_str(&["geocode", "city"])`.
    pub fn prop_str(&self, path: &[&str]) -> Option<&str> {
        let mut current = self.properties.as_ref()?;
        for key in path {
            current = current.get(key)?;
        }
        current.as_str()
    }

    pub fn prop_f64(&self, path: &[&str]) -> Option<f64> {
        let mut current = self.properties.as_ref()?;
        for key in path {
            current = current.get(key)?;
        }
        current.as_f64()
    }

    /// True when the properties object is absent or `{}`.
    pub fn has_empty_properties(&self) -> bool {
        match &self.properties {
            None => true,
            Some(Value::Object(map)) => map.is_empty(),
            Some(Value::Null) => true,
            Some(_) => false,
        }
    }

    /// Any address or geocode information at all, from either the
    /// properties object or the top-level location.
    pub fn has_location_info(&self) -> bool {
        if self.location.is_some() {
            return true;
        }
        self.prop_str(&["address"]).is_some() || self.prop_str(&["geocode", "city"]).is_some()
    }
}
