use std::collections::BTreeMap;

/// The material the panels are made of.
/// Only the price takes part in the calculation, the other fields are descriptive.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialSpec {
    pub name: String,
    /// Price per square meter of panel
    pub cost_per_unit_area: f64,
    pub description: Option<String>,
    /// Free-form attributes such as thickness, finish or supplier
    pub attributes: BTreeMap<String, String>,
}

impl MaterialSpec {
    pub fn new(name: impl Into<String>, cost_per_unit_area: f64) -> Self {
        Self {
            name: name.into(),
            cost_per_unit_area,
            description: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
