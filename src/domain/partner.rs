use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profit-sharing associate entitled to `share` percent of net profit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub share: f64,
    #[serde(default)]
    pub personal_expenses: f64,
    #[serde(default)]
    pub personal_gains: f64,
}

impl Partner {
    pub fn new(name: impl Into<String>, share: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            share,
            personal_expenses: 0.0,
            personal_gains: 0.0,
        }
    }

    pub fn with_adjustments(mut self, personal_expenses: f64, personal_gains: f64) -> Self {
        self.personal_expenses = personal_expenses;
        self.personal_gains = personal_gains;
        self
    }
}

/// Input for adding a partner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPartner {
    pub name: String,
    pub share: f64,
    pub personal_expenses: f64,
    pub personal_gains: f64,
}

/// Changeset applied when editing a partner. `personal_gains: None` keeps the
/// stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartnerChanges {
    pub name: String,
    pub share: f64,
    pub personal_expenses: f64,
    pub personal_gains: Option<f64>,
}
