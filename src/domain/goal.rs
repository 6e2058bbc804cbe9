use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    Emergency,
    Investment,
    General,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(rename = "type")]
    pub kind: GoalType,
}

impl Goal {
    pub fn new(
        name: impl Into<String>,
        kind: GoalType,
        target_amount: f64,
        current_amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount,
            kind,
        }
    }

    pub fn emergency(target_amount: f64, current_amount: f64) -> Self {
        Self::new("Emergency Fund", GoalType::Emergency, target_amount, current_amount)
    }
}
