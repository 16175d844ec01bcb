//! Upgrade definitions and loading.
//!
//! An [`Upgrade`] is immutable definition data (`cost`, `cost_factor`, `value`,
//! `kind`, `max_level`) plus the player's `level`. The engine never mutates one
//! in place: purchases hand back a [`LevelPatch`] and the host decides when to
//! apply it.
//!
//! Definitions arrive as raw JSON. Typed deserialization is the schema check:
//! required fields, decimal text that must parse, the closed `type`
//! enumeration, and an integral non-negative `maxLevel`. Entries that fail it
//! are dropped with a warning so one bad record does not sink the whole file.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{EconomyError, EconomyResult};
use crate::mechanics::decimal::Decimal;

/// How an upgrade kind's contributions combine into its stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fold {
    /// `seed + Σ value × level`
    Sum,
    /// `seed × Π (1 + value × level)`
    Product,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    Click,
    ClickMultiplier,
    ClickAutomation,
    ClickCritical,
    ClickCriticalMultiplier,
    Rate,
    RateMultiplier,
    /// Reserved; loads but feeds no stat.
    ClickAutobuy,
    /// Reserved; loads but feeds no stat.
    RateAutobuy,
}

impl UpgradeKind {
    pub fn all() -> &'static [UpgradeKind] {
        &[
            UpgradeKind::Click,
            UpgradeKind::ClickMultiplier,
            UpgradeKind::ClickAutomation,
            UpgradeKind::ClickCritical,
            UpgradeKind::ClickCriticalMultiplier,
            UpgradeKind::Rate,
            UpgradeKind::RateMultiplier,
            UpgradeKind::ClickAutobuy,
            UpgradeKind::RateAutobuy,
        ]
    }

    /// The fold rule for this kind's stat; `None` for kinds with no stat yet.
    pub fn fold(self) -> Option<Fold> {
        match self {
            UpgradeKind::Click
            | UpgradeKind::ClickAutomation
            | UpgradeKind::ClickCritical
            | UpgradeKind::Rate => Some(Fold::Sum),
            UpgradeKind::ClickMultiplier
            | UpgradeKind::ClickCriticalMultiplier
            | UpgradeKind::RateMultiplier => Some(Fold::Product),
            UpgradeKind::ClickAutobuy | UpgradeKind::RateAutobuy => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            UpgradeKind::Click => "click",
            UpgradeKind::ClickMultiplier => "click_multiplier",
            UpgradeKind::ClickAutomation => "click_automation",
            UpgradeKind::ClickCritical => "click_critical",
            UpgradeKind::ClickCriticalMultiplier => "click_critical_multiplier",
            UpgradeKind::Rate => "rate",
            UpgradeKind::RateMultiplier => "rate_multiplier",
            UpgradeKind::ClickAutobuy => "click_autobuy",
            UpgradeKind::RateAutobuy => "rate_autobuy",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price at level 0.
    pub cost: Decimal,
    /// Per-level growth base of the price.
    pub cost_factor: Decimal,
    #[serde(rename = "type")]
    pub kind: UpgradeKind,
    /// Effect per level.
    pub value: Decimal,
    pub max_level: Option<u32>,
    pub level: u32,
    pub purchased: bool,
}

impl Upgrade {
    /// A fresh level-0 upgrade. Empty ids are derived from the name.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: UpgradeKind,
        cost: Decimal,
        cost_factor: Decimal,
        value: Decimal,
    ) -> Self {
        let name = name.into();
        let mut id = id.into();
        if id.is_empty() {
            id = derive_id(&name);
        }
        Self {
            id,
            name,
            description: String::new(),
            cost,
            cost_factor,
            kind,
            value,
            max_level: None,
            level: 0,
            purchased: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_max_level(mut self, max_level: Option<u32>) -> Self {
        self.max_level = max_level;
        self.with_level(self.level)
    }

    /// Same upgrade at `level`, clamped to `max_level`; `purchased` follows level.
    pub fn with_level(&self, level: u32) -> Self {
        let level = match self.max_level {
            Some(max) => level.min(max),
            None => level,
        };
        Self { level, purchased: level > 0, ..self.clone() }
    }

    #[inline]
    pub fn is_maxed(&self) -> bool {
        self.max_level.is_some_and(|max| self.level >= max)
    }

    /// `value × level`: what this upgrade adds to (or scales) its stat.
    #[inline]
    pub fn contribution(&self) -> Decimal {
        &self.value * &Decimal::from(self.level)
    }
}

/// The one change a successful purchase makes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPatch {
    pub id: String,
    pub level: u32,
}

impl LevelPatch {
    pub fn apply_to(&self, upgrade: &Upgrade) -> Upgrade {
        if upgrade.id == self.id {
            upgrade.with_level(self.level)
        } else {
            upgrade.clone()
        }
    }

    /// A new collection with the patch applied to every upgrade carrying `id`.
    pub fn apply(&self, upgrades: &[Upgrade]) -> Vec<Upgrade> {
        upgrades.iter().map(|u| self.apply_to(u)).collect()
    }
}

/// Wire shape of a definition. Decimals stay text on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpgradeDefinition {
    #[serde(default)]
    id: Option<String>,
    name: String,
    description: String,
    cost: Decimal,
    cost_factor: Decimal,
    #[serde(rename = "type")]
    kind: UpgradeKind,
    value: Decimal,
    #[serde(default)]
    max_level: Option<u32>,
}

impl From<UpgradeDefinition> for Upgrade {
    fn from(def: UpgradeDefinition) -> Self {
        Upgrade::new(
            def.id.unwrap_or_default(),
            def.name,
            def.kind,
            def.cost,
            def.cost_factor,
            def.value,
        )
        .with_description(def.description)
        .with_max_level(def.max_level)
    }
}

/// Lower-case the name and turn each whitespace run into one `-`.
pub fn derive_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.push(c);
            in_space = false;
        }
    }
    id
}

/// Turn raw definitions into level-0 upgrades, dropping the invalid ones.
pub fn load_upgrades<I>(raw: I) -> Vec<Upgrade>
where
    I: IntoIterator<Item = Value>,
{
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<UpgradeDefinition>(value) {
            Ok(def) => Some(Upgrade::from(def)),
            Err(err) => {
                warn!(index, error = %err, "dropping invalid upgrade definition");
                None
            }
        })
        .collect()
}

/// [`load_upgrades`] over a JSON array. Text that is not an array is an error;
/// bad entries inside it are only dropped.
pub fn load_upgrades_json(text: &str) -> EconomyResult<Vec<Upgrade>> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(items) => Ok(load_upgrades(items)),
        other => Err(EconomyError::Json(format!(
            "expected an array of upgrade definitions, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
