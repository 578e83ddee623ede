use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::merge;

/// MarketStat
///
/// A key/value statistic displayed on the home page (`market_stats` table).
/// `nom_statistique` is the unique key; the value is free text ("12,4 %").
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[ts(export)]
pub struct MarketStat {
    pub id: Uuid,
    #[serde(rename = "nom_statistique")]
    #[sqlx(rename = "nom_statistique")]
    pub name: String,
    #[serde(rename = "libelle_statistique")]
    #[sqlx(rename = "libelle_statistique")]
    pub label: String,
    #[serde(rename = "valeur_statistique")]
    #[sqlx(rename = "valeur_statistique")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NewMarketStat {
    #[serde(rename = "nom_statistique")]
    pub name: String,
    #[serde(rename = "libelle_statistique")]
    pub label: String,
    #[serde(rename = "valeur_statistique")]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct MarketStatUpdate {
    #[serde(rename = "nom_statistique", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "libelle_statistique", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "valeur_statistique", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl NewMarketStat {
    pub fn into_stat(self, id: Uuid) -> MarketStat {
        MarketStat {
            id,
            name: self.name,
            label: self.label,
            value: self.value,
        }
    }
}

impl MarketStatUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.label.is_none() && self.value.is_none()
    }

    pub fn apply_to(self, stat: &mut MarketStat) {
        merge!(stat.name, self.name);
        merge!(stat.label, self.label);
        merge!(stat.value, self.value);
    }
}
