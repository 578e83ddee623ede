use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::merge;

// The auction tables predate the rest of the schema and use lowercase,
// underscore-free column names. The wire format mirrors them.

/// UpcomingAuction
///
/// A planned government securities issuance (`upcoming_auctions` table).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[ts(export)]
pub struct UpcomingAuction {
    pub id: Uuid,
    #[ts(type = "string")]
    pub date: NaiveDate,
    /// Instrument code, e.g. "BTA" or "BTC".
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub security_type: String,
    #[serde(rename = "amountmillions")]
    #[sqlx(rename = "amountmillions")]
    pub amount_millions: f64,
    pub status: String,
}

/// AuctionResult
///
/// The realized outcome of an issuance (`auction_results` table).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[ts(export)]
pub struct AuctionResult {
    pub id: Uuid,
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub security_type: String,
    #[serde(rename = "amountawarded")]
    #[sqlx(rename = "amountawarded")]
    pub amount_awarded: f64,
    /// Free text as published, e.g. "2.45%".
    #[serde(rename = "interestrate")]
    #[sqlx(rename = "interestrate")]
    pub interest_rate: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NewUpcomingAuction {
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub security_type: String,
    #[serde(rename = "amountmillions")]
    pub amount_millions: f64,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct UpcomingAuctionUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
    #[serde(rename = "amountmillions", default, skip_serializing_if = "Option::is_none")]
    pub amount_millions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NewAuctionResult {
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub security_type: String,
    #[serde(rename = "amountawarded")]
    pub amount_awarded: f64,
    #[serde(rename = "interestrate")]
    pub interest_rate: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct AuctionResultUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub security_type: Option<String>,
    #[serde(rename = "amountawarded", default, skip_serializing_if = "Option::is_none")]
    pub amount_awarded: Option<f64>,
    #[serde(rename = "interestrate", default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl NewUpcomingAuction {
    pub fn into_auction(self, id: Uuid) -> UpcomingAuction {
        UpcomingAuction {
            id,
            date: self.date,
            security_type: self.security_type,
            amount_millions: self.amount_millions,
            status: self.status,
        }
    }
}

impl UpcomingAuctionUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.security_type.is_none()
            && self.amount_millions.is_none()
            && self.status.is_none()
    }

    pub fn apply_to(self, auction: &mut UpcomingAuction) {
        merge!(auction.date, self.date);
        merge!(auction.security_type, self.security_type);
        merge!(auction.amount_millions, self.amount_millions);
        merge!(auction.status, self.status);
    }
}

impl NewAuctionResult {
    pub fn into_result(self, id: Uuid) -> AuctionResult {
        AuctionResult {
            id,
            date: self.date,
            security_type: self.security_type,
            amount_awarded: self.amount_awarded,
            interest_rate: self.interest_rate,
            slug: self.slug,
        }
    }
}

impl AuctionResultUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.security_type.is_none()
            && self.amount_awarded.is_none()
            && self.interest_rate.is_none()
            && self.slug.is_none()
    }

    pub fn apply_to(self, result: &mut AuctionResult) {
        merge!(result.date, self.date);
        merge!(result.security_type, self.security_type);
        merge!(result.amount_awarded, self.amount_awarded);
        merge!(result.interest_rate, self.interest_rate);
        merge!(result.slug, self.slug);
    }
}
