use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::merge;

/// Report
///
/// A downloadable publication (`reports` table). `file_url` points at a PDF in
/// the `report-pdfs` bucket.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Report {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub file_url: String,
    #[ts(type = "string")]
    pub published_date: NaiveDate,
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewReport {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub file_url: String,
    #[ts(type = "string")]
    pub published_date: NaiveDate,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub published_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
}

impl NewReport {
    pub fn into_report(self, id: Uuid) -> Report {
        Report {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            file_url: self.file_url,
            published_date: self.published_date,
            cover_image_url: self.cover_image_url,
        }
    }
}

impl ReportUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.file_url.is_none()
            && self.published_date.is_none()
            && self.cover_image_url.is_none()
    }

    pub fn apply_to(self, report: &mut Report) {
        merge!(report.title, self.title);
        merge!(report.description, self.description);
        merge!(report.category, self.category);
        merge!(report.file_url, self.file_url);
        merge!(report.published_date, self.published_date);
        if self.cover_image_url.is_some() {
            report.cover_image_url = self.cover_image_url;
        }
    }
}
