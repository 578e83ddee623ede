use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::merge;

/// HeroSlide
///
/// An entry of the home page carousel (`hero_slides` table).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeroSlide {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewHeroSlide {
    pub title: String,
    pub image_url: String,
    #[ts(type = "string")]
    pub date: NaiveDate,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub button_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeroSlideUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
}

impl NewHeroSlide {
    pub fn into_slide(self, id: Uuid) -> HeroSlide {
        HeroSlide {
            id,
            title: self.title,
            image_url: self.image_url,
            date: self.date,
            button_text: self.button_text,
            button_link: self.button_link,
        }
    }
}

impl HeroSlideUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.image_url.is_none()
            && self.date.is_none()
            && self.button_text.is_none()
            && self.button_link.is_none()
    }

    pub fn apply_to(self, slide: &mut HeroSlide) {
        merge!(slide.title, self.title);
        merge!(slide.image_url, self.image_url);
        merge!(slide.date, self.date);
        if self.button_text.is_some() {
            slide.button_text = self.button_text;
        }
        if self.button_link.is_some() {
            slide.button_link = self.button_link;
        }
    }
}
