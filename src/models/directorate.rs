use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::merge;

/// Directorate
///
/// An organizational unit of the treasury (`directorates` table).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Directorate {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub director_name: String,
    pub image_url: Option<String>,
    pub mission_excerpt: String,
    /// Stored as a `TEXT[]` column.
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewDirectorate {
    pub slug: String,
    pub name: String,
    pub director_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub mission_excerpt: String,
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DirectorateUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<String>>,
}

impl NewDirectorate {
    pub fn into_directorate(self, id: Uuid) -> Directorate {
        Directorate {
            id,
            slug: self.slug,
            name: self.name,
            director_name: self.director_name,
            image_url: self.image_url,
            mission_excerpt: self.mission_excerpt,
            services: self.services,
        }
    }
}

impl DirectorateUpdate {
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.name.is_none()
            && self.director_name.is_none()
            && self.image_url.is_none()
            && self.mission_excerpt.is_none()
            && self.services.is_none()
    }

    pub fn apply_to(self, directorate: &mut Directorate) {
        merge!(directorate.slug, self.slug);
        merge!(directorate.name, self.name);
        merge!(directorate.director_name, self.director_name);
        if self.image_url.is_some() {
            directorate.image_url = self.image_url;
        }
        merge!(directorate.mission_excerpt, self.mission_excerpt);
        merge!(directorate.services, self.services);
    }
}
