use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

use super::merge;

/// Article
///
/// A news article from the `articles` table. `content` is opaque HTML produced by
/// the admin rich-text editor and is stored and returned untouched.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Article {
    pub id: Uuid,
    /// Unique per article; used in public URLs.
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image_url: Option<String>,
    #[ts(type = "string")]
    pub published_at: DateTime<Utc>,
    /// Slug of the category. Looked up on read, not checked on write.
    pub category: String,
}

/// Category
///
/// A news category (`categories` table). Read-only for the application.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[ts(export)]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

/// NewArticle
///
/// Input payload for `POST /api/articles/create`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewArticle {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Defaults to the time of creation.
    #[serde(default)]
    #[ts(type = "string | null")]
    pub published_at: Option<DateTime<Utc>>,
    pub category: String,
}

/// ArticleUpdate
///
/// Partial update payload for `PUT /api/articles/update?id=`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ArticleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(type = "string | null")]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewArticle {
    pub fn into_article(self, id: Uuid) -> Article {
        Article {
            id,
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            image_url: self.image_url,
            published_at: self.published_at.unwrap_or_else(Utc::now),
            category: self.category,
        }
    }
}

impl ArticleUpdate {
    pub fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.title.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.image_url.is_none()
            && self.published_at.is_none()
            && self.category.is_none()
    }

    pub fn apply_to(self, article: &mut Article) {
        merge!(article.slug, self.slug);
        merge!(article.title, self.title);
        merge!(article.excerpt, self.excerpt);
        merge!(article.content, self.content);
        if self.image_url.is_some() {
            article.image_url = self.image_url;
        }
        merge!(article.published_at, self.published_at);
        merge!(article.category, self.category);
    }
}
