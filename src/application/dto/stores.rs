use crate::domain::store::{Location, Store, TagCount};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
    pub address: String,
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        Self {
            kind: location.kind.as_str().to_owned(),
            coordinates: location.coordinates,
            address: location.address.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub location: LocationDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl From<Store> for StoreDto {
    fn from(store: Store) -> Self {
        Self {
            id: store.id.into(),
            name: store.name.into_inner(),
            slug: store.slug.into_inner(),
            description: store.description.map(|d| d.into_inner()),
            tags: store.tags,
            created_at: store.created_at,
            location: store.location.into(),
            photo: store.photo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCountDto {
    pub tag: String,
    pub count: u64,
}

impl From<TagCount> for TagCountDto {
    fn from(value: TagCount) -> Self {
        Self {
            tag: value.tag,
            count: value.count,
        }
    }
}

/// Tag summary plus the stores behind the selected tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagOverviewDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub tags: Vec<TagCountDto>,
    pub stores: Vec<StoreDto>,
}
