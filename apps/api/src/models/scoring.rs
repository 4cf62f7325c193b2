use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::schema::enums::CompanySize;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Fit of a shared raw profile's experience against one category.
/// Unique per (category, shared raw profile).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CategoryScore {
    pub id: i32,
    #[sqlx(rename = "categoryId")]
    #[serde(rename = "categoryId")]
    pub category_id: i32,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: i32,
    pub score: f64,
    pub companies: Option<Vec<String>>,
    #[sqlx(rename = "categoryExperience")]
    #[serde(rename = "categoryExperience")]
    pub category_experience: f64,
    #[sqlx(rename = "categoryName")]
    #[serde(rename = "categoryName")]
    pub category_name: Option<String>,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecentCategoryScore {
    pub id: i32,
    #[sqlx(rename = "categoryId")]
    #[serde(rename = "categoryId")]
    pub category_id: i32,
    #[sqlx(rename = "sharedRawProfileId")]
    #[serde(rename = "sharedRawProfileId")]
    pub shared_raw_profile_id: i32,
    pub score: f64,
    #[sqlx(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[sqlx(rename = "profileId")]
    #[serde(rename = "profileId")]
    pub profile_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "targetMarketSize")]
    #[serde(rename = "targetMarketSize")]
    pub target_market_size: String,
    #[sqlx(rename = "targetVertical")]
    #[serde(rename = "targetVertical")]
    pub target_vertical: String,
    pub size: Option<CompanySize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "companyId")]
    #[serde(rename = "companyId")]
    pub company_id: i32,
}

/// Weight (percentage) of a category within one company's product.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyProductCategory {
    pub id: i32,
    #[sqlx(rename = "companyId")]
    #[serde(rename = "companyId")]
    pub company_id: i32,
    #[sqlx(rename = "productId")]
    #[serde(rename = "productId")]
    pub product_id: i32,
    #[sqlx(rename = "categoryId")]
    #[serde(rename = "categoryId")]
    pub category_id: i32,
    pub percentage: i32,
}
