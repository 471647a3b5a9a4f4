//! The `hcp_interactions` table: one row per sales-rep/HCP meeting.
//!
//! Rows are never physically deleted; `is_active` is the soft-delete flag
//! and read paths filter on it.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hcp_interactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hcp_name: String,
    pub hcp_specialty: Option<String>,
    pub interaction_date: DateTime<Utc>,
    pub interaction_type: Option<String>,
    pub location: Option<String>,
    pub duration_minutes: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub discussion_topics: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub products_discussed: Option<String>,
    pub samples_provided: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub next_steps: Option<String>,
    pub sentiment_score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub key_insights: Option<String>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub sales_rep_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
