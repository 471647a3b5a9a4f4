//! CRUD repository over the `hcp_interactions` table.

use chrono::{DateTime, Utc};
use replog_entities::hcp_interactions;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Schema, Set,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Fields accepted when creating a record. Everything the caller leaves out
/// stays NULL; timestamps and the active flag are filled in here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInteraction {
    pub hcp_name: String,
    #[serde(default)]
    pub hcp_specialty: Option<String>,
    #[serde(default)]
    pub interaction_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub discussion_topics: Option<String>,
    #[serde(default)]
    pub products_discussed: Option<String>,
    #[serde(default)]
    pub samples_provided: Option<String>,
    #[serde(default)]
    pub next_steps: Option<String>,
    #[serde(default)]
    pub follow_up_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sales_rep_name: Option<String>,
}

/// Partial update: only fields present in the body are replaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInteraction {
    #[serde(default)]
    pub hcp_name: Option<String>,
    #[serde(default)]
    pub hcp_specialty: Option<String>,
    #[serde(default)]
    pub interaction_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub discussion_topics: Option<String>,
    #[serde(default)]
    pub products_discussed: Option<String>,
    #[serde(default)]
    pub samples_provided: Option<String>,
    #[serde(default)]
    pub next_steps: Option<String>,
    #[serde(default)]
    pub follow_up_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sales_rep_name: Option<String>,
}

/// Repository for durable interaction records.
pub struct InteractionRepository {
    db: DatabaseConnection,
}

impl InteractionRepository {
    /// Connect to the database at the given URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        info!("Connecting to database for InteractionRepository");
        let db = Database::connect(database_url).await?;
        info!("InteractionRepository initialized");
        Ok(Self { db })
    }

    /// Wrap an existing connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the database connection.
    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create the `hcp_interactions` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        let builder = self.db.get_database_backend();
        let schema = Schema::new(builder);
        let mut statement = schema.create_table_from_entity(hcp_interactions::Entity);
        statement.if_not_exists();
        self.db.execute(builder.build(&statement)).await?;

        info!("hcp_interactions table ready");
        Ok(())
    }

    /// Insert a new interaction record.
    pub async fn create(&self, input: CreateInteraction) -> Result<hcp_interactions::Model> {
        let now = Utc::now();
        let model = hcp_interactions::ActiveModel {
            hcp_name: Set(input.hcp_name),
            hcp_specialty: Set(input.hcp_specialty),
            interaction_type: Set(input.interaction_type),
            location: Set(input.location),
            duration_minutes: Set(input.duration_minutes),
            discussion_topics: Set(input.discussion_topics),
            products_discussed: Set(input.products_discussed),
            samples_provided: Set(input.samples_provided),
            next_steps: Set(input.next_steps),
            follow_up_date: Set(input.follow_up_date),
            sales_rep_name: Set(input.sales_rep_name),
            interaction_date: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted = model.insert(&self.db).await?;
        info!("Created interaction record {}", inserted.id);
        Ok(inserted)
    }

    /// Active records, paginated, oldest first.
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<hcp_interactions::Model>> {
        Ok(hcp_interactions::Entity::find()
            .filter(hcp_interactions::Column::IsActive.eq(true))
            .order_by_asc(hcp_interactions::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    /// A single active record.
    pub async fn get(&self, id: i32) -> Result<Option<hcp_interactions::Model>> {
        Ok(hcp_interactions::Entity::find()
            .filter(hcp_interactions::Column::Id.eq(id))
            .filter(hcp_interactions::Column::IsActive.eq(true))
            .one(&self.db)
            .await?)
    }

    /// Raw lookup by id, ignoring the soft-delete flag.
    pub async fn get_any(&self, id: i32) -> Result<Option<hcp_interactions::Model>> {
        Ok(hcp_interactions::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Partially update an active record, touching `updated_at`.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateInteraction,
    ) -> Result<Option<hcp_interactions::Model>> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut model: hcp_interactions::ActiveModel = existing.into();
        if let Some(v) = input.hcp_name {
            model.hcp_name = Set(v);
        }
        if let Some(v) = input.hcp_specialty {
            model.hcp_specialty = Set(Some(v));
        }
        if let Some(v) = input.interaction_type {
            model.interaction_type = Set(Some(v));
        }
        if let Some(v) = input.location {
            model.location = Set(Some(v));
        }
        if let Some(v) = input.duration_minutes {
            model.duration_minutes = Set(Some(v));
        }
        if let Some(v) = input.discussion_topics {
            model.discussion_topics = Set(Some(v));
        }
        if let Some(v) = input.products_discussed {
            model.products_discussed = Set(Some(v));
        }
        if let Some(v) = input.samples_provided {
            model.samples_provided = Set(Some(v));
        }
        if let Some(v) = input.next_steps {
            model.next_steps = Set(Some(v));
        }
        if let Some(v) = input.follow_up_date {
            model.follow_up_date = Set(Some(v));
        }
        if let Some(v) = input.sales_rep_name {
            model.sales_rep_name = Set(Some(v));
        }
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await?;
        info!("Updated interaction record {id}");
        Ok(Some(updated))
    }

    /// Flip `is_active` off. Looks the record up by id alone, so an already
    /// deleted record reports success again.
    pub async fn soft_delete(&self, id: i32) -> Result<bool> {
        let Some(existing) = self.get_any(id).await? else {
            return Ok(false);
        };

        let mut model: hcp_interactions::ActiveModel = existing.into();
        model.is_active = Set(false);
        model.update(&self.db).await?;

        info!("Soft-deleted interaction record {id}");
        Ok(true)
    }
}
