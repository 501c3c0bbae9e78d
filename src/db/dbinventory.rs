use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Error as SqlxError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{error, info, warn};
use crate::models::Item;

// Global database instance
static DB: OnceCell<Arc<DbInventory>> = OnceCell::const_new();

/// Initialize the global database connection
///
/// # Arguments
/// * `database_url` - PostgreSQL connection string
pub async fn init_db(database_url: &str) -> Result<Arc<DbInventory>, Box<dyn std::error::Error>> {
    let db = Arc::new(DbInventory::new(database_url).await?);
    DB.set(db.clone())
        .map_err(|_| "Database already initialized")?;
    Ok(db)
}

/// Get the global database instance
///
/// # Returns
/// * `Option<Arc<DbInventory>>` - Database instance if initialized
pub fn get_db() -> Option<Arc<DbInventory>> {
    DB.get().cloned()
}

/// Row of the `hardware_inventory` table
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HardwareRow {
    pub hardware_id: i32,
    pub name: String,
    pub price: Option<f64>,
    pub count: Option<i16>,
    pub category: Option<String>,
}

const CREATE_CATEGORY_TYPE: &str = r#"
    DO $$ BEGIN
        CREATE TYPE category_type AS ENUM ('tools', 'consumables');
    EXCEPTION
        WHEN duplicate_object THEN NULL;
    END $$;
"#;

const CREATE_INVENTORY_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS hardware_inventory (
        hardware_id SERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        price DECIMAL(10, 2),
        count SMALLINT,
        category category_type
    )
"#;

const INSERT_HARDWARE_ITEM: &str = r#"
    INSERT INTO hardware_inventory (name, price, count, category)
    VALUES ($1, $2::float8::decimal(10, 2), $3, $4::text::category_type)
"#;

// DECIMAL and the enum are cast so they decode into plain Rust types
const SELECT_ITEMS: &str = r#"
    SELECT
        hardware_id,
        name,
        price::float8 AS price,
        count,
        category::text AS category
    FROM hardware_inventory
    ORDER BY hardware_id
    LIMIT $1
"#;

/// Database connection pool
pub struct DbInventory {
    pool: PgPool,
}

impl DbInventory {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    pub async fn new(database_url: &str) -> Result<Self, SqlxError> {
        info!("Connecting to PostgreSQL...");

        let pool = PgPoolOptions::new()
            .max_connections(2)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await?;

        info!("Database connection pool created successfully");

        Ok(Self { pool })
    }

    /// Check that a connection can still be acquired and used
    pub async fn ping(&self) -> Result<(), SqlxError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Server version string
    pub async fn check_version(&self) -> Result<String, SqlxError> {
        let (version,): (String,) = sqlx::query_as("SELECT version()")
            .fetch_one(&self.pool)
            .await?;
        Ok(version)
    }

    /// Create the category enum and the inventory table if they are missing
    pub async fn create_inventory_table(&self) -> Result<(), SqlxError> {
        sqlx::raw_sql(CREATE_CATEGORY_TYPE).execute(&self.pool).await?;
        sqlx::raw_sql(CREATE_INVENTORY_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a batch of items in a single transaction. The table assigns
    /// its own serial ids. Items whose count does not fit the SMALLINT column
    /// are skipped. Returns the number of rows inserted.
    pub async fn insert_batch(&self, items: &[Item]) -> Result<usize, SqlxError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;
        for item in items {
            let Some(count) = smallint_count(item) else {
                warn!("Skipping item {}: count {} does not fit SMALLINT", item.id(), item.count());
                continue;
            };
            sqlx::query(INSERT_HARDWARE_ITEM)
                .bind(item.name())
                .bind(item.price())
                .bind(count)
                .bind(item.category().as_str())
                .execute(&mut *tx)
                .await?;
            inserted += 1;
        }
        tx.commit().await?;
        Ok(inserted)
    }

    pub async fn select_items(&self, limit: i64) -> Result<Vec<HardwareRow>, SqlxError> {
        sqlx::query_as::<_, HardwareRow>(SELECT_ITEMS)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }
}

/// Count of `item` as stored in the SMALLINT `count` column, if it fits
fn smallint_count(item: &Item) -> Option<i16> {
    i16::try_from(item.count()).ok()
}

/// Run the startup sequence against the database and log what comes back.
///
/// Nothing here feeds the request path; the caller is expected to log and
/// drop any error.
pub async fn bootstrap(db: &DbInventory, seed: Option<&[Item]>) -> Result<(), SqlxError> {
    let version = db.check_version().await?;
    info!("Connected to {}", version);

    db.create_inventory_table().await?;
    info!("Inventory table ready");

    if let Some(items) = seed {
        match db.insert_batch(items).await {
            Ok(inserted) => info!("Inserted {} of {} sample rows", inserted, items.len()),
            Err(e) => error!("Failed to insert sample rows: {}", e),
        }
    }

    let rows = db.select_items(2).await?;
    info!("---------- Fetching ----------");
    for row in &rows {
        info!(
            "{} | {} | {:?} | {:?} | {:?}",
            row.hardware_id, row.name, row.price, row.count, row.category
        );
    }
    Ok(())
}
