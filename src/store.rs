//! SQLite persistence for users and orders.
//!
//! Connection pooling with WAL mode and automatic migrations. The store is a
//! downstream consumer of computed quotes; nothing in the pricing path reads
//! persisted state.

use crate::error::AppError;
use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;
use std::time::Duration;
use uuid::Uuid;

/// Input for creating an order record
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<i64>,
    pub product_name: String,
    pub product_category: Option<String>,
    pub destination_planet: String,
    pub base_price_usd: f64,
    pub delivery_cost_usd: f64,
    pub total_price_inr: f64,
    pub space_agency: Option<String>,
    pub estimated_delivery: String,
    pub tracking_number: String,
    pub special_instructions: Option<String>,
}

/// A persisted order
#[derive(Debug, Clone, serde::Serialize)]
pub struct OrderRecord {
    pub id: i64,
    pub order_id: String,
    pub user_id: Option<i64>,
    pub product_name: String,
    pub product_category: Option<String>,
    pub destination_planet: String,
    pub base_price_usd: f64,
    pub delivery_cost_usd: f64,
    pub total_price_inr: f64,
    pub space_agency: Option<String>,
    pub order_status: String,
    pub estimated_delivery: Option<String>,
    pub tracking_number: Option<String>,
    pub created_at: String,
}

/// Per-planet order aggregates
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlanetStats {
    pub planet_name: String,
    pub total_orders: i64,
    pub total_revenue_inr: f64,
}

/// Order store handle
pub struct OrderStore {
    pool: SqlitePool,
}

impl OrderStore {
    /// Open the database, creating it and applying migrations if needed.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(30));

        // An in-memory database exists per connection; more than one pooled
        // connection would each see their own empty schema.
        let max_connections = if database_url.contains(":memory:") || database_url.contains("mode=memory") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .context("Failed to connect to order database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run order database migrations")?;

        tracing::info!("Order database ready");
        Ok(Self { pool })
    }

    /// Find or create a user by email, returning its id.
    pub async fn ensure_user(&self, name: &str, email: &str) -> Result<i64, AppError> {
        sqlx::query("INSERT OR IGNORE INTO users (name, email, created_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;

        let row = sqlx::query("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("id"))
    }

    /// Persist an order and return the stored record.
    pub async fn create_order(&self, order: &NewOrder) -> Result<OrderRecord, AppError> {
        let order_id = format!("SB-{}", Uuid::new_v4().simple());
        let created_at = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO orders (order_id, user_id, product_name, product_category,
                                 destination_planet, base_price_usd, delivery_cost_usd,
                                 total_price_inr, space_agency, estimated_delivery,
                                 tracking_number, special_instructions, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&order_id)
        .bind(order.user_id)
        .bind(&order.product_name)
        .bind(&order.product_category)
        .bind(&order.destination_planet)
        .bind(order.base_price_usd)
        .bind(order.delivery_cost_usd)
        .bind(order.total_price_inr)
        .bind(&order.space_agency)
        .bind(&order.estimated_delivery)
        .bind(&order.tracking_number)
        .bind(&order.special_instructions)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query("SELECT * FROM orders WHERE order_id = ?")
            .bind(&order_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(order_from_row(&row))
    }

    /// Most recent orders, newest first.
    pub async fn recent_orders(&self, limit: i64) -> Result<Vec<OrderRecord>, AppError> {
        let rows = sqlx::query("SELECT * FROM orders ORDER BY id DESC LIMIT ?")
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(order_from_row).collect())
    }

    /// Order counts and revenue per destination planet.
    pub async fn planet_stats(&self) -> Result<Vec<PlanetStats>, AppError> {
        let rows = sqlx::query(
            "SELECT destination_planet,
                    COUNT(*) AS total_orders,
                    COALESCE(SUM(total_price_inr), 0) AS total_revenue_inr
             FROM orders
             GROUP BY destination_planet
             ORDER BY total_orders DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| PlanetStats {
                planet_name: row.get("destination_planet"),
                total_orders: row.get("total_orders"),
                total_revenue_inr: row.get("total_revenue_inr"),
            })
            .collect())
    }
}

fn order_from_row(row: &sqlx::sqlite::SqliteRow) -> OrderRecord {
    OrderRecord {
        id: row.get("id"),
        order_id: row.get("order_id"),
        user_id: row.get("user_id"),
        product_name: row.get("product_name"),
        product_category: row.get("product_category"),
        destination_planet: row.get("destination_planet"),
        base_price_usd: row.get("base_price_usd"),
        delivery_cost_usd: row.get("delivery_cost_usd"),
        total_price_inr: row.get("total_price_inr"),
        space_agency: row.get("space_agency"),
        order_status: row.get("order_status"),
        estimated_delivery: row.get("estimated_delivery"),
        tracking_number: row.get("tracking_number"),
        created_at: row.get("created_at"),
    }
}
