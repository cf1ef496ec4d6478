/// Room model and database operations
///
/// A room is a reservable unit record. There is no booking or scheduling
/// attached to it; the application only manages the records themselves.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE rooms (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     number INTEGER NOT NULL,
///     "type" TEXT NOT NULL,
///     price REAL NOT NULL,
///     bathrooms INTEGER NOT NULL,
///     available BOOLEAN NOT NULL DEFAULT TRUE
/// );
/// ```
///
/// Beyond primary-key uniqueness there are no invariants: duplicate room
/// numbers and out-of-range prices are accepted, matching the registry's
/// free-form data entry.
///
/// # Example
///
/// ```no_run
/// use roomdesk_core::models::room::{CreateRoom, Room};
/// # use sqlx::SqlitePool;
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let room = Room::create(
///     &pool,
///     CreateRoom {
///         number: 101,
///         kind: "suite".to_string(),
///         price: 250.0,
///         bathrooms: 2,
///     },
/// )
/// .await?;
///
/// let all = Room::list_all(&pool).await?;
/// assert!(all.iter().any(|r| r.id == room.id));
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A reservable room record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    /// Generated primary key
    pub id: i64,

    /// Room number (not required to be unique)
    pub number: i64,

    /// Free-text room type, e.g. "single", "suite"
    #[sqlx(rename = "type")]
    pub kind: String,

    /// Price per night
    pub price: f64,

    /// Number of bathrooms
    pub bathrooms: i64,

    /// Whether the room is currently offered
    pub available: bool,
}

/// Input for creating a new room
///
/// New rooms are always created as available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoom {
    pub number: i64,
    pub kind: String,
    pub price: f64,
    pub bathrooms: i64,
}

/// Input for updating an existing room
///
/// All four data-entry fields are overwritten at once; the availability flag
/// is not touched by updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoom {
    pub number: i64,
    pub kind: String,
    pub price: f64,
    pub bathrooms: i64,
}

impl Room {
    /// Creates a new room in the database
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails.
    pub async fn create(pool: &SqlitePool, data: CreateRoom) -> Result<Self, sqlx::Error> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (number, "type", price, bathrooms, available)
            VALUES (?1, ?2, ?3, ?4, TRUE)
            RETURNING id, number, "type", price, bathrooms, available
            "#,
        )
        .bind(data.number)
        .bind(data.kind)
        .bind(data.price)
        .bind(data.bathrooms)
        .fetch_one(pool)
        .await?;

        Ok(room)
    }

    /// Finds a room by ID
    ///
    /// Returns the room if found, None otherwise.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, number, "type", price, bathrooms, available
            FROM rooms
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(room)
    }

    /// Lists all rooms in insertion order
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, number, "type", price, bathrooms, available
            FROM rooms
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rooms)
    }

    /// Overwrites the four data-entry fields of an existing room
    ///
    /// # Returns
    ///
    /// The updated room if found, None if the id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        data: UpdateRoom,
    ) -> Result<Option<Self>, sqlx::Error> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET number = ?2, "type" = ?3, price = ?4, bathrooms = ?5
            WHERE id = ?1
            RETURNING id, number, "type", price, bathrooms, available
            "#,
        )
        .bind(id)
        .bind(data.number)
        .bind(data.kind)
        .bind(data.price)
        .bind(data.bathrooms)
        .fetch_optional(pool)
        .await?;

        Ok(room)
    }

    /// Deletes a room by ID
    ///
    /// # Returns
    ///
    /// True if a room was deleted, false if the id did not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts total number of rooms
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rooms")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_room_struct() {
        let create = CreateRoom {
            number: 12,
            kind: "double".to_string(),
            price: 99.5,
            bathrooms: 1,
        };

        assert_eq!(create.number, 12);
        assert_eq!(create.kind, "double");
    }

    // Integration tests for database operations are in tests/room_model_tests.rs
}
