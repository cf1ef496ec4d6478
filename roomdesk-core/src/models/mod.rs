/// Database models for roomdesk
///
/// This module contains the two persisted entities and their CRUD operations.
///
/// # Models
///
/// - `room`: Reservable room records (number, type, price, bathrooms, availability)
/// - `user`: User accounts with hashed credentials
///
/// # Example
///
/// ```no_run
/// use roomdesk_core::models::room::{CreateRoom, Room};
/// use roomdesk_core::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
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
/// # Ok(())
/// # }
/// ```

pub mod room;
pub mod user;
