// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the `ShareIt` marketplace.
//!
//! ## Backend
//!
//! `SQLite` via Diesel, for both file-backed deployments and in-memory
//! test databases. The schema is applied from embedded migrations on every
//! open, and foreign key enforcement is verified before the adapter is
//! handed out.
//!
//! ## Store-Level Guarantees
//!
//! - `users.email` is `UNIQUE`; a collision surfaces as
//!   [`PersistenceError::DuplicateEmail`]
//! - Booking decisions are a conditional update on `status = 'WAITING'`;
//!   losing a race surfaces as [`PersistenceError::BookingAlreadyDecided`]
//! - All foreign keys are `ON DELETE RESTRICT`
//!
//! ## Timestamps
//!
//! Stored as fixed-width `YYYY-MM-DDTHH:MM:SS` text so that ordering by the
//! column orders by time.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use shareit_domain::{Booking, BookingStatus, Comment, Item, ItemRequest, PageRequest, User};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::PrimitiveDateTime;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

use backend::PersistenceBackend;

/// Persistence adapter for the marketplace records.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database via atomic
    /// counter, so instances never see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_shareit_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        conn.verify_foreign_key_enforcement()?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        self.conn.verify_foreign_key_enforcement()
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Registers a user.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateEmail` if the email is taken.
    pub fn create_user(&mut self, name: &str, email: &str) -> Result<User, PersistenceError> {
        let user_id: i64 = mutations::users::create_user(&mut self.conn, name, email)?;
        Ok(User::new(user_id, name.to_string(), email.to_string()))
    }

    /// Retrieves a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_user(&mut self, user_id: i64) -> Result<Option<User>, PersistenceError> {
        queries::users::get_user(&mut self.conn, user_id)
    }

    /// Retrieves a user by email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn find_user_by_email(&mut self, email: &str) -> Result<Option<User>, PersistenceError> {
        queries::users::find_user_by_email(&mut self.conn, email)
    }

    /// Lists all users ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_users(&mut self) -> Result<Vec<User>, PersistenceError> {
        queries::users::list_users(&mut self.conn)
    }

    /// Retrieves the users with the given IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_users_by_ids(&mut self, user_ids: &[i64]) -> Result<Vec<User>, PersistenceError> {
        queries::users::get_users_by_ids(&mut self.conn, user_ids)
    }

    /// Writes a user's name and email.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateEmail` if the email belongs to
    /// another user.
    pub fn update_user(&mut self, user: &User) -> Result<(), PersistenceError> {
        mutations::users::update_user(&mut self.conn, user)
    }

    /// Deletes a user that nothing references.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::UserReferenced` if other records still
    /// point at the user.
    pub fn delete_user(&mut self, user_id: i64) -> Result<(), PersistenceError> {
        mutations::users::delete_user(&mut self.conn, user_id)
    }

    // ========================================================================
    // Items
    // ========================================================================

    /// Lists a new item.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_item(
        &mut self,
        name: &str,
        description: &str,
        available: bool,
        owner_id: i64,
        request_id: Option<i64>,
    ) -> Result<Item, PersistenceError> {
        let item_id: i64 = mutations::items::create_item(
            &mut self.conn,
            name,
            description,
            available,
            owner_id,
            request_id,
        )?;
        Ok(Item {
            item_id,
            name: name.to_string(),
            description: description.to_string(),
            available,
            owner_id,
            request_id,
        })
    }

    /// Retrieves an item by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_item(&mut self, item_id: i64) -> Result<Option<Item>, PersistenceError> {
        queries::items::get_item(&mut self.conn, item_id)
    }

    /// Retrieves the items with the given IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_items_by_ids(&mut self, item_ids: &[i64]) -> Result<Vec<Item>, PersistenceError> {
        queries::items::get_items_by_ids(&mut self.conn, item_ids)
    }

    /// Writes an item's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_item(&mut self, item: &Item) -> Result<(), PersistenceError> {
        mutations::items::update_item(&mut self.conn, item)
    }

    /// Lists one page of an owner's items, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_items_by_owner(
        &mut self,
        owner_id: i64,
        page: PageRequest,
    ) -> Result<Vec<Item>, PersistenceError> {
        queries::items::list_items_by_owner(&mut self.conn, owner_id, page)
    }

    /// Searches available items by name or description.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn search_available_items(
        &mut self,
        text: &str,
        page: PageRequest,
    ) -> Result<Vec<Item>, PersistenceError> {
        queries::items::search_available_items(&mut self.conn, text, page)
    }

    /// Lists the items answering any of the given requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_items_by_requests(
        &mut self,
        request_ids: &[i64],
    ) -> Result<Vec<Item>, PersistenceError> {
        queries::items::list_items_by_requests(&mut self.conn, request_ids)
    }

    // ========================================================================
    // Bookings
    // ========================================================================

    /// Records a new `WAITING` booking.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_booking(
        &mut self,
        item_id: i64,
        booker_id: i64,
        start: PrimitiveDateTime,
        end: PrimitiveDateTime,
    ) -> Result<Booking, PersistenceError> {
        let booking_id: i64 =
            mutations::bookings::create_booking(&mut self.conn, item_id, booker_id, start, end)?;
        Ok(Booking {
            booking_id,
            start,
            end,
            item_id,
            booker_id,
            status: BookingStatus::Waiting,
        })
    }

    /// Retrieves a booking by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_booking(&mut self, booking_id: i64) -> Result<Option<Booking>, PersistenceError> {
        queries::bookings::get_booking(&mut self.conn, booking_id)
    }

    /// Moves a waiting booking to `status`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::BookingAlreadyDecided` if the booking is
    /// no longer waiting.
    pub fn set_booking_status(
        &mut self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<(), PersistenceError> {
        mutations::bookings::set_booking_status(&mut self.conn, booking_id, status)
    }

    /// Lists every booking made by a user, newest start first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_bookings_by_booker(
        &mut self,
        booker_id: i64,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_bookings_by_booker(&mut self.conn, booker_id)
    }

    /// Lists every booking of a user's items, newest start first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_bookings_by_owner(
        &mut self,
        owner_id: i64,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_bookings_by_owner(&mut self.conn, owner_id)
    }

    /// Lists the bookings of the given items, earliest start first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_bookings_by_items(
        &mut self,
        item_ids: &[i64],
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_bookings_by_items(&mut self.conn, item_ids)
    }

    /// Lists a booker's bookings of one item in the given status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_bookings_by_item_and_booker(
        &mut self,
        item_id: i64,
        booker_id: i64,
        status: BookingStatus,
    ) -> Result<Vec<Booking>, PersistenceError> {
        queries::bookings::list_bookings_by_item_and_booker(
            &mut self.conn,
            item_id,
            booker_id,
            status,
        )
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Records a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_comment(
        &mut self,
        text: &str,
        author_id: i64,
        author_name: &str,
        item_id: i64,
        created: PrimitiveDateTime,
    ) -> Result<Comment, PersistenceError> {
        let comment_id: i64 = mutations::comments::create_comment(
            &mut self.conn,
            text,
            author_id,
            author_name,
            item_id,
            created,
        )?;
        Ok(Comment {
            comment_id,
            text: text.to_string(),
            author_id,
            author_name: author_name.to_string(),
            item_id,
            created,
        })
    }

    /// Lists the comments on the given items, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_comments_by_items(
        &mut self,
        item_ids: &[i64],
    ) -> Result<Vec<Comment>, PersistenceError> {
        queries::comments::list_comments_by_items(&mut self.conn, item_ids)
    }

    // ========================================================================
    // Requests
    // ========================================================================

    /// Records a wanted-item request.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_request(
        &mut self,
        description: &str,
        requester_id: i64,
        created: PrimitiveDateTime,
    ) -> Result<ItemRequest, PersistenceError> {
        let request_id: i64 = mutations::requests::create_request(
            &mut self.conn,
            description,
            requester_id,
            created,
        )?;
        Ok(ItemRequest {
            request_id,
            description: description.to_string(),
            requester_id,
            created,
        })
    }

    /// Retrieves a request by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn get_request(
        &mut self,
        request_id: i64,
    ) -> Result<Option<ItemRequest>, PersistenceError> {
        queries::requests::get_request(&mut self.conn, request_id)
    }

    /// Lists every request posted by a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_requests_by_requester(
        &mut self,
        requester_id: i64,
    ) -> Result<Vec<ItemRequest>, PersistenceError> {
        queries::requests::list_requests_by_requester(&mut self.conn, requester_id)
    }

    /// Lists one page of other users' requests, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub fn list_requests_excluding(
        &mut self,
        requester_id: i64,
        page: PageRequest,
    ) -> Result<Vec<ItemRequest>, PersistenceError> {
        queries::requests::list_requests_excluding(&mut self.conn, requester_id, page)
    }
}
