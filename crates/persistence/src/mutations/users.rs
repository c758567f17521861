// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User directory mutations.

use diesel::SqliteConnection;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use shareit_domain::User;
use tracing::{info, warn};

use crate::backend::PersistenceBackend;
use crate::data_models::NewUserRow;
use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::queries::users::find_user_reference;

fn map_unique_email(err: DieselError, email: &str) -> PersistenceError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            PersistenceError::DuplicateEmail(email.to_string())
        }
        other => other.into(),
    }
}

/// Creates a new user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `name` - The display name
/// * `email` - The email address
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateEmail` if the email is taken, or
/// another error if the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(users::table)
        .values(&NewUserRow { name, email })
        .execute(conn)
        .map_err(|e| map_unique_email(e, email))?;

    let user_id: i64 = conn.get_last_insert_rowid()?;

    info!(user_id, "User created");
    Ok(user_id)
}

/// Writes a user's name and email.
///
/// # Errors
///
/// Returns `PersistenceError::DuplicateEmail` if the email belongs to
/// another user, or `PersistenceError::NotFound` if the user is gone.
pub fn update_user(conn: &mut SqliteConnection, user: &User) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(users::table.find(user.user_id))
        .set((users::name.eq(&user.name), users::email.eq(&user.email)))
        .execute(conn)
        .map_err(|e| map_unique_email(e, &user.email))?;

    if updated == 0 {
        return Err(PersistenceError::NotFound(format!("User {}", user.user_id)));
    }

    info!(user_id = user.user_id, "User updated");
    Ok(())
}

/// Deletes a user that nothing references.
///
/// The reference check and the delete run in one transaction. The
/// `RESTRICT` foreign keys catch anything the check misses.
///
/// # Errors
///
/// Returns `PersistenceError::UserReferenced` if the user still owns items,
/// has bookings, authored comments, or posted requests.
/// Returns `PersistenceError::NotFound` if the user does not exist.
pub fn delete_user(conn: &mut SqliteConnection, user_id: i64) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        if let Some(referenced_by) = find_user_reference(conn, user_id)? {
            warn!(user_id, referenced_by, "Refusing to delete referenced user");
            return Err(PersistenceError::UserReferenced {
                user_id,
                referenced_by,
            });
        }

        let deleted: usize = diesel::delete(users::table.find(user_id))
            .execute(conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                    PersistenceError::UserReferenced {
                        user_id,
                        referenced_by: "other records",
                    }
                }
                other => other.into(),
            })?;

        if deleted == 0 {
            return Err(PersistenceError::NotFound(format!("User {user_id}")));
        }

        info!(user_id, "User deleted");
        Ok(())
    })
}
