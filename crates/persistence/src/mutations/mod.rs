// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Inserts read back the assigned row id through `PersistenceBackend`.
//! Invariants that must hold under concurrent writers are enforced by the
//! store itself: a `UNIQUE` email column, a conditional status update for
//! booking decisions, and `ON DELETE RESTRICT` foreign keys.

pub mod bookings;
pub mod comments;
pub mod items;
pub mod requests;
pub mod users;
