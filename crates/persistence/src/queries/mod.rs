// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! Each module owns the `Queryable` row struct for its table and the
//! conversion from that row into the domain type. Listing order is fixed
//! here, not by callers.

pub mod bookings;
pub mod comments;
pub mod items;
pub mod requests;
pub mod users;
