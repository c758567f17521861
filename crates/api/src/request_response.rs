// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire. Request bodies use `Option`
//! for required fields so that an omitted field is reported through the
//! ordinary validation path instead of as a decoding failure.

use shareit_domain::{
    Booking, BookingRef, BookingStatus, Comment, DomainError, Item, ItemRequest, PageRequest,
    Patch, User, timestamp_format,
};
use time::PrimitiveDateTime;

/// Default page size for an owner's item listing.
pub const DEFAULT_ITEMS_PAGE_SIZE: i64 = 20;
/// Default page size for item search.
pub const DEFAULT_SEARCH_PAGE_SIZE: i64 = 10;
/// Default page size for booking listings.
pub const DEFAULT_BOOKINGS_PAGE_SIZE: i64 = 20;
/// Default page size for the listing of other users' requests.
pub const DEFAULT_REQUESTS_PAGE_SIZE: i64 = 10;

// ========================================================================
// Query parameters
// ========================================================================

/// `from`/`size` query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageParams {
    /// Element offset. Defaults to 0.
    pub from: Option<i64>,
    /// Page size. Defaults per listing.
    pub size: Option<i64>,
}

impl PageParams {
    /// Builds a validated page request, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPagination` if `from` is negative or
    /// `size` is less than one.
    pub fn to_page(self, default_size: i64) -> Result<PageRequest, DomainError> {
        PageRequest::new(self.from.unwrap_or(0), self.size.unwrap_or(default_size))
    }
}

/// Query parameters of the booking listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingListParams {
    /// State filter. Defaults to `ALL`.
    pub state: Option<String>,
    /// Element offset.
    pub from: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
}

impl BookingListParams {
    /// Returns the paging part of the parameters.
    #[must_use]
    pub const fn page_params(&self) -> PageParams {
        PageParams {
            from: self.from,
            size: self.size,
        }
    }
}

/// Query parameters of item search.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchParams {
    /// Free text to look for in name and description.
    pub text: Option<String>,
    /// Element offset.
    pub from: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
}

impl SearchParams {
    /// Returns the paging part of the parameters.
    #[must_use]
    pub const fn page_params(&self) -> PageParams {
        PageParams {
            from: self.from,
            size: self.size,
        }
    }
}

/// Query parameters of a booking decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DecisionParams {
    /// `true` approves, `false` rejects.
    pub approved: Option<bool>,
}

// ========================================================================
// Users
// ========================================================================

/// API request to register a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// API request to partially update a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub email: Patch<String>,
}

/// A user as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.user_id,
            name: user.name,
            email: user.email,
        }
    }
}

// ========================================================================
// Items and comments
// ========================================================================

/// API request to list an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    /// The wanted-item request this item answers, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
}

/// API request to partially update an item.
///
/// An explicit `null` leaves the field unchanged, like an absent key.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub available: Patch<bool>,
}

/// API request to comment on an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub text: Option<String>,
}

/// A booking reference inside an item's enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRefResponse {
    pub id: i64,
    pub booker_id: i64,
}

impl From<BookingRef> for BookingRefResponse {
    fn from(booking: BookingRef) -> Self {
        Self {
            id: booking.booking_id,
            booker_id: booking.booker_id,
        }
    }
}

/// A comment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub author_id: i64,
    pub author_name: String,
    pub item_id: i64,
    #[serde(with = "timestamp_format")]
    pub created: PrimitiveDateTime,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.comment_id,
            text: comment.text,
            author_id: comment.author_id,
            author_name: comment.author_name,
            item_id: comment.item_id,
            created: comment.created,
        }
    }
}

/// An item as returned by the API.
///
/// `last_booking` and `next_booking` are populated only when the caller
/// owns the item. Comments are always attached.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
    pub last_booking: Option<BookingRefResponse>,
    pub next_booking: Option<BookingRefResponse>,
    pub comments: Vec<CommentResponse>,
}

impl ItemResponse {
    /// Builds a response for an item without enrichment.
    #[must_use]
    pub fn plain(item: Item) -> Self {
        Self {
            id: item.item_id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }
}

/// A compact item listed under a wanted-item request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummaryResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

impl From<Item> for ItemSummaryResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.item_id,
            name: item.name,
            description: item.description,
            available: item.available,
            owner_id: item.owner_id,
            request_id: item.request_id,
        }
    }
}

// ========================================================================
// Bookings
// ========================================================================

/// API request to book an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub item_id: Option<i64>,
    #[serde(default, with = "timestamp_format::option")]
    pub start: Option<PrimitiveDateTime>,
    #[serde(default, with = "timestamp_format::option")]
    pub end: Option<PrimitiveDateTime>,
}

/// The item a booking is for.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingItemResponse {
    pub id: i64,
    pub name: String,
}

/// The user who made a booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingUserResponse {
    pub id: i64,
    pub name: String,
}

/// A booking as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: i64,
    #[serde(with = "timestamp_format")]
    pub start: PrimitiveDateTime,
    #[serde(with = "timestamp_format")]
    pub end: PrimitiveDateTime,
    pub status: BookingStatus,
    pub item: BookingItemResponse,
    pub booker: BookingUserResponse,
}

impl BookingResponse {
    /// Builds a booking response from the booking and the names it shows.
    #[must_use]
    pub fn new(booking: &Booking, item_name: String, booker_name: String) -> Self {
        Self {
            id: booking.booking_id,
            start: booking.start,
            end: booking.end,
            status: booking.status,
            item: BookingItemResponse {
                id: booking.item_id,
                name: item_name,
            },
            booker: BookingUserResponse {
                id: booking.booker_id,
                name: booker_name,
            },
        }
    }
}

// ========================================================================
// Requests
// ========================================================================

/// API request to post a wanted-item request.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequestRequest {
    pub description: Option<String>,
}

/// A wanted-item request with the items offered in answer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestResponse {
    pub id: i64,
    pub description: String,
    pub user_id: i64,
    #[serde(with = "timestamp_format")]
    pub created: PrimitiveDateTime,
    pub items: Vec<ItemSummaryResponse>,
}

impl ItemRequestResponse {
    /// Builds a response from a request and its answering items.
    #[must_use]
    pub fn new(request: ItemRequest, items: Vec<Item>) -> Self {
        Self {
            id: request.request_id,
            description: request.description,
            user_id: request.requester_id,
            created: request.created,
            items: items.into_iter().map(ItemSummaryResponse::from).collect(),
        }
    }
}
