// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are transport-agnostic. Operations that depend on the clock
//! take `now` explicitly.

use std::collections::{HashMap, HashSet};

use shareit::{
    ItemUpdate, UserUpdate, apply_item_update, apply_user_update, authorize_booking_view,
    check_comment_eligibility, decide_booking as decide, group_items_by_request,
    select_bookings, select_last_booking, select_next_booking, validate_new_booking,
};
use shareit_domain::{
    Booking, BookingState, BookingStatus, Comment, DomainError, Item, ItemRequest, PageRequest,
    User, validate_comment_text, validate_email, validate_item_description, validate_item_name,
    validate_request_description, validate_user_name,
};
use shareit_persistence::Persistence;
use time::PrimitiveDateTime;
use tracing::{debug, info};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    BookingListParams, BookingResponse, CommentResponse, CreateBookingRequest,
    CreateCommentRequest, CreateItemRequest, CreateItemRequestRequest, CreateUserRequest,
    DEFAULT_BOOKINGS_PAGE_SIZE, DEFAULT_ITEMS_PAGE_SIZE, DEFAULT_REQUESTS_PAGE_SIZE,
    DEFAULT_SEARCH_PAGE_SIZE, DecisionParams, ItemRequestResponse, ItemResponse, PageParams,
    SearchParams, UpdateItemRequest, UpdateUserRequest, UserResponse,
};

fn require_user(persistence: &mut Persistence, user_id: i64) -> Result<User, ApiError> {
    persistence
        .get_user(user_id)?
        .ok_or_else(|| translate_domain_error(DomainError::UserNotFound(user_id)))
}

fn require_item(persistence: &mut Persistence, item_id: i64) -> Result<Item, ApiError> {
    persistence
        .get_item(item_id)?
        .ok_or_else(|| translate_domain_error(DomainError::ItemNotFound(item_id)))
}

fn require_booking(persistence: &mut Persistence, booking_id: i64) -> Result<Booking, ApiError> {
    persistence
        .get_booking(booking_id)?
        .ok_or_else(|| translate_domain_error(DomainError::BookingNotFound(booking_id)))
}

fn require_request(
    persistence: &mut Persistence,
    request_id: i64,
) -> Result<ItemRequest, ApiError> {
    persistence
        .get_request(request_id)?
        .ok_or_else(|| translate_domain_error(DomainError::RequestNotFound(request_id)))
}

/// Rejects an email already held by a user other than `except_user_id`.
fn ensure_email_free(
    persistence: &mut Persistence,
    email: &str,
    except_user_id: Option<i64>,
) -> Result<(), ApiError> {
    match persistence.find_user_by_email(email)? {
        Some(holder) if Some(holder.user_id) != except_user_id => Err(translate_domain_error(
            DomainError::DuplicateEmail(email.to_string()),
        )),
        _ => Ok(()),
    }
}

fn unique_ids(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut seen: HashSet<i64> = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}

/// Parses an optional booking state filter, defaulting to `ALL`.
///
/// # Errors
///
/// Returns an error if the value is not one of the known states. Matching
/// is case-sensitive.
pub fn parse_booking_state(state: Option<&str>) -> Result<BookingState, ApiError> {
    state.map_or(Ok(BookingState::All), |raw| {
        raw.parse::<BookingState>().map_err(translate_domain_error)
    })
}

// ========================================================================
// Users
// ========================================================================

/// Registers a new user.
///
/// # Errors
///
/// Returns an error if the name is blank, the email is malformed, or the
/// email is already registered.
pub fn register_user(
    persistence: &mut Persistence,
    request: CreateUserRequest,
) -> Result<UserResponse, ApiError> {
    let name: String = request.name.unwrap_or_default();
    validate_user_name(&name).map_err(translate_domain_error)?;
    let email: String = request.email.unwrap_or_default().trim().to_string();
    validate_email(&email).map_err(translate_domain_error)?;

    ensure_email_free(persistence, &email, None)?;

    let user: User = persistence.create_user(&name, &email)?;
    info!(user_id = user.user_id, "Registered user");
    Ok(UserResponse::from(user))
}

/// Applies a partial update to a user.
///
/// Keeping one's own email is not a conflict.
///
/// # Errors
///
/// Returns an error if the user does not exist, a supplied field is
/// invalid, or the new email belongs to another user.
pub fn update_user(
    persistence: &mut Persistence,
    user_id: i64,
    request: UpdateUserRequest,
) -> Result<UserResponse, ApiError> {
    let user: User = require_user(persistence, user_id)?;
    let update: UserUpdate = UserUpdate {
        name: request.name.into_value(),
        email: request.email.into_value(),
    };
    let email_supplied: bool = update.email.is_some();
    let updated: User = apply_user_update(user, update).map_err(translate_core_error)?;

    if email_supplied {
        ensure_email_free(persistence, &updated.email, Some(user_id))?;
    }

    persistence.update_user(&updated)?;
    info!(user_id, "Updated user");
    Ok(UserResponse::from(updated))
}

/// Deletes a user.
///
/// # Errors
///
/// Returns an error if the user does not exist or is still referenced by
/// items, bookings, comments, or requests.
pub fn delete_user(persistence: &mut Persistence, user_id: i64) -> Result<(), ApiError> {
    require_user(persistence, user_id)?;
    persistence.delete_user(user_id)?;
    info!(user_id, "Deleted user");
    Ok(())
}

/// Retrieves one user.
///
/// # Errors
///
/// Returns an error if the user does not exist.
pub fn get_user(persistence: &mut Persistence, user_id: i64) -> Result<UserResponse, ApiError> {
    require_user(persistence, user_id).map(UserResponse::from)
}

/// Lists all users.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn list_users(persistence: &mut Persistence) -> Result<Vec<UserResponse>, ApiError> {
    Ok(persistence
        .list_users()?
        .into_iter()
        .map(UserResponse::from)
        .collect())
}

// ========================================================================
// Items
// ========================================================================

/// Builds item responses for `viewer_id`.
///
/// Comments are attached to every item with author names refreshed from
/// the user directory. Last/next bookings are attached only to items the
/// viewer owns.
fn enrich_items(
    persistence: &mut Persistence,
    items: Vec<Item>,
    viewer_id: Option<i64>,
    now: PrimitiveDateTime,
) -> Result<Vec<ItemResponse>, ApiError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let item_ids: Vec<i64> = items.iter().map(|item| item.item_id).collect();

    let owned_ids: Vec<i64> = items
        .iter()
        .filter(|item| viewer_id.is_some_and(|viewer| item.is_owned_by(viewer)))
        .map(|item| item.item_id)
        .collect();
    let mut bookings_by_item: HashMap<i64, Vec<Booking>> = HashMap::new();
    if !owned_ids.is_empty() {
        for booking in persistence.list_bookings_by_items(&owned_ids)? {
            bookings_by_item
                .entry(booking.item_id)
                .or_default()
                .push(booking);
        }
    }

    let comments: Vec<Comment> = persistence.list_comments_by_items(&item_ids)?;
    let author_ids: Vec<i64> = unique_ids(comments.iter().map(|comment| comment.author_id));
    let author_names: HashMap<i64, String> = persistence
        .get_users_by_ids(&author_ids)?
        .into_iter()
        .map(|user| (user.user_id, user.name))
        .collect();
    let mut comments_by_item: HashMap<i64, Vec<CommentResponse>> = HashMap::new();
    for mut comment in comments {
        if let Some(name) = author_names.get(&comment.author_id) {
            comment.author_name.clone_from(name);
        }
        comments_by_item
            .entry(comment.item_id)
            .or_default()
            .push(CommentResponse::from(comment));
    }

    Ok(items
        .into_iter()
        .map(|item| {
            let item_id: i64 = item.item_id;
            let mut response: ItemResponse = ItemResponse::plain(item);
            if let Some(bookings) = bookings_by_item.get(&item_id) {
                response.last_booking = select_last_booking(bookings, now).map(Into::into);
                response.next_booking = select_next_booking(bookings, now).map(Into::into);
            }
            response.comments = comments_by_item.remove(&item_id).unwrap_or_default();
            response
        })
        .collect())
}

fn enrich_item(
    persistence: &mut Persistence,
    item: Item,
    viewer_id: i64,
    now: PrimitiveDateTime,
) -> Result<ItemResponse, ApiError> {
    let item_id: i64 = item.item_id;
    enrich_items(persistence, vec![item], Some(viewer_id), now)?
        .pop()
        .ok_or_else(|| translate_domain_error(DomainError::ItemNotFound(item_id)))
}

/// Lists a new item for the caller.
///
/// # Errors
///
/// Returns an error if the caller or the referenced request does not
/// exist, or a field is missing or blank.
pub fn create_item(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: CreateItemRequest,
) -> Result<ItemResponse, ApiError> {
    require_user(persistence, user.user_id)?;

    let name: String = request.name.unwrap_or_default();
    validate_item_name(&name).map_err(translate_domain_error)?;
    let description: String = request.description.unwrap_or_default();
    validate_item_description(&description).map_err(translate_domain_error)?;
    let available: bool = request
        .available
        .ok_or_else(|| translate_domain_error(DomainError::InvalidAvailability))?;
    if let Some(request_id) = request.request_id {
        require_request(persistence, request_id)?;
    }

    let item: Item = persistence.create_item(
        &name,
        &description,
        available,
        user.user_id,
        request.request_id,
    )?;
    info!(item_id = item.item_id, owner_id = user.user_id, "Listed item");
    Ok(ItemResponse::plain(item))
}

/// Applies a partial update to an item the caller owns.
///
/// # Errors
///
/// Returns an error if the item does not exist, the caller does not own
/// it, or a supplied name or description is blank.
pub fn update_item(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    item_id: i64,
    request: UpdateItemRequest,
    now: PrimitiveDateTime,
) -> Result<ItemResponse, ApiError> {
    let item: Item = require_item(persistence, item_id)?;
    let update: ItemUpdate = ItemUpdate {
        name: request.name.into_value(),
        description: request.description.into_value(),
        available: request.available.into_value(),
    };
    let updated: Item =
        apply_item_update(item, user.user_id, update).map_err(translate_core_error)?;

    persistence.update_item(&updated)?;
    info!(item_id, "Updated item");
    enrich_item(persistence, updated, user.user_id, now)
}

/// Retrieves one item as seen by the caller.
///
/// # Errors
///
/// Returns an error if the item does not exist.
pub fn get_item(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    item_id: i64,
    now: PrimitiveDateTime,
) -> Result<ItemResponse, ApiError> {
    let item: Item = require_item(persistence, item_id)?;
    enrich_item(persistence, item, user.user_id, now)
}

/// Lists one page of the caller's items, enriched.
///
/// # Errors
///
/// Returns an error if the caller does not exist or the page is invalid.
pub fn list_owner_items(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    params: PageParams,
    now: PrimitiveDateTime,
) -> Result<Vec<ItemResponse>, ApiError> {
    let page: PageRequest = params
        .to_page(DEFAULT_ITEMS_PAGE_SIZE)
        .map_err(translate_domain_error)?;
    require_user(persistence, user.user_id)?;

    let items: Vec<Item> = persistence.list_items_by_owner(user.user_id, page)?;
    enrich_items(persistence, items, Some(user.user_id), now)
}

/// Searches available items by name or description.
///
/// Blank text yields an empty result.
///
/// # Errors
///
/// Returns an error if the page is invalid.
pub fn search_items(
    persistence: &mut Persistence,
    params: &SearchParams,
    now: PrimitiveDateTime,
) -> Result<Vec<ItemResponse>, ApiError> {
    let page: PageRequest = params
        .page_params()
        .to_page(DEFAULT_SEARCH_PAGE_SIZE)
        .map_err(translate_domain_error)?;
    let text: &str = params.text.as_deref().unwrap_or_default().trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<Item> = persistence.search_available_items(text, page)?;
    debug!(text, found = items.len(), "Searched items");
    enrich_items(persistence, items, None, now)
}

/// Adds a comment by the caller to an item they have rented.
///
/// # Errors
///
/// Returns an error if the text is blank, the caller or item does not
/// exist, or the caller has no approved booking of the item that has
/// started.
pub fn add_comment(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    item_id: i64,
    request: CreateCommentRequest,
    now: PrimitiveDateTime,
) -> Result<CommentResponse, ApiError> {
    let text: String = request.text.unwrap_or_default();
    validate_comment_text(&text).map_err(translate_domain_error)?;
    let author: User = require_user(persistence, user.user_id)?;
    require_item(persistence, item_id)?;

    let bookings: Vec<Booking> = persistence.list_bookings_by_item_and_booker(
        item_id,
        author.user_id,
        BookingStatus::Approved,
    )?;
    check_comment_eligibility(item_id, &bookings, now).map_err(translate_core_error)?;

    let comment: Comment =
        persistence.create_comment(&text, author.user_id, &author.name, item_id, now)?;
    info!(comment_id = comment.comment_id, item_id, "Added comment");
    Ok(CommentResponse::from(comment))
}

// ========================================================================
// Bookings
// ========================================================================

/// Builds booking responses, looking up item and booker names in batch.
fn booking_responses(
    persistence: &mut Persistence,
    bookings: Vec<Booking>,
) -> Result<Vec<BookingResponse>, ApiError> {
    let item_ids: Vec<i64> = unique_ids(bookings.iter().map(|booking| booking.item_id));
    let booker_ids: Vec<i64> = unique_ids(bookings.iter().map(|booking| booking.booker_id));
    let item_names: HashMap<i64, String> = persistence
        .get_items_by_ids(&item_ids)?
        .into_iter()
        .map(|item| (item.item_id, item.name))
        .collect();
    let booker_names: HashMap<i64, String> = persistence
        .get_users_by_ids(&booker_ids)?
        .into_iter()
        .map(|user| (user.user_id, user.name))
        .collect();

    Ok(bookings
        .iter()
        .map(|booking| {
            BookingResponse::new(
                booking,
                item_names.get(&booking.item_id).cloned().unwrap_or_default(),
                booker_names
                    .get(&booking.booker_id)
                    .cloned()
                    .unwrap_or_default(),
            )
        })
        .collect())
}

fn booking_response(
    persistence: &mut Persistence,
    booking: &Booking,
    item: &Item,
) -> Result<BookingResponse, ApiError> {
    let booker: User = require_user(persistence, booking.booker_id)?;
    Ok(BookingResponse::new(booking, item.name.clone(), booker.name))
}

/// Books an item for the caller. The booking starts out `WAITING`.
///
/// # Errors
///
/// Returns an error if a field is missing, the caller or item does not
/// exist, the caller owns the item, the item is unavailable, or the window
/// is invalid.
pub fn create_booking(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: CreateBookingRequest,
    now: PrimitiveDateTime,
) -> Result<BookingResponse, ApiError> {
    let item_id: i64 = request.item_id.ok_or_else(|| ApiError::InvalidInput {
        field: String::from("itemId"),
        message: String::from("Item id must be specified!"),
    })?;
    let start: PrimitiveDateTime = request.start.ok_or_else(|| ApiError::InvalidInput {
        field: String::from("start"),
        message: String::from("Invalid start time of booking!"),
    })?;
    let end: PrimitiveDateTime = request.end.ok_or_else(|| ApiError::InvalidInput {
        field: String::from("end"),
        message: String::from("Invalid end time of booking!"),
    })?;

    let booker: User = require_user(persistence, user.user_id)?;
    let item: Item = require_item(persistence, item_id)?;
    validate_new_booking(&item, booker.user_id, start, end, now).map_err(translate_core_error)?;

    let booking: Booking = persistence.create_booking(item_id, booker.user_id, start, end)?;
    info!(
        booking_id = booking.booking_id,
        item_id,
        booker_id = booker.user_id,
        "Created booking"
    );
    Ok(BookingResponse::new(&booking, item.name, booker.name))
}

/// Approves or rejects a waiting booking of an item the caller owns.
///
/// The status change is conditional on the booking still waiting, so of
/// two racing decisions only one succeeds.
///
/// # Errors
///
/// Returns an error if `approved` is missing, the booking does not exist,
/// the caller does not own the item, or the booking was already decided.
pub fn decide_booking(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    booking_id: i64,
    params: DecisionParams,
) -> Result<BookingResponse, ApiError> {
    let approved: bool = params.approved.ok_or_else(|| ApiError::InvalidInput {
        field: String::from("approved"),
        message: String::from("Parameter approved must be specified!"),
    })?;
    let mut booking: Booking = require_booking(persistence, booking_id)?;
    let item: Item = require_item(persistence, booking.item_id)?;
    let status: BookingStatus =
        decide(&booking, &item, user.user_id, approved).map_err(translate_core_error)?;

    persistence.set_booking_status(booking_id, status)?;
    booking.status = status;
    info!(booking_id, status = status.as_str(), "Decided booking");
    booking_response(persistence, &booking, &item)
}

/// Retrieves one booking for its booker or the item's owner.
///
/// # Errors
///
/// Returns an error if the booking does not exist or the caller is neither
/// booker nor owner.
pub fn get_booking(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    booking_id: i64,
) -> Result<BookingResponse, ApiError> {
    let booking: Booking = require_booking(persistence, booking_id)?;
    let item: Item = require_item(persistence, booking.item_id)?;
    authorize_booking_view(&booking, &item, user.user_id).map_err(translate_core_error)?;
    booking_response(persistence, &booking, &item)
}

/// Lists the caller's bookings as booker, newest start first.
///
/// # Errors
///
/// Returns an error if the state or page is invalid, the caller does not
/// exist, or the caller has no bookings at all.
pub fn list_bookings_for_booker(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    params: &BookingListParams,
    now: PrimitiveDateTime,
) -> Result<Vec<BookingResponse>, ApiError> {
    let state: BookingState = parse_booking_state(params.state.as_deref())?;
    let page: PageRequest = params
        .page_params()
        .to_page(DEFAULT_BOOKINGS_PAGE_SIZE)
        .map_err(translate_domain_error)?;
    require_user(persistence, user.user_id)?;

    let bookings: Vec<Booking> = persistence.list_bookings_by_booker(user.user_id)?;
    let selected: Vec<Booking> =
        select_bookings(user.user_id, bookings, state, page, now).map_err(translate_core_error)?;
    booking_responses(persistence, selected)
}

/// Lists bookings of the caller's items, newest start first.
///
/// # Errors
///
/// Returns an error if the state or page is invalid, the caller does not
/// exist, or no booking of the caller's items exists at all.
pub fn list_bookings_for_owner(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    params: &BookingListParams,
    now: PrimitiveDateTime,
) -> Result<Vec<BookingResponse>, ApiError> {
    let state: BookingState = parse_booking_state(params.state.as_deref())?;
    let page: PageRequest = params
        .page_params()
        .to_page(DEFAULT_BOOKINGS_PAGE_SIZE)
        .map_err(translate_domain_error)?;
    require_user(persistence, user.user_id)?;

    let bookings: Vec<Booking> = persistence.list_bookings_by_owner(user.user_id)?;
    let selected: Vec<Booking> =
        select_bookings(user.user_id, bookings, state, page, now).map_err(translate_core_error)?;
    booking_responses(persistence, selected)
}

// ========================================================================
// Requests
// ========================================================================

fn request_responses(
    persistence: &mut Persistence,
    requests: Vec<ItemRequest>,
) -> Result<Vec<ItemRequestResponse>, ApiError> {
    if requests.is_empty() {
        return Ok(Vec::new());
    }
    let request_ids: Vec<i64> = requests.iter().map(|request| request.request_id).collect();
    let items: Vec<Item> = persistence.list_items_by_requests(&request_ids)?;
    Ok(group_items_by_request(requests, items)
        .into_iter()
        .map(|(request, items)| ItemRequestResponse::new(request, items))
        .collect())
}

/// Posts a wanted-item request for the caller.
///
/// # Errors
///
/// Returns an error if the caller does not exist or the description is
/// blank.
pub fn create_request(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request: CreateItemRequestRequest,
    now: PrimitiveDateTime,
) -> Result<ItemRequestResponse, ApiError> {
    require_user(persistence, user.user_id)?;
    let description: String = request.description.unwrap_or_default();
    validate_request_description(&description).map_err(translate_domain_error)?;

    let created: ItemRequest = persistence.create_request(&description, user.user_id, now)?;
    info!(request_id = created.request_id, "Posted request");
    Ok(ItemRequestResponse::new(created, Vec::new()))
}

/// Lists all of the caller's requests, newest first, with answering items.
///
/// # Errors
///
/// Returns an error if the caller does not exist.
pub fn list_own_requests(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
) -> Result<Vec<ItemRequestResponse>, ApiError> {
    require_user(persistence, user.user_id)?;
    let requests: Vec<ItemRequest> = persistence.list_requests_by_requester(user.user_id)?;
    request_responses(persistence, requests)
}

/// Lists one page of other users' requests, newest first.
///
/// # Errors
///
/// Returns an error if the page is invalid or the caller does not exist.
pub fn list_other_requests(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    params: PageParams,
) -> Result<Vec<ItemRequestResponse>, ApiError> {
    let page: PageRequest = params
        .to_page(DEFAULT_REQUESTS_PAGE_SIZE)
        .map_err(translate_domain_error)?;
    require_user(persistence, user.user_id)?;
    let requests: Vec<ItemRequest> = persistence.list_requests_excluding(user.user_id, page)?;
    request_responses(persistence, requests)
}

/// Retrieves one request with its answering items.
///
/// # Errors
///
/// Returns an error if the caller or the request does not exist.
pub fn get_request(
    persistence: &mut Persistence,
    user: &AuthenticatedUser,
    request_id: i64,
) -> Result<ItemRequestResponse, ApiError> {
    require_user(persistence, user.user_id)?;
    let request: ItemRequest = require_request(persistence, request_id)?;
    let items: Vec<Item> = persistence.list_items_by_requests(&[request_id])?;
    Ok(ItemRequestResponse::new(request, items))
}
