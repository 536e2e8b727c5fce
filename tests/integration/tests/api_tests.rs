//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port, backed by the
//! in-memory store with the clock pinned to 2030-01-01.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use hotel_core::{BookingStatus, RecordId, RoomStatus};
use integration_tests::{
    assert_error, assert_json, assert_status, date, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde_json::json;

/// Create a room type and one room of it, returning both ids
async fn seed_room(server: &TestServer, capacity: i32, price: Decimal) -> (RecordId, RecordId) {
    let response = server
        .post_auth(
            "/room-types",
            &server.staff_token,
            &CreateRoomTypeRequest::unique(capacity, price),
        )
        .await
        .unwrap();
    let room_type: RoomTypeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/rooms",
            &server.staff_token,
            &CreateRoomRequest::unique(room_type.id),
        )
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(room.status, RoomStatus::Available);

    (room_type.id, room.id)
}

async fn book(
    server: &TestServer,
    token: &str,
    request: &CreateBookingRequest,
) -> BookingResponse {
    let response = server.post_auth("/bookings", token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn set_status(
    server: &TestServer,
    token: &str,
    id: RecordId,
    status: BookingStatus,
) -> reqwest::Response {
    server
        .patch_auth(
            &format!("/bookings/{id}/status"),
            token,
            &StatusRequest { status },
        )
        .await
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_root("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Inventory Tests
// ============================================================================

#[tokio::test]
async fn test_inventory_writes_are_staff_only() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth(
            "/room-types",
            &server.customer_token,
            &CreateRoomTypeRequest::unique(2, Decimal::new(10000, 2)),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "FORBIDDEN");

    let (room_type_id, room_id) = seed_room(&server, 2, Decimal::new(10000, 2)).await;

    let response = server.get(&format!("/room-types/{room_type_id}")).await.unwrap();
    let room_type: RoomTypeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(room_type.capacity, 2);

    let response = server.get("/rooms").await.unwrap();
    let rooms: DataResponse<Vec<RoomResponse>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rooms.data.len(), 1);
    assert_eq!(rooms.data[0].id, room_id);
}

#[tokio::test]
async fn test_room_status_and_stats() {
    let server = TestServer::start().await.unwrap();
    let (_, room_a) = seed_room(&server, 2, Decimal::new(10000, 2)).await;
    let (_, room_b) = seed_room(&server, 2, Decimal::new(10000, 2)).await;

    let response = server
        .patch_auth(
            &format!("/rooms/{room_a}/status"),
            &server.staff_token,
            &StatusRequest {
                status: RoomStatus::Maintenance,
            },
        )
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(room.status, RoomStatus::Maintenance);

    // A room under maintenance cannot be booked
    let response = server
        .post_auth(
            "/bookings",
            &server.customer_token,
            &CreateBookingRequest::stay(room_a, date(3, 1), date(3, 3)),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ROOM_UNAVAILABLE");

    book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(room_b, date(3, 1), date(3, 3)),
    )
    .await;

    let response = server.get_auth("/rooms/stats", &server.staff_token).await.unwrap();
    let stats: RoomStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.maintenance, 1);
    assert_eq!(stats.occupied, 1);
    assert_eq!(stats.available, 0);
    assert_eq!(stats.total, 2);

    let response = server.get_auth("/rooms/stats", &server.customer_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Availability Tests
// ============================================================================

#[tokio::test]
async fn test_availability_search_excludes_booked_rooms() {
    let server = TestServer::start().await.unwrap();
    let (_, small) = seed_room(&server, 1, Decimal::new(8000, 2)).await;
    let (_, large) = seed_room(&server, 4, Decimal::new(12000, 2)).await;

    let response = server
        .get("/availability?check_in=2030-03-01&check_out=2030-03-04&guests=2")
        .await
        .unwrap();
    let found: DataResponse<Vec<RoomSummaryResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.data.len(), 1);
    assert_eq!(found.data[0].room_id, large);
    assert_eq!(found.data[0].nights, 3);
    assert_eq!(found.data[0].total_price, Decimal::new(36000, 2));

    book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(large, date(3, 2), date(3, 3)),
    )
    .await;

    let response = server
        .get("/availability?check_in=2030-03-01&check_out=2030-03-04&guests=1")
        .await
        .unwrap();
    let found: DataResponse<Vec<RoomSummaryResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.data.len(), 1);
    assert_eq!(found.data[0].room_id, small);

    // Checking out on the day the next stay starts leaves the room free
    let response = server
        .get(&format!(
            "/rooms/{large}/availability?check_in=2030-03-03&check_out=2030-03-05"
        ))
        .await
        .unwrap();
    let room: RoomAvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(room.free);
    assert!(room.available);

    let response = server
        .get("/availability/summary?check_in=2030-03-02&check_out=2030-03-03")
        .await
        .unwrap();
    let summary: AvailabilitySummaryResponse =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.nights, 1);
    assert_eq!(summary.available_rooms, 1);
    assert_eq!(summary.total_rooms, 2);
}

// ============================================================================
// Booking Tests
// ============================================================================

#[tokio::test]
async fn test_create_booking_prices_stay() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;

    let mut request = CreateBookingRequest::stay(room, date(3, 1), date(3, 5));
    request.special_requests = Some("  late arrival  ".into());
    let booking = book(&server, &server.customer_token, &request).await;

    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.nights, 4);
    assert_eq!(booking.total_amount, Decimal::new(40000, 2));
    assert_eq!(booking.special_requests.as_deref(), Some("late arrival"));
    assert!(!booking.reference.is_empty());

    let response = server
        .get_auth(&format!("/rooms/{room}"), &server.customer_token)
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(room.status, RoomStatus::Occupied);
}

#[tokio::test]
async fn test_overlapping_booking_rejected() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;

    book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(room, date(3, 1), date(3, 5)),
    )
    .await;

    let response = server
        .post_auth(
            "/bookings",
            &server.other_customer_token,
            &CreateBookingRequest::stay(room, date(3, 4), date(3, 6)),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "ROOM_UNAVAILABLE");

    // Back-to-back stays share the boundary day
    book(
        &server,
        &server.other_customer_token,
        &CreateBookingRequest::stay(room, date(3, 5), date(3, 7)),
    )
    .await;
}

#[tokio::test]
async fn test_cancel_frees_dates() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;
    let stay = CreateBookingRequest::stay(room, date(4, 10), date(4, 12));

    let booking = book(&server, &server.customer_token, &stay).await;

    // Someone else's booking cannot be cancelled
    let response = server
        .post_empty_auth(
            &format!("/bookings/{}/cancel", booking.id),
            &server.other_customer_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_empty_auth(
            &format!("/bookings/{}/cancel", booking.id),
            &server.customer_token,
        )
        .await
        .unwrap();
    let cancelled: BookingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, BookingStatus::Cancelled);

    let rebooked = book(&server, &server.other_customer_token, &stay).await;
    assert_ne!(rebooked.id, booking.id);
}

#[tokio::test]
async fn test_concurrent_bookings_single_winner() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;
    let stay = CreateBookingRequest::stay(room, date(5, 1), date(5, 4));

    let attempts = (0..8).map(|i| {
        let token = if i % 2 == 0 {
            &server.customer_token
        } else {
            &server.other_customer_token
        };
        server.post_auth("/bookings", token, &stay)
    });
    let responses = join_all(attempts).await;

    let mut created = 0;
    let mut conflicts = 0;
    for response in responses {
        match response.unwrap().status() {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);
    assert_eq!(server.store.booking_count().await, 1);
}

#[tokio::test]
async fn test_booking_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;
    let booking = book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(room, date(3, 1), date(3, 3)),
    )
    .await;

    // Customers may not check themselves in
    let response = set_status(
        &server,
        &server.customer_token,
        booking.id,
        BookingStatus::CheckedIn,
    )
    .await;
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = set_status(
        &server,
        &server.staff_token,
        booking.id,
        BookingStatus::CheckedOut,
    )
    .await;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_TRANSITION");

    let response = set_status(
        &server,
        &server.staff_token,
        booking.id,
        BookingStatus::CheckedIn,
    )
    .await;
    let checked_in: BookingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(checked_in.status, BookingStatus::CheckedIn);

    let response = set_status(
        &server,
        &server.staff_token,
        booking.id,
        BookingStatus::CheckedOut,
    )
    .await;
    let checked_out: BookingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(checked_out.status, BookingStatus::CheckedOut);

    let response = server
        .get_auth(&format!("/rooms/{room}"), &server.staff_token)
        .await
        .unwrap();
    let room: RoomResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(room.status, RoomStatus::Cleaning);

    let response = set_status(
        &server,
        &server.staff_token,
        booking.id,
        BookingStatus::Cancelled,
    )
    .await;
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_TRANSITION");
}

#[tokio::test]
async fn test_total_frozen_after_price_change() {
    let server = TestServer::start().await.unwrap();
    let (room_type_id, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;
    let booking = book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(room, date(6, 1), date(6, 5)),
    )
    .await;

    let response = server
        .put_auth(
            &format!("/room-types/{room_type_id}"),
            &server.staff_token,
            &json!({ "price_night": "150.00" }),
        )
        .await
        .unwrap();
    let room_type: RoomTypeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(room_type.price_night, Decimal::new(15000, 2));

    let response = server
        .get_auth(&format!("/bookings/{}", booking.id), &server.customer_token)
        .await
        .unwrap();
    let stored: BookingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stored.total_amount, Decimal::new(40000, 2));

    let response = server
        .get("/availability?check_in=2030-06-10&check_out=2030-06-14")
        .await
        .unwrap();
    let found: DataResponse<Vec<RoomSummaryResponse>> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.data[0].total_price, Decimal::new(60000, 2));
}

#[tokio::test]
async fn test_booking_validation_errors() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;

    let mut crowded = CreateBookingRequest::stay(room, date(3, 1), date(3, 2));
    crowded.guests = 3;
    let response = server
        .post_auth("/bookings", &server.customer_token, &crowded)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "CAPACITY_EXCEEDED");

    let response = server
        .post_auth(
            "/bookings",
            &server.customer_token,
            &CreateBookingRequest::stay(room, date(3, 2), date(3, 2)),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_DATE_RANGE");

    let response = server
        .post_auth(
            "/bookings",
            &server.customer_token,
            &CreateBookingRequest::stay(RecordId::new(9999), date(3, 1), date(3, 2)),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_ROOM");

    assert_eq!(server.store.booking_count().await, 0);
}

#[tokio::test]
async fn test_get_booking_by_reference() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;
    let booking = book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(room, date(3, 1), date(3, 2)),
    )
    .await;

    let path = format!("/bookings/reference/{}", booking.reference);
    let response = server.get_auth(&path, &server.customer_token).await.unwrap();
    let found: BookingResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.id, booking.id);

    let response = server.get_auth(&path, &server.other_customer_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth(&path, &server.staff_token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_list_bookings_scoped_to_customer() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;

    for day in [1, 3, 5] {
        book(
            &server,
            &server.customer_token,
            &CreateBookingRequest::stay(room, date(7, day), date(7, day + 1)),
        )
        .await;
    }
    book(
        &server,
        &server.other_customer_token,
        &CreateBookingRequest::stay(room, date(7, 10), date(7, 12)),
    )
    .await;

    let response = server
        .get_auth("/bookings?limit=2", &server.customer_token)
        .await
        .unwrap();
    let page: PageResponse<BookingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page.pagination.has_more);

    let response = server.get_auth("/bookings/@me", &server.other_customer_token).await.unwrap();
    let mine: PageResponse<BookingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.data.len(), 1);
    assert_eq!(mine.data[0].check_in, date(7, 10));

    let response = server.get_auth("/bookings", &server.staff_token).await.unwrap();
    let all: PageResponse<BookingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.pagination.total, 4);
    assert_eq!(all.pagination.page, 1);
    assert!(!all.pagination.has_more);
}

#[tokio::test]
async fn test_list_bookings_page_out_of_range() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .get_auth(
            "/bookings?page=9223372036854775807&limit=100",
            &server.staff_token,
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_booking_stats() {
    let server = TestServer::start().await.unwrap();
    let (_, room) = seed_room(&server, 2, Decimal::new(10000, 2)).await;

    book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(room, date(8, 1), date(8, 3)),
    )
    .await;
    let cancelled = book(
        &server,
        &server.customer_token,
        &CreateBookingRequest::stay(room, date(8, 5), date(8, 6)),
    )
    .await;
    let response = server
        .post_empty_auth(
            &format!("/bookings/{}/cancel", cancelled.id),
            &server.customer_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/bookings/stats", &server.customer_token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth("/bookings/stats", &server.staff_token).await.unwrap();
    let stats: BookingStatsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stats.total_bookings, 2);
    assert_eq!(stats.total_revenue, Decimal::new(20000, 2));

    let cancelled_row = stats
        .by_status
        .iter()
        .find(|s| s.status == BookingStatus::Cancelled)
        .expect("cancelled row");
    assert_eq!(cancelled_row.count, 1);
    assert_eq!(cancelled_row.revenue, Decimal::new(10000, 2));
}
