//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_data, assert_error, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

/// Sign up a fresh user and return its credentials plus a token pair
async fn signup_and_login(server: &TestServer) -> (SignupRequest, TokenResponse) {
    let signup_req = SignupRequest::unique();
    let response = server.post("/auth/signup", &signup_req).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let login_req = LoginRequest::from_signup(&signup_req);
    let response = server.post("/auth/login", &login_req).await.unwrap();
    let tokens: TokenResponse = assert_data(response, StatusCode::OK).await.unwrap();

    (signup_req, tokens)
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    let response = server.post("/auth/signup", &request).await.unwrap();
    let signup: SignupResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    assert!(signup.user_id > 0);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = SignupRequest::unique();

    // First signup
    server.post("/auth/signup", &request).await.unwrap();

    // Second signup with same email
    let response = server.post("/auth/signup", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "DUPLICATE_IDENTITY");
}

#[tokio::test]
async fn test_signup_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = SignupRequest::unique();
    request.password = "alllowercase".to_string();

    let response = server.post("/auth/signup", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    assert!(!tokens.access_token.is_empty());
    assert!(!tokens.refresh_token.is_empty());
    assert_eq!(tokens.token_type, "Bearer");
    assert!(tokens.expires_in > 0);
}

#[tokio::test]
async fn test_login_unknown_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let login_req = LoginRequest {
        email: format!("nobody{}@example.com", unique_suffix()),
        password: "TestPass123!".to_string(),
    };

    let response = server.post("/auth/login", &login_req).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup_req = SignupRequest::unique();
    server.post("/auth/signup", &signup_req).await.unwrap();

    let login_req = LoginRequest {
        email: signup_req.email.clone(),
        password: "WrongPass123!".to_string(),
    };

    let response = server.post("/auth/login", &login_req).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "BAD_CREDENTIALS");
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    // Refresh with the refresh token in the Authorization header
    let response = server
        .post_bearer("/auth/refresh", &tokens.refresh_token)
        .await
        .unwrap();
    let rotated: TokenResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(!rotated.access_token.is_empty());
    assert_ne!(rotated.refresh_token, tokens.refresh_token);

    // The superseded refresh token is dead after rotation
    let response = server
        .post_bearer("/auth/refresh", &tokens.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // The rotated one still works
    let response = server
        .post_bearer("/auth/refresh", &rotated.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let response = server
        .post_bearer("/auth/refresh", &tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_malformed_header() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // No Authorization header at all
    let response = server.post("/auth/refresh", &()).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(code, "MALFORMED_REQUEST");

    // Wrong scheme
    let response = server
        .post_raw_auth("/auth/refresh", "Basic dXNlcjpwYXNz")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(code, "MALFORMED_REQUEST");
}

#[tokio::test]
async fn test_second_login_supersedes_first_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (signup_req, first) = signup_and_login(&server).await;

    // Second login replaces the stored session
    let login_req = LoginRequest::from_signup(&signup_req);
    let response = server.post("/auth/login", &login_req).await.unwrap();
    let second: TokenResponse = assert_data(response, StatusCode::OK).await.unwrap();

    // First refresh token no longer matches the stored session
    let response = server
        .post_bearer("/auth/refresh", &first.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // Second one is live
    let response = server
        .post_bearer("/auth/refresh", &second.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let response = server
        .post_bearer("/auth/logout", &tokens.access_token)
        .await
        .unwrap();
    let message: MessageResponse = assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(message.message, "Logged out");

    // Refresh is dead after logout
    let response = server
        .post_bearer("/auth/refresh", &tokens.refresh_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // Logout again is a no-op, not an error
    let response = server
        .post_bearer("/auth/logout", &tokens.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_protected_route_without_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/favorite-slots").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

// ============================================================================
// Favorite Slot Tests
// ============================================================================

#[tokio::test]
async fn test_favorite_slot_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let lot_id = server
        .seed_parking_lot(&format!("Lot {}", unique_suffix()), 10)
        .await
        .unwrap();
    let slot_id = server.seed_parking_slot(lot_id, 1).await.unwrap();

    // Create favorite
    let request = CreateFavoriteSlotRequest { slot_id };
    let response = server
        .post_auth("/favorite-slots", &tokens.access_token, &request)
        .await
        .unwrap();
    let favorite: FavoriteSlotResponse = assert_data(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(favorite.slot_id, slot_id);
    assert_eq!(favorite.parking_lot_id, lot_id);
    assert_eq!(favorite.slot_number, 1);

    // Duplicate favorite is a conflict
    let response = server
        .post_auth("/favorite-slots", &tokens.access_token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "CONFLICT");

    // List includes the created favorite
    let response = server
        .get_auth("/favorite-slots", &tokens.access_token)
        .await
        .unwrap();
    let favorites: Vec<FavoriteSlotResponse> = assert_data(response, StatusCode::OK).await.unwrap();
    assert!(favorites.iter().any(|f| f.id == favorite.id));

    // Delete it
    let response = server
        .delete_auth(
            &format!("/favorite-slots/{}", favorite.id),
            &tokens.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Deleting again is a 404
    let response = server
        .delete_auth(
            &format!("/favorite-slots/{}", favorite.id),
            &tokens.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    server.cleanup_parking_lot(lot_id).await.unwrap();
}

#[tokio::test]
async fn test_favorite_unknown_slot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let request = CreateFavoriteSlotRequest {
        slot_id: i64::MAX - 1,
    };
    let response = server
        .post_auth("/favorite-slots", &tokens.access_token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_favorite_of_other_user_not_deletable() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = signup_and_login(&server).await;
    let (_, intruder) = signup_and_login(&server).await;

    let lot_id = server
        .seed_parking_lot(&format!("Lot {}", unique_suffix()), 5)
        .await
        .unwrap();
    let slot_id = server.seed_parking_slot(lot_id, 1).await.unwrap();

    let request = CreateFavoriteSlotRequest { slot_id };
    let response = server
        .post_auth("/favorite-slots", &owner.access_token, &request)
        .await
        .unwrap();
    let favorite: FavoriteSlotResponse = assert_data(response, StatusCode::CREATED).await.unwrap();

    // Another user cannot delete it
    let response = server
        .delete_auth(
            &format!("/favorite-slots/{}", favorite.id),
            &intruder.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    server.cleanup_parking_lot(lot_id).await.unwrap();
}

// ============================================================================
// Parking History Tests
// ============================================================================

#[tokio::test]
async fn test_parking_history_create_and_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let lot_id = server
        .seed_parking_lot(&format!("Lot {}", unique_suffix()), 20)
        .await
        .unwrap();

    // Record two parking events
    let request = CreateParkingHistoryRequest {
        parking_lot_id: lot_id,
    };
    for _ in 0..2 {
        let response = server
            .post_auth("/parking-histories", &tokens.access_token, &request)
            .await
            .unwrap();
        let history: ParkingHistoryResponse =
            assert_data(response, StatusCode::CREATED).await.unwrap();
        assert_eq!(history.parking_lot_id, lot_id);
    }

    // List returns both, newest first
    let response = server
        .get_auth("/parking-histories", &tokens.access_token)
        .await
        .unwrap();
    let histories: Vec<ParkingHistoryResponse> =
        assert_data(response, StatusCode::OK).await.unwrap();
    assert_eq!(histories.len(), 2);
    assert!(histories[0].parked_at >= histories[1].parked_at);

    server.cleanup_parking_lot(lot_id).await.unwrap();
}

#[tokio::test]
async fn test_parking_history_unknown_lot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let request = CreateParkingHistoryRequest {
        parking_lot_id: i64::MAX - 1,
    };
    let response = server
        .post_auth("/parking-histories", &tokens.access_token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

// ============================================================================
// Parking Lot Tests
// ============================================================================

#[tokio::test]
async fn test_list_parking_lots() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let name = format!("Lot {}", unique_suffix());
    let lot_id = server.seed_parking_lot(&name, 42).await.unwrap();

    let response = server
        .get_auth("/parking-lots", &tokens.access_token)
        .await
        .unwrap();
    let lots: Vec<ParkingLotResponse> = assert_data(response, StatusCode::OK).await.unwrap();

    let seeded = lots.iter().find(|l| l.id == lot_id).expect("seeded lot");
    assert_eq!(seeded.name, name);
    assert_eq!(seeded.total_slots, 42);

    server.cleanup_parking_lot(lot_id).await.unwrap();
}

#[tokio::test]
async fn test_list_lot_slots() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let lot_id = server
        .seed_parking_lot(&format!("Lot {}", unique_suffix()), 3)
        .await
        .unwrap();
    for n in [3, 1, 2] {
        server.seed_parking_slot(lot_id, n).await.unwrap();
    }

    let response = server
        .get_auth(&format!("/parking-lots/{lot_id}/slots"), &tokens.access_token)
        .await
        .unwrap();
    let slots: Vec<ParkingSlotResponse> = assert_data(response, StatusCode::OK).await.unwrap();

    assert_eq!(slots.len(), 3);
    let numbers: Vec<i64> = slots.iter().map(|s| s.slot_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);

    server.cleanup_parking_lot(lot_id).await.unwrap();
}

#[tokio::test]
async fn test_list_slots_unknown_lot() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = signup_and_login(&server).await;

    let response = server
        .get_auth(
            &format!("/parking-lots/{}/slots", i64::MAX - 1),
            &tokens.access_token,
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}
