/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for shared types

extern crate app_core as talenta_core;
use talenta_core::types::{BaseResponse, ListResponse, RateLimiter};
use uuid::Uuid;

#[test]
fn test_rate_limiter_counts_within_window() {
    let limiter = RateLimiter::default();
    let key = Uuid::new_v4();

    for _ in 0..3 {
        assert!(limiter.allow(key, 1000, 3, 60));
    }
    assert!(!limiter.allow(key, 1000, 3, 60));
    assert!(!limiter.allow(key, 1059, 3, 60));
}

#[test]
fn test_rate_limiter_resets_after_window() {
    let limiter = RateLimiter::default();
    let key = Uuid::new_v4();

    for _ in 0..3 {
        assert!(limiter.allow(key, 1000, 3, 60));
    }
    assert!(!limiter.allow(key, 1000, 3, 60));

    assert!(limiter.allow(key, 1060, 3, 60));
    assert!(limiter.allow(key, 1061, 3, 60));
}

#[test]
fn test_rate_limiter_keys_are_independent() {
    let limiter = RateLimiter::default();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    assert!(limiter.allow(first, 1000, 1, 60));
    assert!(!limiter.allow(first, 1001, 1, 60));
    assert!(limiter.allow(second, 1001, 1, 60));
}

#[test]
fn test_base_response_serialization() {
    let res = BaseResponse {
        error: false,
        message: "ok".to_string(),
    };

    let json = serde_json::to_string(&res).unwrap();
    assert_eq!(json, "{\"error\":false,\"message\":\"ok\"}");
}

#[test]
fn test_list_response_counts_items() {
    let res = ListResponse::new(vec!["a", "b", "c"]);

    assert!(!res.error);
    assert_eq!(res.total, 3);

    let json = serde_json::to_string(&res).unwrap();
    assert!(json.contains("\"total\":3"));
}
