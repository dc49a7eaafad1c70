/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

extern crate app_core as talenta_core;
use talenta_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("not-a-port").unwrap_err();
    assert_eq!(port, "`not-a-port` is not a port number");
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<u32>("1").unwrap();
    assert_eq!(num, 1);

    let num = greater_than_zero::<u32>("60").unwrap();
    assert_eq!(num, 60);

    assert!(greater_than_zero::<usize>("0").is_err());
    assert!(greater_than_zero::<i64>("-5").is_err());
    assert!(greater_than_zero::<i64>("abc").is_err());
}

#[test]
fn test_check_display_name() {
    assert!(check_display_name("Acme Corp").is_ok());
    assert!(check_display_name("Belajar Rust untuk Pemula").is_ok());

    assert!(check_display_name("").is_err());
    assert!(check_display_name("   ").is_err());
    assert!(check_display_name(&"x".repeat(256)).is_err());
}

#[test]
fn test_load_secret_missing_file() {
    assert_eq!(load_secret("/nonexistent/secret"), "");
}
