/*
 * SPDX-FileCopyrightText: 2025 Talenta Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Inclusive pass threshold for quiz submissions.
pub const QUIZ_PASS_SCORE: f64 = 80.0;

pub const TOKEN_TTL_HOURS: i64 = 1;

pub const APPLICATION_STATUS_APPLIED: &str = "Applied";

/// A question needs at least this many answers, one of them correct.
pub const MIN_ANSWERS_PER_QUESTION: usize = 2;
