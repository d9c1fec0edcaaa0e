// ABOUTME: Helper module organization for integration tests
// ABOUTME: Exposes the axum request helper used by route tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

#![allow(dead_code, missing_docs)]

pub mod axum_test;
