// Copyright 2026 the Sentraq Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State for the simpler page behaviors.
//!
//! Each submodule holds the part of a behavior that does not need a
//! document, so the web backend only has to read inputs and write outputs.

pub mod cursor;
pub mod lazy;
pub mod like;
pub mod menu;
pub mod navbar;
pub mod scroll;
