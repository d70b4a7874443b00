// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core feed types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It depends on
//! `std` only, so the data model can be built and tested without a GUI.
//!
//! # Modules
//!
//! - [`feed`]: Feed records ([`Post`](feed::Post), [`Comment`](feed::Comment))
//!   and their value objects ([`PostId`](feed::PostId),
//!   [`LikeCount`](feed::LikeCount), [`ImageSource`](feed::ImageSource))

pub mod feed;
