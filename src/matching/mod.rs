// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

//! The matching core: candidate selection, swipe recording, mutual match
//! detection and ephemeral messaging. Every operation here is a single
//! request-scoped unit of work against the shared store; no cross-call state
//! is held in memory.

pub mod candidates;
pub mod matches;
pub mod messages;
pub mod reports;
pub mod swipes;
