// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

pub mod candidates;
pub mod health;
pub mod matches;
pub mod messages;
pub mod reports;
pub mod swipes;
