// Copyright (c) MoodzLink Team
// SPDX-License-Identifier: Apache-2.0

pub mod message;
pub mod mood_match;
pub mod post;
pub mod report;
pub mod swipe;
