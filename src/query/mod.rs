// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over the map.
//!
//! Eligibility, color classification and cursor hit testing; these power the
//! candidate filter and the highlight tracker.

pub mod classify;
pub mod nearest;

pub use classify::{classify, is_inspectable, rebuild_candidates, LineClass};
pub use nearest::nearest_in_range;
