// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Automap eligibility and color classification.
//!
//! Both predicates are pure functions over a [`LinedefProfile`] snapshot; the
//! inspect-all policy flag is passed in explicitly, never fetched ambiently.

use crate::model::{ConsistencyError, LinedefId, LinedefProfile, Map};

/// What the automap can tell a player about a linedef.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineClass {
    /// Flagged as not shown on the automap.
    Hidden,
    /// One-sided, or flagged to draw as a solid wall (secret).
    Solid,
    /// Two-sided with differing floor heights.
    FloorChange,
    /// Two-sided with equal floors but differing ceiling heights.
    CeilingChange,
    /// Two-sided with both height pairs equal; invisible on the automap.
    Flush,
}

pub fn classify(profile: &LinedefProfile) -> LineClass {
    if profile.hidden {
        return LineClass::Hidden;
    }
    if !profile.two_sided || profile.secret {
        return LineClass::Solid;
    }
    match profile.heights {
        Some(heights) if !heights.floors_match() => LineClass::FloorChange,
        Some(heights) if !heights.ceilings_match() => LineClass::CeilingChange,
        _ => LineClass::Flush,
    }
}

/// The candidate-filter predicate.
///
/// With `inspect_all` set every linedef is eligible. Otherwise hidden lines
/// are excluded, solid and secret lines are included, and two-sided lines
/// qualify only when a height pair differs.
pub fn is_inspectable(profile: &LinedefProfile, inspect_all: bool) -> bool {
    if inspect_all {
        return true;
    }
    if profile.hidden {
        return false;
    }
    if !profile.two_sided || profile.secret {
        return true;
    }
    match profile.heights {
        Some(heights) => !heights.floors_match() || !heights.ceilings_match(),
        None => true,
    }
}

/// Rebuilds the ordered candidate set from scratch.
///
/// Insertion order is document order; disposed linedefs are skipped, while a
/// linedef whose side references fail to resolve fails the whole rebuild.
pub fn rebuild_candidates(
    map: &Map,
    inspect_all: bool,
) -> Result<Vec<LinedefId>, ConsistencyError> {
    let mut candidates = Vec::new();
    for (id, _) in map.iter_linedefs() {
        let Some(profile) = map.linedef_profile(id)? else {
            continue;
        };
        if is_inspectable(&profile, inspect_all) {
            candidates.push(id);
        }
    }
    Ok(candidates)
}
