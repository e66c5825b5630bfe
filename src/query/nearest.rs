// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nearest-linedef hit testing against the cursor.

use crate::model::{point_segment_distance_sq, LinedefId, Map, Point2};

/// Finds the candidate nearest to `cursor` within `range` map units.
///
/// The scan runs in candidate order and keeps a strictly smaller minimum, so
/// equidistant candidates resolve to the earlier one deterministically.
/// Candidates whose handles no longer resolve (disposed since the last
/// rebuild) are skipped. Returns `None` when nothing lies within range.
pub fn nearest_in_range(
    map: &Map,
    candidates: &[LinedefId],
    cursor: Point2,
    range: f64,
) -> Option<LinedefId> {
    let range_sq = range * range;
    let mut best: Option<(LinedefId, f64)> = None;

    for &id in candidates {
        let Some(linedef) = map.linedef(id) else {
            continue;
        };
        let (Some(start), Some(end)) = (map.vertex(linedef.start()), map.vertex(linedef.end()))
        else {
            continue;
        };

        let dist_sq = point_segment_distance_sq(cursor, start.position(), end.position());
        if dist_sq > range_sq {
            continue;
        }
        if best.map_or(true, |(_, best_sq)| dist_sq < best_sq) {
            best = Some((id, dist_sq));
        }
    }

    best.map(|(id, _)| id)
}
