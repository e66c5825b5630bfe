// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use oread::model::{Linedef, Map, Point2, Sector, Sidedef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn wall_count(self) -> usize {
        match self {
            Self::Small => 64,
            Self::Medium => 1_024,
            Self::Large => 16_384,
        }
    }
}

/// Parallel horizontal walls, 16 map units apart, cycling through the
/// classification variants so every eligibility branch is exercised.
pub fn parallel_walls(count: usize) -> Map {
    let mut map = Map::new();
    let hall = map.add_sector(Sector::new(0, 128));
    let raised = map.add_sector(Sector::new(32, 128));
    let hall_side = map.add_sidedef(Sidedef::new(hall));
    let hall_side_b = map.add_sidedef(Sidedef::new(hall));
    let raised_side = map.add_sidedef(Sidedef::new(raised));

    for index in 0..count {
        let y = index as f64 * 16.0;
        let a = map.add_vertex(Point2::new(0.0, y));
        let b = map.add_vertex(Point2::new(512.0, y));
        let linedef = Linedef::new(a, b).with_front(hall_side);
        let linedef = match index % 4 {
            0 => linedef,
            1 => linedef.with_back(raised_side),
            2 => linedef.with_back(hall_side_b),
            _ => linedef.with_hidden(true),
        };
        map.add_linedef(linedef);
    }

    map
}

pub fn fixture(case: Case) -> Map {
    parallel_walls(case.wall_count())
}
