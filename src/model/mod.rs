// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core map data model.
//!
//! A [`Map`] owns vertices, sectors, sidedefs, linedefs and things; the
//! inspection core holds only typed indices into it.

pub(crate) mod fixtures;
pub mod geom;
pub mod ids;
pub mod map;

pub use geom::{point_segment_distance, point_segment_distance_sq, Point2};
pub use ids::{Idx, LinedefId, SectorId, SidedefId, ThingId, VertexId};
pub use map::{
    ConsistencyError, Linedef, LinedefProfile, Map, Sector, SideHeights, Sidedef, Thing, Vertex,
};
