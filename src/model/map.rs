// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The map document: vertices, sectors, sidedefs, linedefs, things.
//!
//! Entity tables are index-addressed; disposed linedefs leave tombstones so
//! retained [`LinedefId`]s never silently re-point at another linedef.

use std::fmt;

use super::geom::Point2;
use super::ids::{LinedefId, SectorId, SidedefId, ThingId, VertexId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    position: Point2,
}

impl Vertex {
    pub fn new(position: Point2) -> Self {
        Self { position }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }
}

/// A bounded map region with floor/ceiling height attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sector {
    floor_height: i32,
    ceiling_height: i32,
}

impl Sector {
    pub fn new(floor_height: i32, ceiling_height: i32) -> Self {
        Self {
            floor_height,
            ceiling_height,
        }
    }

    pub fn floor_height(&self) -> i32 {
        self.floor_height
    }

    pub fn ceiling_height(&self) -> i32 {
        self.ceiling_height
    }
}

/// One side of a linedef, adjoining a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidedef {
    sector: SectorId,
}

impl Sidedef {
    pub fn new(sector: SectorId) -> Self {
        Self { sector }
    }

    pub fn sector(&self) -> SectorId {
        self.sector
    }
}

/// An oriented boundary line between two map areas (or the map exterior).
///
/// Presence of a back side implies the linedef is two-sided. `tag` is the
/// action association; nonzero tags pull auxiliary indicators into the view
/// when the linedef is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Linedef {
    start: VertexId,
    end: VertexId,
    front: Option<SidedefId>,
    back: Option<SidedefId>,
    tag: i32,
    secret: bool,
    hidden: bool,
    disposed: bool,
}

impl Linedef {
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self {
            start,
            end,
            front: None,
            back: None,
            tag: 0,
            secret: false,
            hidden: false,
            disposed: false,
        }
    }

    pub fn with_front(mut self, sidedef: SidedefId) -> Self {
        self.front = Some(sidedef);
        self
    }

    pub fn with_back(mut self, sidedef: SidedefId) -> Self {
        self.back = Some(sidedef);
        self
    }

    pub fn with_tag(mut self, tag: i32) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_secret(mut self, secret: bool) -> Self {
        self.secret = secret;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn front(&self) -> Option<SidedefId> {
        self.front
    }

    pub fn back(&self) -> Option<SidedefId> {
        self.back
    }

    pub fn tag(&self) -> i32 {
        self.tag
    }

    pub fn secret(&self) -> bool {
        self.secret
    }

    pub fn set_secret(&mut self, secret: bool) {
        self.secret = secret;
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

/// A point object on the map (player start, monster, decoration).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thing {
    position: Point2,
    kind: i32,
}

impl Thing {
    pub fn new(position: Point2, kind: i32) -> Self {
        Self { position, kind }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn kind(&self) -> i32 {
        self.kind
    }
}

/// Front/back floor and ceiling heights of a two-sided linedef.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideHeights {
    pub front_floor: i32,
    pub front_ceiling: i32,
    pub back_floor: i32,
    pub back_ceiling: i32,
}

impl SideHeights {
    pub fn floors_match(&self) -> bool {
        self.front_floor == self.back_floor
    }

    pub fn ceilings_match(&self) -> bool {
        self.front_ceiling == self.back_ceiling
    }
}

/// Pure attribute snapshot of a linedef.
///
/// Eligibility and color classification operate on this value type only, so
/// they can be unit-tested without a document fixture. `heights` is `Some`
/// exactly when the linedef is two-sided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinedefProfile {
    pub start: Point2,
    pub end: Point2,
    pub two_sided: bool,
    pub heights: Option<SideHeights>,
    pub secret: bool,
    pub hidden: bool,
    pub tag: i32,
}

impl LinedefProfile {
    /// Nonzero tags require auxiliary association indicators when highlighted.
    pub fn has_association(&self) -> bool {
        self.tag != 0
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

/// Document data violating the expected referential shape.
///
/// Fatal to the operation that discovered it; surfaced to the host, never
/// retried or swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyError {
    DanglingVertex {
        linedef: LinedefId,
        vertex: VertexId,
    },
    DanglingSidedef {
        linedef: LinedefId,
        sidedef: SidedefId,
    },
    DanglingSector {
        linedef: LinedefId,
        sidedef: SidedefId,
        sector: SectorId,
    },
    MissingFrontSide {
        linedef: LinedefId,
    },
}

impl fmt::Display for ConsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingVertex { linedef, vertex } => {
                write!(f, "linedef {linedef} references missing vertex {vertex}")
            }
            Self::DanglingSidedef { linedef, sidedef } => {
                write!(f, "linedef {linedef} references missing sidedef {sidedef}")
            }
            Self::DanglingSector {
                linedef,
                sidedef,
                sector,
            } => {
                write!(
                    f,
                    "sidedef {sidedef} of linedef {linedef} references missing sector {sector}"
                )
            }
            Self::MissingFrontSide { linedef } => {
                write!(f, "two-sided linedef {linedef} has no front side")
            }
        }
    }
}

impl std::error::Error for ConsistencyError {}

/// The level map the inspector runs against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    vertices: Vec<Vertex>,
    sectors: Vec<Sector>,
    sidedefs: Vec<Sidedef>,
    linedefs: Vec<Linedef>,
    things: Vec<Thing>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, position: Point2) -> VertexId {
        let id = VertexId::new(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(position));
        id
    }

    pub fn add_sector(&mut self, sector: Sector) -> SectorId {
        let id = SectorId::new(self.sectors.len() as u32);
        self.sectors.push(sector);
        id
    }

    pub fn add_sidedef(&mut self, sidedef: Sidedef) -> SidedefId {
        let id = SidedefId::new(self.sidedefs.len() as u32);
        self.sidedefs.push(sidedef);
        id
    }

    pub fn add_linedef(&mut self, linedef: Linedef) -> LinedefId {
        let id = LinedefId::new(self.linedefs.len() as u32);
        self.linedefs.push(linedef);
        id
    }

    pub fn add_thing(&mut self, thing: Thing) -> ThingId {
        let id = ThingId::new(self.things.len() as u32);
        self.things.push(thing);
        id
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.as_usize())
    }

    pub fn sector(&self, id: SectorId) -> Option<&Sector> {
        self.sectors.get(id.as_usize())
    }

    pub fn sidedef(&self, id: SidedefId) -> Option<&Sidedef> {
        self.sidedefs.get(id.as_usize())
    }

    pub fn thing(&self, id: ThingId) -> Option<&Thing> {
        self.things.get(id.as_usize())
    }

    /// Resolves a live linedef; disposed or out-of-range handles yield `None`.
    pub fn linedef(&self, id: LinedefId) -> Option<&Linedef> {
        self.linedefs
            .get(id.as_usize())
            .filter(|linedef| !linedef.is_disposed())
    }

    pub fn linedef_mut(&mut self, id: LinedefId) -> Option<&mut Linedef> {
        self.linedefs
            .get_mut(id.as_usize())
            .filter(|linedef| !linedef.is_disposed())
    }

    /// Live linedefs in document order.
    pub fn iter_linedefs(&self) -> impl Iterator<Item = (LinedefId, &Linedef)> {
        self.linedefs
            .iter()
            .enumerate()
            .filter(|(_, linedef)| !linedef.is_disposed())
            .map(|(index, linedef)| (LinedefId::new(index as u32), linedef))
    }

    pub fn iter_things(&self) -> impl Iterator<Item = (ThingId, &Thing)> {
        self.things
            .iter()
            .enumerate()
            .map(|(index, thing)| (ThingId::new(index as u32), thing))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn sidedef_count(&self) -> usize {
        self.sidedefs.len()
    }

    pub fn linedef_count(&self) -> usize {
        self.linedefs.len()
    }

    pub fn thing_count(&self) -> usize {
        self.things.len()
    }

    /// Tombstones a linedef. Returns false if the handle was already dead.
    pub fn dispose_linedef(&mut self, id: LinedefId) -> bool {
        match self.linedefs.get_mut(id.as_usize()) {
            Some(linedef) if !linedef.is_disposed() => {
                linedef.disposed = true;
                true
            }
            _ => false,
        }
    }

    /// Axis-aligned bounds over all vertices, `None` for an empty map.
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let mut vertices = self.vertices.iter();
        let first = vertices.next()?.position();
        let mut min = first;
        let mut max = first;
        for vertex in vertices {
            let p = vertex.position();
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    /// Snapshots a linedef's attributes for classification.
    ///
    /// `None` for dead handles. An absent back side means one-sided and the
    /// front is left unresolved; a present back side requires both adjoining
    /// sector attribute pairs to resolve or the whole operation fails.
    pub fn linedef_profile(
        &self,
        id: LinedefId,
    ) -> Result<Option<LinedefProfile>, ConsistencyError> {
        let Some(linedef) = self.linedef(id) else {
            return Ok(None);
        };

        let start = self
            .vertex(linedef.start())
            .ok_or(ConsistencyError::DanglingVertex {
                linedef: id,
                vertex: linedef.start(),
            })?
            .position();
        let end = self
            .vertex(linedef.end())
            .ok_or(ConsistencyError::DanglingVertex {
                linedef: id,
                vertex: linedef.end(),
            })?
            .position();

        let heights = match linedef.back() {
            None => None,
            Some(back) => {
                let front = linedef
                    .front()
                    .ok_or(ConsistencyError::MissingFrontSide { linedef: id })?;
                let (front_floor, front_ceiling) = self.side_heights(id, front)?;
                let (back_floor, back_ceiling) = self.side_heights(id, back)?;
                Some(SideHeights {
                    front_floor,
                    front_ceiling,
                    back_floor,
                    back_ceiling,
                })
            }
        };

        Ok(Some(LinedefProfile {
            start,
            end,
            two_sided: heights.is_some(),
            heights,
            secret: linedef.secret(),
            hidden: linedef.hidden(),
            tag: linedef.tag(),
        }))
    }

    fn side_heights(
        &self,
        linedef: LinedefId,
        sidedef: SidedefId,
    ) -> Result<(i32, i32), ConsistencyError> {
        let side = self
            .sidedef(sidedef)
            .ok_or(ConsistencyError::DanglingSidedef { linedef, sidedef })?;
        let sector =
            self.sector(side.sector())
                .ok_or(ConsistencyError::DanglingSector {
                    linedef,
                    sidedef,
                    sector: side.sector(),
                })?;
        Ok((sector.floor_height(), sector.ceiling_height()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ConsistencyError, Linedef, Map, Point2, Sector, Sidedef};
    use crate::model::{LinedefId, SectorId, SidedefId};

    fn two_room_map() -> Map {
        let mut map = Map::new();
        let v0 = map.add_vertex(Point2::new(0.0, 0.0));
        let v1 = map.add_vertex(Point2::new(64.0, 0.0));
        let s0 = map.add_sector(Sector::new(0, 128));
        let s1 = map.add_sector(Sector::new(32, 128));
        let front = map.add_sidedef(Sidedef::new(s0));
        let back = map.add_sidedef(Sidedef::new(s1));
        map.add_linedef(Linedef::new(v0, v1).with_front(front).with_back(back));
        map.add_linedef(Linedef::new(v0, v1).with_front(front));
        map
    }

    #[test]
    fn profile_of_two_sided_linedef_resolves_both_height_pairs() {
        let map = two_room_map();
        let profile = map
            .linedef_profile(LinedefId::new(0))
            .expect("profile")
            .expect("live linedef");

        assert!(profile.two_sided);
        let heights = profile.heights.expect("two-sided heights");
        assert_eq!(heights.front_floor, 0);
        assert_eq!(heights.back_floor, 32);
        assert!(heights.ceilings_match());
        assert!(!heights.floors_match());
    }

    #[test]
    fn profile_of_one_sided_linedef_has_no_heights() {
        let map = two_room_map();
        let profile = map
            .linedef_profile(LinedefId::new(1))
            .expect("profile")
            .expect("live linedef");

        assert!(!profile.two_sided);
        assert_eq!(profile.heights, None);
    }

    #[test]
    fn profile_of_disposed_linedef_is_none() {
        let mut map = two_room_map();
        assert!(map.dispose_linedef(LinedefId::new(0)));
        assert_eq!(map.linedef_profile(LinedefId::new(0)), Ok(None));
        assert!(map.linedef(LinedefId::new(0)).is_none());
        assert!(!map.dispose_linedef(LinedefId::new(0)));
    }

    #[test]
    fn dangling_back_sector_is_a_consistency_error() {
        let mut map = Map::new();
        let v0 = map.add_vertex(Point2::new(0.0, 0.0));
        let v1 = map.add_vertex(Point2::new(64.0, 0.0));
        let s0 = map.add_sector(Sector::new(0, 128));
        let front = map.add_sidedef(Sidedef::new(s0));
        let back = map.add_sidedef(Sidedef::new(SectorId::new(9)));
        let id = map.add_linedef(Linedef::new(v0, v1).with_front(front).with_back(back));

        assert_eq!(
            map.linedef_profile(id),
            Err(ConsistencyError::DanglingSector {
                linedef: id,
                sidedef: back,
                sector: SectorId::new(9),
            })
        );
    }

    #[test]
    fn dangling_back_sidedef_is_a_consistency_error() {
        let mut map = Map::new();
        let v0 = map.add_vertex(Point2::new(0.0, 0.0));
        let v1 = map.add_vertex(Point2::new(64.0, 0.0));
        let s0 = map.add_sector(Sector::new(0, 128));
        let front = map.add_sidedef(Sidedef::new(s0));
        let id = map.add_linedef(
            Linedef::new(v0, v1)
                .with_front(front)
                .with_back(SidedefId::new(42)),
        );

        assert_eq!(
            map.linedef_profile(id),
            Err(ConsistencyError::DanglingSidedef {
                linedef: id,
                sidedef: SidedefId::new(42),
            })
        );
    }

    #[test]
    fn two_sided_linedef_without_front_is_a_consistency_error() {
        let mut map = Map::new();
        let v0 = map.add_vertex(Point2::new(0.0, 0.0));
        let v1 = map.add_vertex(Point2::new(64.0, 0.0));
        let s0 = map.add_sector(Sector::new(0, 128));
        let back = map.add_sidedef(Sidedef::new(s0));
        let id = map.add_linedef(Linedef::new(v0, v1).with_back(back));

        assert_eq!(
            map.linedef_profile(id),
            Err(ConsistencyError::MissingFrontSide { linedef: id })
        );
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let map = two_room_map();
        let (min, max) = map.bounds().expect("bounds");
        assert_eq!((min.x, min.y), (0.0, 0.0));
        assert_eq!((max.x, max.y), (64.0, 0.0));
        assert_eq!(Map::new().bounds(), None);
    }

    #[test]
    fn iter_linedefs_skips_tombstones_and_keeps_document_order() {
        let mut map = two_room_map();
        map.dispose_linedef(LinedefId::new(0));
        let ids: Vec<_> = map.iter_linedefs().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, vec![1]);
    }
}
