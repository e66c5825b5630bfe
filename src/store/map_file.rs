// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{
    Linedef, Map, Point2, Sector, SectorId, Sidedef, SidedefId, Thing, VertexId,
};

use super::StoreError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct MapFile {
    #[serde(default)]
    vertices: Vec<VertexRecord>,
    #[serde(default)]
    sectors: Vec<SectorRecord>,
    #[serde(default)]
    sidedefs: Vec<SidedefRecord>,
    #[serde(default)]
    linedefs: Vec<LinedefRecord>,
    #[serde(default)]
    things: Vec<ThingRecord>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct VertexRecord {
    x: f64,
    y: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SectorRecord {
    floor_height: i32,
    ceiling_height: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SidedefRecord {
    sector: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct LinedefRecord {
    start: u32,
    end: u32,
    #[serde(default)]
    front: Option<u32>,
    #[serde(default)]
    back: Option<u32>,
    #[serde(default)]
    tag: i32,
    #[serde(default)]
    secret: bool,
    #[serde(default)]
    hidden: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ThingRecord {
    x: f64,
    y: f64,
    #[serde(default)]
    kind: i32,
}

/// Referential validation failures while adopting a map file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFileError {
    VertexIndex { linedef: usize, vertex: u32 },
    SidedefIndex { linedef: usize, sidedef: u32 },
    SectorIndex { sidedef: usize, sector: u32 },
}

impl fmt::Display for MapFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexIndex { linedef, vertex } => {
                write!(f, "linedef {linedef} references vertex {vertex} out of range")
            }
            Self::SidedefIndex { linedef, sidedef } => {
                write!(f, "linedef {linedef} references sidedef {sidedef} out of range")
            }
            Self::SectorIndex { sidedef, sector } => {
                write!(f, "sidedef {sidedef} references sector {sector} out of range")
            }
        }
    }
}

impl std::error::Error for MapFileError {}

fn adopt(file: MapFile) -> Result<Map, MapFileError> {
    let mut map = Map::new();

    for vertex in &file.vertices {
        map.add_vertex(Point2::new(vertex.x, vertex.y));
    }
    for sector in &file.sectors {
        map.add_sector(Sector::new(sector.floor_height, sector.ceiling_height));
    }
    for (index, sidedef) in file.sidedefs.iter().enumerate() {
        if sidedef.sector as usize >= file.sectors.len() {
            return Err(MapFileError::SectorIndex {
                sidedef: index,
                sector: sidedef.sector,
            });
        }
        map.add_sidedef(Sidedef::new(SectorId::new(sidedef.sector)));
    }

    for (index, record) in file.linedefs.iter().enumerate() {
        for vertex in [record.start, record.end] {
            if vertex as usize >= file.vertices.len() {
                return Err(MapFileError::VertexIndex {
                    linedef: index,
                    vertex,
                });
            }
        }
        for sidedef in [record.front, record.back].into_iter().flatten() {
            if sidedef as usize >= file.sidedefs.len() {
                return Err(MapFileError::SidedefIndex {
                    linedef: index,
                    sidedef,
                });
            }
        }

        let mut linedef = Linedef::new(VertexId::new(record.start), VertexId::new(record.end))
            .with_tag(record.tag)
            .with_secret(record.secret)
            .with_hidden(record.hidden);
        if let Some(front) = record.front {
            linedef = linedef.with_front(SidedefId::new(front));
        }
        if let Some(back) = record.back {
            linedef = linedef.with_back(SidedefId::new(back));
        }
        map.add_linedef(linedef);
    }

    for thing in &file.things {
        map.add_thing(Thing::new(Point2::new(thing.x, thing.y), thing.kind));
    }

    Ok(map)
}

fn export(map: &Map) -> MapFile {
    let mut file = MapFile::default();

    for index in 0..map.vertex_count() {
        let vertex = map
            .vertex(VertexId::new(index as u32))
            .expect("vertex index in range");
        file.vertices.push(VertexRecord {
            x: vertex.position().x,
            y: vertex.position().y,
        });
    }
    for index in 0..map.sector_count() {
        let sector = map
            .sector(SectorId::new(index as u32))
            .expect("sector index in range");
        file.sectors.push(SectorRecord {
            floor_height: sector.floor_height(),
            ceiling_height: sector.ceiling_height(),
        });
    }
    for index in 0..map.sidedef_count() {
        let sidedef = map
            .sidedef(SidedefId::new(index as u32))
            .expect("sidedef index in range");
        file.sidedefs.push(SidedefRecord {
            sector: sidedef.sector().get(),
        });
    }
    for (_, linedef) in map.iter_linedefs() {
        file.linedefs.push(LinedefRecord {
            start: linedef.start().get(),
            end: linedef.end().get(),
            front: linedef.front().map(|id| id.get()),
            back: linedef.back().map(|id| id.get()),
            tag: linedef.tag(),
            secret: linedef.secret(),
            hidden: linedef.hidden(),
        });
    }
    for (_, thing) in map.iter_things() {
        file.things.push(ThingRecord {
            x: thing.position().x,
            y: thing.position().y,
            kind: thing.kind(),
        });
    }

    file
}

pub fn load_map(path: &Path) -> Result<Map, StoreError> {
    let raw = fs::read_to_string(path).map_err(StoreError::Io)?;
    let file: MapFile = serde_json::from_str(&raw).map_err(StoreError::Json)?;
    adopt(file).map_err(StoreError::Map)
}

pub fn save_map(path: &Path, map: &Map) -> Result<(), StoreError> {
    let file = export(map);
    let raw = serde_json::to_string_pretty(&file).map_err(StoreError::Json)?;
    fs::write(path, raw).map_err(StoreError::Io)
}
