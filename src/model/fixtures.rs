// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geom::Point2;
use super::ids::SidedefId;
use super::map::{Linedef, Map, Sector, Sidedef, Thing};

/// A small demo map with one specimen of every classification:
/// one-sided perimeter walls, a floor step, a lowered ceiling, a flush
/// divider, a secret door with an action tag, and a wall hidden from the
/// automap.
pub(crate) fn demo_map() -> Map {
    let mut map = Map::new();

    // Main hall, raised east room, low-ceiling alcove, secret closet.
    let hall = map.add_sector(Sector::new(0, 128));
    let east = map.add_sector(Sector::new(32, 128));
    let alcove = map.add_sector(Sector::new(0, 96));
    let closet = map.add_sector(Sector::new(0, 128));

    let side = |map: &mut Map, sector| -> SidedefId { map.add_sidedef(Sidedef::new(sector)) };

    // Main hall perimeter (clockwise from the southwest corner).
    let a = map.add_vertex(Point2::new(0.0, 0.0));
    let b = map.add_vertex(Point2::new(256.0, 0.0));
    let c = map.add_vertex(Point2::new(256.0, 256.0));
    let d = map.add_vertex(Point2::new(0.0, 256.0));

    // The south wall is flagged as not shown on the automap.
    let hall_front = side(&mut map, hall);
    map.add_linedef(Linedef::new(a, b).with_front(hall_front).with_hidden(true));
    map.add_linedef(Linedef::new(d, a).with_front(hall_front));

    // East room behind a floor step.
    let e = map.add_vertex(Point2::new(384.0, 0.0));
    let f = map.add_vertex(Point2::new(384.0, 256.0));

    let east_front = side(&mut map, east);
    map.add_linedef(Linedef::new(b, e).with_front(east_front));
    map.add_linedef(Linedef::new(e, f).with_front(east_front));
    map.add_linedef(Linedef::new(f, c).with_front(east_front));
    let step_back = side(&mut map, east);
    let step_front = side(&mut map, hall);
    map.add_linedef(
        Linedef::new(b, c)
            .with_front(step_front)
            .with_back(step_back),
    );

    // Alcove under a dropped ceiling, north of the hall.
    let g = map.add_vertex(Point2::new(64.0, 256.0));
    let h = map.add_vertex(Point2::new(192.0, 256.0));
    let i = map.add_vertex(Point2::new(192.0, 320.0));
    let j = map.add_vertex(Point2::new(64.0, 320.0));

    let alcove_front = side(&mut map, alcove);
    map.add_linedef(Linedef::new(h, i).with_front(alcove_front));
    map.add_linedef(Linedef::new(i, j).with_front(alcove_front));
    map.add_linedef(Linedef::new(j, g).with_front(alcove_front));
    let lintel_front = side(&mut map, hall);
    let lintel_back = side(&mut map, alcove);
    map.add_linedef(
        Linedef::new(g, h)
            .with_front(lintel_front)
            .with_back(lintel_back),
    );
    map.add_linedef(Linedef::new(c, h).with_front(hall_front));
    map.add_linedef(Linedef::new(g, d).with_front(hall_front));

    // Secret closet west of the hall, entered through a tagged secret door.
    let k = map.add_vertex(Point2::new(-96.0, 96.0));
    let l = map.add_vertex(Point2::new(-96.0, 160.0));
    let m = map.add_vertex(Point2::new(0.0, 160.0));
    let n = map.add_vertex(Point2::new(0.0, 96.0));

    let closet_front = side(&mut map, closet);
    map.add_linedef(Linedef::new(k, l).with_front(closet_front));
    map.add_linedef(Linedef::new(l, m).with_front(closet_front));
    map.add_linedef(Linedef::new(n, k).with_front(closet_front));
    let door_front = side(&mut map, hall);
    let door_back = side(&mut map, closet);
    map.add_linedef(
        Linedef::new(m, n)
            .with_front(door_front)
            .with_back(door_back)
            .with_secret(true)
            .with_tag(7),
    );

    // Flush divider across the hall, invisible to the automap by geometry.
    let o = map.add_vertex(Point2::new(128.0, 0.0));
    let p = map.add_vertex(Point2::new(128.0, 256.0));
    let divider_front = side(&mut map, hall);
    let divider_back = side(&mut map, hall);
    map.add_linedef(
        Linedef::new(o, p)
            .with_front(divider_front)
            .with_back(divider_back),
    );

    map.add_thing(Thing::new(Point2::new(64.0, 64.0), 1));
    map.add_thing(Thing::new(Point2::new(320.0, 128.0), 3004));
    map.add_thing(Thing::new(Point2::new(-48.0, 128.0), 2014));

    map
}
