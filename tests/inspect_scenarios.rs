// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end inspection scenarios driven through the public API.

use oread::mode::{InfoSink, InspectSession, LinedefInfo};
use oread::model::{Linedef, LinedefId, Map, Point2, Sector, Sidedef};
use oread::ops::{SnapshotJournal, TOGGLE_HIDDEN_UNDO_LABEL};
use oread::query::{classify, LineClass};
use oread::render::{
    class_color, FrameLayer, MapRenderer, PixelColor, Presentation, COLOR_FLOOR_CHANGE,
    COLOR_HIGHLIGHT, COLOR_SOLID,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Presentation(usize),
    StartFrame(FrameLayer, bool),
    Plot(PixelColor),
    Thing(PixelColor),
    Finish,
    Present,
}

#[derive(Debug, Default)]
struct RecordingRenderer {
    calls: Vec<Call>,
}

impl RecordingRenderer {
    fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.calls.clear();
    }

    fn full_frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::StartFrame(FrameLayer::Geometry, true)))
            .count()
    }

    fn partial_frames(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, Call::StartFrame(FrameLayer::Geometry, false)))
            .count()
    }

    fn plots(&self) -> Vec<PixelColor> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Plot(color) => Some(*color),
                _ => None,
            })
            .collect()
    }
}

impl MapRenderer for RecordingRenderer {
    fn set_presentation(&mut self, presentation: &Presentation) {
        self.calls.push(Call::Presentation(presentation.layers().len()));
    }

    fn start_frame(&mut self, layer: FrameLayer, clear: bool) -> bool {
        self.calls.push(Call::StartFrame(layer, clear));
        true
    }

    fn plot_linedef(&mut self, _start: Point2, _end: Point2, color: PixelColor) {
        self.calls.push(Call::Plot(color));
    }

    fn plot_thing(&mut self, _at: Point2, color: PixelColor) {
        self.calls.push(Call::Thing(color));
    }

    fn finish(&mut self) {
        self.calls.push(Call::Finish);
    }

    fn present(&mut self) {
        self.calls.push(Call::Present);
    }

    fn scale(&self) -> f64 {
        1.0
    }
}

#[derive(Debug, Default)]
struct Readout {
    current: Option<LinedefInfo>,
}

impl InfoSink for Readout {
    fn show_linedef(&mut self, info: &LinedefInfo) {
        self.current = Some(*info);
    }

    fn hide_info(&mut self) {
        self.current = None;
    }
}

struct Fixture {
    map: Map,
    s1_one_sided: LinedefId,
    s2_floor_step: LinedefId,
    s3_flush: LinedefId,
    s4_tagged: LinedefId,
}

/// S1 one-sided, S2 floor step 0/64, S3 flush, S4 tagged (tag 5); horizontal
/// walls 100 map units apart so the 20-unit radius isolates each.
fn fixture() -> Fixture {
    let mut map = Map::new();
    let hall = map.add_sector(Sector::new(0, 128));
    let raised = map.add_sector(Sector::new(64, 128));
    let hall_side = map.add_sidedef(Sidedef::new(hall));
    let hall_side_b = map.add_sidedef(Sidedef::new(hall));
    let raised_side = map.add_sidedef(Sidedef::new(raised));

    let wall = |map: &mut Map, y: f64| {
        let a = map.add_vertex(Point2::new(0.0, y));
        let b = map.add_vertex(Point2::new(128.0, y));
        (a, b)
    };

    let (a, b) = wall(&mut map, 0.0);
    let s1_one_sided = map.add_linedef(Linedef::new(a, b).with_front(hall_side));
    let (a, b) = wall(&mut map, 100.0);
    let s2_floor_step = map.add_linedef(
        Linedef::new(a, b)
            .with_front(hall_side)
            .with_back(raised_side),
    );
    let (a, b) = wall(&mut map, 200.0);
    let s3_flush = map.add_linedef(
        Linedef::new(a, b)
            .with_front(hall_side)
            .with_back(hall_side_b),
    );
    let (a, b) = wall(&mut map, 300.0);
    let s4_tagged = map.add_linedef(Linedef::new(a, b).with_front(hall_side).with_tag(5));

    Fixture {
        map,
        s1_one_sided,
        s2_floor_step,
        s3_flush,
        s4_tagged,
    }
}

fn engaged(fixture: &Fixture, renderer: &mut RecordingRenderer) -> InspectSession {
    let mut session = InspectSession::new(20.0);
    session
        .engage(
            &fixture.map,
            false,
            &Presentation::automap(1.0, 0.5),
            renderer,
        )
        .expect("engage");
    session
}

fn hover(
    session: &mut InspectSession,
    fixture: &Fixture,
    renderer: &mut RecordingRenderer,
    readout: &mut Readout,
    y: f64,
) {
    session
        .cursor_moved(
            &fixture.map,
            Point2::new(64.0, y),
            false,
            renderer,
            readout,
        )
        .expect("cursor move");
}

#[test]
fn one_sided_wall_is_eligible_and_red() {
    let fixture = fixture();
    let mut renderer = RecordingRenderer::new();
    let session = engaged(&fixture, &mut renderer);

    assert!(session.candidates().contains(&fixture.s1_one_sided));
    let profile = fixture
        .map
        .linedef_profile(fixture.s1_one_sided)
        .expect("profile")
        .expect("live");
    assert_eq!(classify(&profile), LineClass::Solid);
    assert_eq!(class_color(classify(&profile)), COLOR_SOLID);
    assert!(renderer.plots().contains(&COLOR_SOLID));
}

#[test]
fn floor_height_mismatch_is_eligible_and_orange() {
    let fixture = fixture();
    let mut renderer = RecordingRenderer::new();
    let session = engaged(&fixture, &mut renderer);

    assert!(session.candidates().contains(&fixture.s2_floor_step));
    let profile = fixture
        .map
        .linedef_profile(fixture.s2_floor_step)
        .expect("profile")
        .expect("live");
    assert_eq!(classify(&profile), LineClass::FloorChange);
    assert_eq!(class_color(classify(&profile)), COLOR_FLOOR_CHANGE);
    assert!(renderer.plots().contains(&COLOR_FLOOR_CHANGE));
}

#[test]
fn flush_two_sided_line_is_excluded_entirely() {
    let fixture = fixture();
    let mut renderer = RecordingRenderer::new();
    let mut session = engaged(&fixture, &mut renderer);
    let mut readout = Readout::default();

    assert!(!session.candidates().contains(&fixture.s3_flush));
    // Not drawn: engage plotted only S1, S2, S4.
    assert_eq!(renderer.plots().len(), 3);

    // Not highlightable even with the cursor right on it.
    hover(&mut session, &fixture, &mut renderer, &mut readout, 200.0);
    assert_eq!(session.highlighted(), None);
    assert!(readout.current.is_none());
}

#[test]
fn untagged_to_untagged_transition_redraws_incrementally() {
    let fixture = fixture();
    let mut renderer = RecordingRenderer::new();
    let mut session = engaged(&fixture, &mut renderer);
    let mut readout = Readout::default();

    hover(&mut session, &fixture, &mut renderer, &mut readout, 2.0);
    assert_eq!(session.highlighted(), Some(fixture.s1_one_sided));
    renderer.reset();

    hover(&mut session, &fixture, &mut renderer, &mut readout, 98.0);
    assert_eq!(session.highlighted(), Some(fixture.s2_floor_step));
    assert_eq!(renderer.full_frames(), 0);
    assert_eq!(renderer.partial_frames(), 1);
    // Undraw the old decoration in its base color, draw the new highlight.
    assert_eq!(renderer.plots(), vec![COLOR_SOLID, COLOR_HIGHLIGHT]);
}

#[test]
fn transition_onto_a_tagged_linedef_forces_a_full_redraw() {
    let fixture = fixture();
    let mut renderer = RecordingRenderer::new();
    let mut session = engaged(&fixture, &mut renderer);
    let mut readout = Readout::default();

    hover(&mut session, &fixture, &mut renderer, &mut readout, 2.0);
    renderer.reset();

    hover(&mut session, &fixture, &mut renderer, &mut readout, 298.0);
    assert_eq!(session.highlighted(), Some(fixture.s4_tagged));
    assert_eq!(renderer.full_frames(), 1);
    assert_eq!(renderer.partial_frames(), 0);
    assert_eq!(readout.current.expect("readout").tag, 5);
}

#[test]
fn hiding_the_highlighted_linedef_clears_it_on_the_next_evaluation() {
    let mut fixture = fixture();
    let mut renderer = RecordingRenderer::new();
    let mut session = engaged(&fixture, &mut renderer);
    let mut readout = Readout::default();
    let mut journal = SnapshotJournal::new();

    hover(&mut session, &fixture, &mut renderer, &mut readout, 2.0);
    assert_eq!(session.highlighted(), Some(fixture.s1_one_sided));

    let outcome = session
        .toggle_hidden(&mut fixture.map, false, &mut journal, &mut renderer)
        .expect("toggle");
    assert!(outcome.is_applied());
    assert_eq!(journal.last_label(), Some(TOGGLE_HIDDEN_UNDO_LABEL));
    assert!(!session.candidates().contains(&fixture.s1_one_sided));

    hover(&mut session, &fixture, &mut renderer, &mut readout, 2.0);
    assert_eq!(session.highlighted(), None);
    assert!(readout.current.is_none());

    // Undo restores the pre-toggle flag and eligibility.
    journal.undo(&mut fixture.map).expect("undo");
    session.rebuild(&fixture.map, false).expect("rebuild");
    assert!(session.candidates().contains(&fixture.s1_one_sided));
}

#[test]
fn engage_configures_the_reduced_presentation() {
    let fixture = fixture();
    let mut renderer = RecordingRenderer::new();
    let _session = engaged(&fixture, &mut renderer);

    // Five layers (background, things, grid, geometry, overlay), then a full
    // recomposite of geometry, things and overlay frames.
    assert_eq!(renderer.calls.first(), Some(&Call::Presentation(5)));
    assert!(renderer
        .calls
        .contains(&Call::StartFrame(FrameLayer::Things, true)));
    assert!(renderer
        .calls
        .contains(&Call::StartFrame(FrameLayer::Overlay, true)));
    assert_eq!(renderer.calls.last(), Some(&Call::Present));
}
