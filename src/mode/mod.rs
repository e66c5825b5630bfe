// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The automap inspection mode session.
//!
//! Owns the candidate set and the highlight, decides redraw granularity on
//! every transition, and glues the toggle operations to rebuild + redraw.
//! All collaborators (map, renderer, journal, info readout, policy flag) are
//! passed in explicitly.

use crate::model::{ConsistencyError, LinedefId, Map, Point2, SideHeights};
use crate::ops::{self, ToggleOutcome, UndoJournal};
use crate::query::{
    classify, is_inspectable, nearest_in_range, rebuild_candidates, LineClass,
};
use crate::render::{
    class_color, redraw_plan, FrameLayer, MapRenderer, Presentation, RedrawPlan, COLOR_HIGHLIGHT,
    COLOR_THING,
};

/// Readout describing the highlighted linedef.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinedefInfo {
    pub linedef: LinedefId,
    pub class: LineClass,
    pub length: f64,
    pub tag: i32,
    pub two_sided: bool,
    pub secret: bool,
    pub hidden: bool,
    pub heights: Option<SideHeights>,
}

/// Where the highlight readout goes.
pub trait InfoSink {
    fn show_linedef(&mut self, info: &LinedefInfo);
    fn hide_info(&mut self);
}

/// One engaged inspection session.
///
/// Candidate set and highlight are exclusively owned here; every entry point
/// takes `&mut self`, so callers get the single mutual-exclusion boundary the
/// invariants require.
#[derive(Debug, Clone)]
pub struct InspectSession {
    highlight_radius: f64,
    candidates: Vec<LinedefId>,
    highlighted: Option<LinedefId>,
}

impl InspectSession {
    /// `highlight_radius` is in screen pixels; it is divided by the
    /// renderer's scale on every cursor move.
    pub fn new(highlight_radius: f64) -> Self {
        Self {
            highlight_radius,
            candidates: Vec::new(),
            highlighted: None,
        }
    }

    pub fn highlighted(&self) -> Option<LinedefId> {
        self.highlighted
    }

    pub fn candidates(&self) -> &[LinedefId] {
        &self.candidates
    }

    pub fn highlight_radius(&self) -> f64 {
        self.highlight_radius
    }

    /// Engages the mode: reduced presentation, fresh candidates, full frame.
    pub fn engage(
        &mut self,
        map: &Map,
        inspect_all: bool,
        presentation: &Presentation,
        renderer: &mut dyn MapRenderer,
    ) -> Result<(), ConsistencyError> {
        renderer.set_presentation(presentation);
        self.highlighted = None;
        self.rebuild(map, inspect_all)?;
        self.redraw_all(map, inspect_all, renderer)
    }

    /// Disengages the mode and hides the readout.
    pub fn disengage(&mut self, info: &mut dyn InfoSink) {
        self.highlighted = None;
        self.candidates.clear();
        info.hide_info();
    }

    /// Rebuilds the candidate set for the current policy flag.
    pub fn rebuild(&mut self, map: &Map, inspect_all: bool) -> Result<(), ConsistencyError> {
        self.candidates = rebuild_candidates(map, inspect_all)?;
        Ok(())
    }

    /// Tracks the cursor: nearest eligible linedef within the pixel radius
    /// converted to map space, then a highlight transition if it changed.
    pub fn cursor_moved(
        &mut self,
        map: &Map,
        cursor: Point2,
        inspect_all: bool,
        renderer: &mut dyn MapRenderer,
        info: &mut dyn InfoSink,
    ) -> Result<(), ConsistencyError> {
        let range = self.highlight_radius / renderer.scale();
        let next = nearest_in_range(map, &self.candidates, cursor, range);
        if next != self.highlighted {
            self.set_highlight(map, next, inspect_all, renderer, info)?;
        }
        Ok(())
    }

    /// The cursor left the view; highlight nothing.
    pub fn cursor_left(
        &mut self,
        map: &Map,
        inspect_all: bool,
        renderer: &mut dyn MapRenderer,
        info: &mut dyn InfoSink,
    ) -> Result<(), ConsistencyError> {
        self.set_highlight(map, None, inspect_all, renderer, info)
    }

    /// A policy-flag edge: rebuild candidates and recomposite.
    pub fn policy_changed(
        &mut self,
        map: &Map,
        inspect_all: bool,
        renderer: &mut dyn MapRenderer,
    ) -> Result<(), ConsistencyError> {
        self.rebuild(map, inspect_all)?;
        self.redraw_all(map, inspect_all, renderer)
    }

    /// Toggles the `secret` flag on the highlighted linedef.
    pub fn toggle_secret(
        &mut self,
        map: &mut Map,
        inspect_all: bool,
        journal: &mut dyn UndoJournal,
        renderer: &mut dyn MapRenderer,
    ) -> Result<ToggleOutcome, ConsistencyError> {
        let outcome = ops::toggle_secret(map, self.highlighted, journal);
        self.after_toggle(map, inspect_all, renderer, outcome)
    }

    /// Toggles the `hidden` flag on the highlighted linedef.
    pub fn toggle_hidden(
        &mut self,
        map: &mut Map,
        inspect_all: bool,
        journal: &mut dyn UndoJournal,
        renderer: &mut dyn MapRenderer,
    ) -> Result<ToggleOutcome, ConsistencyError> {
        let outcome = ops::toggle_hidden(map, self.highlighted, journal);
        self.after_toggle(map, inspect_all, renderer, outcome)
    }

    fn after_toggle(
        &mut self,
        map: &Map,
        inspect_all: bool,
        renderer: &mut dyn MapRenderer,
        outcome: ToggleOutcome,
    ) -> Result<ToggleOutcome, ConsistencyError> {
        if outcome.is_applied() {
            self.rebuild(map, inspect_all)?;
            self.redraw_all(map, inspect_all, renderer)?;
        }
        Ok(outcome)
    }

    /// Highlight transition with redraw-granularity decision.
    fn set_highlight(
        &mut self,
        map: &Map,
        next: Option<LinedefId>,
        inspect_all: bool,
        renderer: &mut dyn MapRenderer,
        info: &mut dyn InfoSink,
    ) -> Result<(), ConsistencyError> {
        let previous = self.highlighted;
        let plan = redraw_plan(linedef_association(map, previous), linedef_association(map, next));
        self.highlighted = next;

        match plan {
            RedrawPlan::Full => self.redraw_all(map, inspect_all, renderer)?,
            RedrawPlan::Incremental => {
                if renderer.start_frame(FrameLayer::Geometry, false) {
                    // Undraw the previous decoration by replotting its base
                    // classification color.
                    if let Some(prev) = previous {
                        if let Some(profile) = map.linedef_profile(prev)? {
                            if is_inspectable(&profile, inspect_all) {
                                renderer.plot_linedef(
                                    profile.start,
                                    profile.end,
                                    class_color(classify(&profile)),
                                );
                            }
                        }
                    }
                    if let Some(current) = self.highlighted {
                        if let Some(profile) = map.linedef_profile(current)? {
                            if is_inspectable(&profile, inspect_all) {
                                renderer.plot_linedef(profile.start, profile.end, COLOR_HIGHLIGHT);
                            }
                        }
                    }
                    renderer.finish();
                    renderer.present();
                }
            }
        }

        match self.highlighted {
            Some(id) => match linedef_info(map, id)? {
                Some(readout) => info.show_linedef(&readout),
                None => info.hide_info(),
            },
            None => info.hide_info(),
        }
        Ok(())
    }

    /// Recomposites the reduced display: classified geometry, things, an
    /// empty overlay, then the highlight decoration on top.
    pub fn redraw_all(
        &self,
        map: &Map,
        inspect_all: bool,
        renderer: &mut dyn MapRenderer,
    ) -> Result<(), ConsistencyError> {
        if renderer.start_frame(FrameLayer::Geometry, true) {
            for (id, _) in map.iter_linedefs() {
                let Some(profile) = map.linedef_profile(id)? else {
                    continue;
                };
                if is_inspectable(&profile, inspect_all) {
                    renderer.plot_linedef(
                        profile.start,
                        profile.end,
                        class_color(classify(&profile)),
                    );
                }
            }
            if let Some(id) = self.highlighted {
                if let Some(profile) = map.linedef_profile(id)? {
                    if is_inspectable(&profile, inspect_all) {
                        renderer.plot_linedef(profile.start, profile.end, COLOR_HIGHLIGHT);
                    }
                }
            }
            renderer.finish();
        }

        if renderer.start_frame(FrameLayer::Things, true) {
            for (_, thing) in map.iter_things() {
                renderer.plot_thing(thing.position(), COLOR_THING);
            }
            renderer.finish();
        }

        if renderer.start_frame(FrameLayer::Overlay, true) {
            renderer.finish();
        }

        renderer.present();
        Ok(())
    }
}

fn linedef_association(map: &Map, id: Option<LinedefId>) -> bool {
    id.and_then(|id| map.linedef(id))
        .map_or(false, |linedef| linedef.tag() != 0)
}

/// Builds the readout for a live linedef; `None` for dead handles.
pub fn linedef_info(map: &Map, id: LinedefId) -> Result<Option<LinedefInfo>, ConsistencyError> {
    let Some(profile) = map.linedef_profile(id)? else {
        return Ok(None);
    };
    Ok(Some(LinedefInfo {
        linedef: id,
        class: classify(&profile),
        length: profile.length(),
        tag: profile.tag,
        two_sided: profile.two_sided,
        secret: profile.secret,
        hidden: profile.hidden,
        heights: profile.heights,
    }))
}
