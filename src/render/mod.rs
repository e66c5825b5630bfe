// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering seam between the inspection mode and its display backend.
//!
//! The mode plots map-space primitives through [`MapRenderer`]; backends
//! decide how layers composite and how map units become screen units.

use crate::model::Point2;
use crate::query::LineClass;

/// An opaque RGB plotting color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const COLOR_HIDDEN: PixelColor = PixelColor::new(192, 192, 192);
pub const COLOR_SOLID: PixelColor = PixelColor::new(252, 0, 0);
pub const COLOR_FLOOR_CHANGE: PixelColor = PixelColor::new(188, 120, 72);
pub const COLOR_CEILING_CHANGE: PixelColor = PixelColor::new(252, 252, 0);
pub const COLOR_FLUSH: PixelColor = PixelColor::new(128, 128, 128);
pub const COLOR_HIGHLIGHT: PixelColor = PixelColor::new(255, 255, 255);
pub const COLOR_THING: PixelColor = PixelColor::new(64, 160, 64);

pub fn class_color(class: LineClass) -> PixelColor {
    match class {
        LineClass::Hidden => COLOR_HIDDEN,
        LineClass::Solid => COLOR_SOLID,
        LineClass::FloorChange => COLOR_FLOOR_CHANGE,
        LineClass::CeilingChange => COLOR_CEILING_CHANGE,
        LineClass::Flush => COLOR_FLUSH,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    Mask,
    Alpha,
}

/// Compositing layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Background,
    Things,
    Grid,
    Geometry,
    Overlay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentLayer {
    kind: LayerKind,
    blend: BlendMode,
    alpha: f32,
    always_on_top: bool,
}

impl PresentLayer {
    pub fn new(kind: LayerKind, blend: BlendMode, alpha: f32) -> Self {
        Self {
            kind,
            blend,
            alpha,
            always_on_top: false,
        }
    }

    pub fn on_top(mut self) -> Self {
        self.always_on_top = true;
        self
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn always_on_top(&self) -> bool {
        self.always_on_top
    }
}

/// An ordered layer stack for the backend to composite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    layers: Vec<PresentLayer>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, layer: PresentLayer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[PresentLayer] {
        &self.layers
    }

    pub fn layer(&self, kind: LayerKind) -> Option<&PresentLayer> {
        self.layers.iter().find(|layer| layer.kind() == kind)
    }

    /// The reduced automap stack: no textured surfaces.
    pub fn automap(background_alpha: f32, inactive_things_alpha: f32) -> Self {
        let mut presentation = Self::new();
        presentation.add_layer(PresentLayer::new(
            LayerKind::Background,
            BlendMode::Mask,
            background_alpha,
        ));
        presentation.add_layer(PresentLayer::new(
            LayerKind::Things,
            BlendMode::Alpha,
            inactive_things_alpha,
        ));
        presentation.add_layer(PresentLayer::new(LayerKind::Grid, BlendMode::Mask, 1.0));
        presentation.add_layer(PresentLayer::new(LayerKind::Geometry, BlendMode::Alpha, 1.0).on_top());
        presentation.add_layer(PresentLayer::new(LayerKind::Overlay, BlendMode::Alpha, 1.0).on_top());
        presentation
    }
}

/// Plottable frame targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameLayer {
    Geometry,
    Things,
    Overlay,
}

/// The display backend driven by the inspection mode.
///
/// `start_frame` may refuse (backend not ready); plot calls are only valid
/// between an accepted `start_frame` and `finish`. `present` flips the
/// composited result onto the screen.
pub trait MapRenderer {
    fn set_presentation(&mut self, presentation: &Presentation);

    fn start_frame(&mut self, layer: FrameLayer, clear: bool) -> bool;

    fn plot_linedef(&mut self, start: Point2, end: Point2, color: PixelColor);

    fn plot_thing(&mut self, at: Point2, color: PixelColor);

    fn finish(&mut self);

    fn present(&mut self);

    /// Current view scale in screen units per map unit.
    fn scale(&self) -> f64;
}

/// How much of the display a highlight transition must repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawPlan {
    /// Recomposite everything; association indicators appear or disappear.
    Full,
    /// Undraw the previous decoration, draw the new one, leave the rest.
    Incremental,
}

/// Decides redraw granularity for a highlight transition.
///
/// Often we get away with undrawing the previous highlight and drawing the
/// new one; once associations are (or were) on screen the whole display must
/// be recomposited.
pub fn redraw_plan(previous_association: bool, next_association: bool) -> RedrawPlan {
    if previous_association || next_association {
        RedrawPlan::Full
    } else {
        RedrawPlan::Incremental
    }
}
