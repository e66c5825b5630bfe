// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

use crate::render::PixelColor;

pub(crate) const GRID_COLOR: Color = Color::Rgb(44, 44, 44);
pub(crate) const PANEL_BORDER_COLOR: Color = Color::DarkGray;
pub(crate) const FOOTER_LABEL_COLOR: Color = Color::Gray;
pub(crate) const FOOTER_KEY_COLOR: Color = Color::Cyan;
pub(crate) const FOOTER_BRAND_COLOR: Color = Color::White;
pub(crate) const TOAST_COLOR: Color = Color::LightRed;

/// Converts a plot color to a terminal color, dimmed by the layer alpha.
pub(crate) fn terminal_color(color: PixelColor, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    let dim = |channel: u8| (f32::from(channel) * alpha).round() as u8;
    Color::Rgb(dim(color.r), dim(color.g), dim(color.b))
}

pub(crate) fn panel_border_style() -> Style {
    Style::default().fg(PANEL_BORDER_COLOR)
}

pub(crate) fn info_label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(crate) fn info_value_style() -> Style {
    Style::default().fg(Color::White)
}

pub(crate) fn policy_badge_style(inspect_all: bool) -> Style {
    if inspect_all {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
