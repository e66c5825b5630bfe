// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::StoreError;

const DEFAULT_HIGHLIGHT_RADIUS: f64 = 20.0;
const DEFAULT_BACKGROUND_ALPHA: f32 = 1.0;
const DEFAULT_INACTIVE_THINGS_ALPHA: f32 = 0.5;

/// Tool settings; every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    highlight_radius: f64,
    background_alpha: f32,
    inactive_things_alpha: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            highlight_radius: DEFAULT_HIGHLIGHT_RADIUS,
            background_alpha: DEFAULT_BACKGROUND_ALPHA,
            inactive_things_alpha: DEFAULT_INACTIVE_THINGS_ALPHA,
        }
    }
}

impl Settings {
    /// Highlight hit radius in screen pixels.
    pub fn highlight_radius(&self) -> f64 {
        self.highlight_radius
    }

    pub fn background_alpha(&self) -> f32 {
        self.background_alpha
    }

    pub fn inactive_things_alpha(&self) -> f32 {
        self.inactive_things_alpha
    }
}

/// Loads settings; a missing file is not an error, it yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(err) => return Err(StoreError::Io(err)),
    };
    serde_json::from_str(&raw).map_err(StoreError::Json)
}
