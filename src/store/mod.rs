// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for maps and settings on disk.
//!
//! Both use plain JSON files; maps are referentially validated while being
//! adopted into the model.

use std::fmt;
use std::io;

pub mod map_file;
pub mod settings;

pub use map_file::{load_map, save_map, MapFileError};
pub use settings::{load_settings, Settings};

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Json(serde_json::Error),
    Map(MapFileError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Json(err) => write!(f, "malformed JSON: {err}"),
            Self::Map(err) => write!(f, "invalid map: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Map(err) => Some(err),
        }
    }
}
