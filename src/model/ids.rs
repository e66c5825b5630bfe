// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::marker::PhantomData;

/// A typed index into one of the map's entity tables.
///
/// Indices are dense `u32` handles into the owning [`Map`](super::Map); they
/// are non-owning and stay stable for the lifetime of an editing session
/// (disposed entities leave tombstones behind rather than shifting indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Idx<T> {
    value: u32,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Idx<T> {
    pub fn new(value: u32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn get(self) -> u32 {
        self.value
    }

    pub(crate) fn as_usize(self) -> usize {
        self.value as usize
    }
}

impl<T> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Idx<T>> for u32 {
    fn from(idx: Idx<T>) -> Self {
        idx.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexIdTag {}
pub type VertexId = Idx<VertexIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectorIdTag {}
pub type SectorId = Idx<SectorIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SidedefIdTag {}
pub type SidedefId = Idx<SidedefIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinedefIdTag {}
pub type LinedefId = Idx<LinedefIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThingIdTag {}
pub type ThingId = Idx<ThingIdTag>;
