// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Oread-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Oread and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

pub fn criterion() -> Criterion {
    let frequency = env_usize("PROFILE_FREQ", 100).clamp(1, 1000) as i32;
    let sample_size = env_usize("BENCH_SAMPLE_SIZE", 60).clamp(10, 200);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
