use std::time::Duration;

use criterion::{Criterion, Throughput};

// Field evaluation and session stepping are cheap per iteration, so short
// measurement windows with more samples give tighter estimates than the
// criterion defaults.
pub const SAMPLE_SIZE: usize = 50;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(1);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

/// Throughput for workloads shaped as an outer loop over an inner unit of
/// work: query×pointer pairs for field evaluation, agent×frame ticks for
/// session stepping.
pub fn pairs_throughput(outer: usize, inner: usize) -> Throughput {
    Throughput::Elements((outer * inner).max(1) as u64)
}
