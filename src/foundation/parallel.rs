use rayon::prelude::*;

/// Workloads below this many items run their stage on a single worker.
pub(crate) const PARALLEL_CUTOFF: i32 = 1 << 6;

/// Runs `f` once per worker and returns the per-worker results in worker
/// order.
///
/// Each worker receives its index and the total worker count and is expected
/// to cover a disjoint share of `work_count` items (striding or contiguous
/// ranges, caller's choice). The worker count is bounded by the rayon pool
/// size and never exceeds `work_count`; reductions over the returned partials
/// are the caller's job and run sequentially.
pub fn parallel_for<R, F>(work_count: usize, f: F) -> Vec<R>
where
    R: Send,
    F: Fn(usize, usize) -> R + Sync,
{
    let workers = rayon::current_num_threads().min(work_count.max(1));
    if workers <= 1 {
        return vec![f(0, 1)];
    }
    (0..workers)
        .into_par_iter()
        .map(|i| f(i, workers))
        .collect()
}

/// Conditional variant of [`parallel_for`]: runs `f` inline on a single
/// worker when `parallel` is false (workload judged too small to be worth
/// spawning for).
pub fn parallel_for_if<F>(parallel: bool, f: F)
where
    F: Fn(usize, usize) + Sync,
{
    if parallel {
        let workers = rayon::current_num_threads().max(1);
        (0..workers).into_par_iter().for_each(|i| f(i, workers));
    } else {
        f(0, 1);
    }
}

/// Runs a set of independent tasks, concurrently when `parallel` is true.
///
/// Tasks must write to disjoint data; the call is a full barrier either way.
pub(crate) fn run_tasks<'a>(parallel: bool, tasks: Vec<Box<dyn FnOnce() + Send + 'a>>) {
    if parallel {
        rayon::scope(|s| {
            for task in tasks {
                s.spawn(move |_| task());
            }
        });
    } else {
        for task in tasks {
            task();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/parallel.rs"]
mod tests;
