use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

// To predict the duration of the next iteration based on the previous one.
// Assumes next iteration takes ~2x longer than the previous.
const NEXT_ITERATION_DURATION_FACTOR: u32 = 2;

/// Wall-clock budget for one move decision.
///
/// The clock is only read from `poll`, every `poll_interval` nodes, so the
/// overrun is bounded by the work between two polls.
pub struct SearchController {
    start_time: Instant,
    time_budget: Duration,
    max_depth: u8,
    poll_interval: u64,
    stop: Arc<AtomicBool>,
    last_iteration_duration: Option<Duration>,
    current_iteration_start: Option<Duration>,
}

impl SearchController {
    pub fn new(
        time_budget: Duration,
        max_depth: u8,
        poll_interval: u64,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            time_budget,
            max_depth: max_depth.max(1),
            poll_interval: poll_interval.max(1),
            stop,
            last_iteration_duration: None,
            current_iteration_start: None,
        }
    }

    pub fn should_continue_to_next_depth(&self, next_depth: u8) -> bool {
        if next_depth > self.max_depth || self.stop.load(Ordering::Relaxed) {
            return false;
        }

        // Always allow the first iteration so there is a completed move
        // even under an extreme budget.
        if next_depth <= 1 {
            return true;
        }

        let elapsed = self.elapsed();
        if elapsed >= self.time_budget {
            return false;
        }

        // Avoid starting an iteration that would certainly be discarded.
        if let Some(estimate) = self.estimate_next_iteration_duration() {
            if elapsed.saturating_add(estimate) > self.time_budget {
                return false;
            }
        }

        true
    }

    fn estimate_next_iteration_duration(&self) -> Option<Duration> {
        self.last_iteration_duration
            .filter(|d| !d.is_zero())
            .map(|d| d * NEXT_ITERATION_DURATION_FACTOR)
    }

    /// Returns the total elapsed time since search started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn on_iteration_start(&mut self) {
        self.current_iteration_start = Some(self.elapsed());
    }

    pub fn on_iteration_complete(&mut self) {
        if let Some(start) = self.current_iteration_start.take() {
            self.last_iteration_duration = Some(self.elapsed().saturating_sub(start));
        }
    }

    /// Called once per visited node. Raises the stop flag when the budget
    /// is spent; returns whether the search must unwind.
    #[inline(always)]
    pub fn poll(&self, nodes: u64) -> bool {
        if nodes % self.poll_interval == 0 && self.elapsed() >= self.time_budget {
            self.stop.store(true, Ordering::Relaxed);
        }
        self.stop.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(budget_ms: u64, max_depth: u8) -> SearchController {
        SearchController::new(
            Duration::from_millis(budget_ms),
            max_depth,
            256,
            Arc::new(AtomicBool::new(false)),
        )
    }

    #[test]
    fn test_first_depth_always_runs() {
        let controller = controller(0, 8);
        assert!(controller.should_continue_to_next_depth(1));
        assert!(!controller.should_continue_to_next_depth(2));
    }

    #[test]
    fn test_max_depth_respected() {
        let controller = controller(60_000, 3);
        assert!(controller.should_continue_to_next_depth(3));
        assert!(!controller.should_continue_to_next_depth(4));
    }

    #[test]
    fn test_poll_only_reads_clock_on_interval() {
        let controller = controller(0, 8);
        assert!(!controller.poll(255));
        assert!(controller.poll(256));
        // The flag stays raised once set.
        assert!(controller.poll(257));
    }

    #[test]
    fn test_external_stop() {
        let stop = Arc::new(AtomicBool::new(false));
        let controller =
            SearchController::new(Duration::from_secs(60), 8, 256, Arc::clone(&stop));
        assert!(!controller.poll(1));
        stop.store(true, Ordering::Relaxed);
        assert!(controller.poll(1));
        assert!(!controller.should_continue_to_next_depth(1));
    }

    #[test]
    fn test_iteration_estimate_blocks_next_depth() {
        let mut controller = controller(60_000, 64);
        controller.on_iteration_start();
        controller.on_iteration_complete();
        assert!(controller.should_continue_to_next_depth(2));

        controller.last_iteration_duration = Some(Duration::from_secs(40));
        assert!(!controller.should_continue_to_next_depth(3));
    }
}
