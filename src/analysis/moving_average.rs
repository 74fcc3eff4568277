use std::collections::VecDeque;

use crate::error::{AnalysisError, Result};

/// One sample in a step-function timeline. `value` becomes the
/// per-unit-time value at `time` and holds until the next event.
#[derive(Debug, Clone, Copy)]
struct Event {
    time: u64,
    value: f64,
}

/// Time-weighted moving average over a step-function event timeline.
///
/// Adding `(0, 1)` then `(3, 2)` describes the timeline
///
/// ```text
/// time  0 1 2 3
/// value 1 1 1 2
/// ```
///
/// so the average after the second event is 2 for window size 1, 3/2 for
/// size 2, 4/3 for size 3, and 5/4 for size 4.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    window_size: u64,
    events: VecDeque<Event>,
    /// Most recent event evicted from the deque. Its value still covers
    /// the span from its (clipped) time up to the oldest retained event.
    last_evicted: Option<Event>,
    sum: f64,
}

impl MovingAverage {
    /// Creates a moving average over the trailing `window_size` time
    /// units.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ZeroWindow` if `window_size` is zero.
    pub fn new(window_size: u64) -> Result<Self> {
        if window_size == 0 {
            return Err(AnalysisError::ZeroWindow.into());
        }
        Ok(Self {
            window_size,
            events: VecDeque::new(),
            last_evicted: None,
            sum: 0.0,
        })
    }

    /// Records `value` at `time` and returns the average per-unit-time
    /// value over the window ending at `time`.
    ///
    /// While the timeline is still shorter than the window, the average
    /// covers only the span since the first event.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::NonMonotonicTime` if `time` does not come
    /// strictly after the previous event. A rejected event leaves the
    /// timeline unchanged.
    #[allow(clippy::cast_precision_loss)]
    pub fn add_event(&mut self, time: u64, value: f64) -> Result<f64> {
        if let Some(last) = self.events.back().copied() {
            if time <= last.time {
                return Err(AnalysisError::NonMonotonicTime {
                    time,
                    last: last.time,
                }
                .into());
            }
            // The previous value held for every unit strictly between
            // the two events; the event itself was credited on arrival.
            self.sum += last.value * ((time - last.time - 1) as f64);
        }
        self.events.push_back(Event { time, value });
        self.sum += value;

        // window_size >= 1, so the subtraction cannot underflow.
        let window_start = time.saturating_sub(self.window_size - 1);

        // Evict events that fell out of the window. The newest event is
        // never evicted: its time is at least window_start.
        while let Some(front) = self.events.front().copied() {
            if front.time >= window_start {
                break;
            }
            if let Some(evicted) = self.last_evicted {
                self.sum -= evicted.value * ((front.time - evicted.time) as f64);
            }
            self.last_evicted = Some(front);
            self.events.pop_front();
        }

        // Clip the remembered event to the window start, debiting the
        // portion of its span that slid out of the window.
        if let Some(evicted) = &mut self.last_evicted {
            if evicted.time < window_start {
                self.sum -= evicted.value * ((window_start - evicted.time) as f64);
                evicted.time = window_start;
            }
        }

        // The event pushed above survives eviction, so the deque is
        // never empty here.
        let oldest = self.events[0].time;
        let covered_from = match self.last_evicted {
            Some(evicted) => evicted.time.min(oldest),
            None => oldest,
        };
        Ok(self.sum / ((time - covered_from + 1) as f64))
    }

    /// Returns the configured window size.
    #[must_use]
    pub fn window_size(&self) -> u64 {
        self.window_size
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_timeline_window_five() {
        // time:    0    1    2    3    4    5    6    7    8    9   10
        // value:   1    1    1    2    2    3    3    3    4    5    6
        // average: 1            5/4       9/5           15/5 18/5 21/5
        let mut ma = MovingAverage::new(5).unwrap();
        assert_relative_eq!(ma.add_event(0, 1.0).unwrap(), 1.0);
        assert_relative_eq!(ma.add_event(3, 2.0).unwrap(), 5.0 / 4.0);
        assert_relative_eq!(ma.add_event(5, 3.0).unwrap(), 9.0 / 5.0);
        assert_relative_eq!(ma.add_event(8, 4.0).unwrap(), 15.0 / 5.0);
        assert_relative_eq!(ma.add_event(9, 5.0).unwrap(), 18.0 / 5.0);
        assert_relative_eq!(ma.add_event(10, 6.0).unwrap(), 21.0 / 5.0);
    }

    #[test]
    fn window_sizes_on_shared_timeline() {
        // Timeline 1 1 1 2 seen through shrinking windows.
        for (window, expected) in [(1, 2.0), (2, 3.0 / 2.0), (3, 4.0 / 3.0), (4, 5.0 / 4.0)] {
            let mut ma = MovingAverage::new(window).unwrap();
            ma.add_event(0, 1.0).unwrap();
            let avg = ma.add_event(3, 2.0).unwrap();
            assert_relative_eq!(avg, expected);
        }
    }

    #[test]
    fn first_event_is_its_own_average() {
        let mut at_zero = MovingAverage::new(5).unwrap();
        assert_relative_eq!(at_zero.add_event(0, 1.5).unwrap(), 1.5);

        let mut late_start = MovingAverage::new(5).unwrap();
        assert_relative_eq!(late_start.add_event(7, 4.0).unwrap(), 4.0);
    }

    #[test]
    fn slides_window_by_single_units() {
        let mut ma = MovingAverage::new(2).unwrap();
        ma.add_event(0, 1.0).unwrap();
        assert_relative_eq!(ma.add_event(1, 2.0).unwrap(), 3.0 / 2.0);
        assert_relative_eq!(ma.add_event(2, 3.0).unwrap(), 5.0 / 2.0);
        assert_relative_eq!(ma.add_event(3, 4.0).unwrap(), 7.0 / 2.0);
    }

    #[test]
    fn window_one_keeps_only_newest_event() {
        // Every call evicts all prior events; the newest must survive
        // and carry the whole average on its own.
        let mut ma = MovingAverage::new(1).unwrap();
        assert_relative_eq!(ma.add_event(0, 3.0).unwrap(), 3.0);
        assert_relative_eq!(ma.add_event(10, 7.0).unwrap(), 7.0);
        assert_relative_eq!(ma.add_event(11, 9.0).unwrap(), 9.0);
    }

    #[test]
    fn value_holds_across_long_gaps() {
        // Window [96, 100]: four held units of 1 plus the new event.
        let mut ma = MovingAverage::new(5).unwrap();
        ma.add_event(0, 1.0).unwrap();
        assert_relative_eq!(ma.add_event(100, 2.0).unwrap(), 6.0 / 5.0);
    }

    #[test]
    fn zero_window_rejected() {
        assert!(MovingAverage::new(0).is_err());
    }

    #[test]
    fn non_monotonic_time_rejected() {
        let mut ma = MovingAverage::new(3).unwrap();
        ma.add_event(5, 1.0).unwrap();
        assert!(ma.add_event(5, 2.0).is_err());
        assert!(ma.add_event(4, 2.0).is_err());
        // Rejected events must leave the timeline intact.
        assert_relative_eq!(ma.add_event(6, 1.0).unwrap(), 1.0);
    }

    #[test]
    fn configured_window_reported() {
        let ma = MovingAverage::new(7).unwrap();
        assert_eq!(ma.window_size(), 7);
    }
}
