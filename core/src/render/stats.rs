//! Rendering statistics.
//!
//! The pipeline's observability layer: every render call returns a `Stats`
//! delta that callers accumulate and print, typically once per run.

use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign};
use core::time::Duration;
use std::time::Instant;

//
// Types
//

/// Accumulated rendering statistics and performance data.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Time spent rendering.
    pub time: Duration,
    /// Number of frames rendered.
    pub frames: f32,
    /// Number of render calls issued.
    pub calls: f32,
    /// Polygons input to and output by the pipeline. The two differ by
    /// the number of culled faces.
    pub polys: Throughput,

    start: Option<Instant>,
}

/// A count of items entering and leaving a pipeline stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    /// Count of items submitted.
    pub i: usize,
    /// Count of items output.
    pub o: usize,
}

//
// Impls
//

impl Stats {
    /// Creates a new zeroed `Stats` instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `Stats` instance that records the time of its creation.
    ///
    /// Call [`finish`][Self::finish] to write the elapsed time to
    /// `self.time`.
    pub fn start() -> Self {
        Self { start: Some(Instant::now()), ..Self::default() }
    }

    /// Stops the timer, records the elapsed time to `self.time`, and
    /// returns `self`. No-op if the timer was not running.
    pub fn finish(self) -> Self {
        Self {
            time: self.start.map_or(self.time, |st| st.elapsed()),
            start: None,
            ..self
        }
    }

    /// Returns the average throughput per frame.
    pub fn per_frame(&self) -> Self {
        let frames = self.frames.max(1.0);
        Self {
            time: self.time / frames as u32,
            frames: 1.0,
            calls: self.calls / frames,
            polys: self.polys.div(frames),
            start: None,
        }
    }

    /// Returns the average number of frames per second.
    pub fn frames_per_sec(&self) -> f32 {
        if self.time.is_zero() {
            return 0.0;
        }
        self.frames / self.time.as_secs_f32()
    }
}

impl Throughput {
    fn div(self, by: f32) -> Self {
        Self {
            i: (self.i as f32 / by) as usize,
            o: (self.o as f32 / by) as usize,
        }
    }
}

impl Add for Stats {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Self) {
        self.time += rhs.time;
        self.frames += rhs.frames;
        self.calls += rhs.calls;
        self.polys.i += rhs.polys.i;
        self.polys.o += rhs.polys.o;
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { time, frames, calls, polys, .. } = self;
        let per = self.per_frame();
        writeln!(
            f,
            "frames: {frames}  calls: {calls}  time: {time:.1?}  \
             fps: {:.1}",
            self.frames_per_sec()
        )?;
        write!(
            f,
            "polys in/out: {}/{}  per frame: {}/{}",
            polys.i, polys.o, per.polys.i, per.polys.o
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Stats {
        Stats {
            time: Duration::from_secs(2),
            frames: 100.0,
            calls: 200.0,
            polys: Throughput { i: 1200, o: 1000 },
            start: None,
        }
    }

    #[test]
    fn accumulation() {
        let total = sample() + sample();
        assert_eq!(total.frames, 200.0);
        assert_eq!(total.calls, 400.0);
        assert_eq!(total.polys, Throughput { i: 2400, o: 2000 });
        assert_eq!(total.time, Duration::from_secs(4));
    }

    #[test]
    fn per_frame_averages() {
        let per = sample().per_frame();
        assert_eq!(per.calls, 2.0);
        assert_eq!(per.polys, Throughput { i: 12, o: 10 });
        assert_eq!(per.time, Duration::from_millis(20));
    }

    #[test]
    fn frames_per_second() {
        assert_eq!(sample().frames_per_sec(), 50.0);
        assert_eq!(Stats::new().frames_per_sec(), 0.0);
    }

    #[test]
    fn finish_records_elapsed_time() {
        let stats = Stats::start().finish();
        assert!(stats.start.is_none());
    }
}
