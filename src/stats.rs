use std::{
    io::{self, Write},
    path::Path,
    time::{Duration, Instant},
};

use gridlife::GameOfLife;
use tracing::info;

const SUMMARY_EVERY: Duration = Duration::from_millis(500);

/// Population of one generation and how it moved since the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub generation: u64,
    pub living: usize,
    pub change: isize,
}

/// Follows the live-cell count across generations
///
/// Keeps every [`Sample`] only when a history file was asked for.
pub struct Census {
    last: Sample,
    history: Option<Vec<Sample>>,
    since_summary: u64,
    summarized_at: Instant,
}

impl Census {
    pub fn new(game: &GameOfLife, keep_history: bool) -> Self {
        let first = Sample {
            generation: game.generation(),
            living: game.living_count(),
            change: 0,
        };
        Self {
            last: first,
            history: keep_history.then(|| vec![first]),
            since_summary: 0,
            summarized_at: Instant::now(),
        }
    }

    pub fn observe(&mut self, game: &GameOfLife) -> Sample {
        let living = game.living_count();
        let sample = Sample {
            generation: game.generation(),
            living,
            change: living as isize - self.last.living as isize,
        };
        if let Some(history) = &mut self.history {
            history.push(sample);
        }
        self.last = sample;
        self.since_summary += 1;
        sample
    }

    pub fn summary_due(&self) -> bool {
        self.summarized_at.elapsed() >= SUMMARY_EVERY
    }

    /// One-line summary of the latest generation; also logged
    pub fn summarize(&mut self) -> String {
        let elapsed = self.summarized_at.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.since_summary as f64 / elapsed
        } else {
            0.0
        };
        self.summarized_at = Instant::now();
        self.since_summary = 0;

        let Sample {
            generation,
            living,
            change,
        } = self.last;
        info!(generation, living, change, rate, "census");
        format!("gen {generation} living {living} ({change:+}) {rate:.1} gen/s")
    }

    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"generation,living,change\n")?;
        for sample in self.history.iter().flatten() {
            writeln!(out, "{},{},{}", sample.generation, sample.living, sample.change)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }
}
