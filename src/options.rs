use std::time::Duration;

use anyhow::{Context, anyhow};
use gridlife::{DisplayMode, GameOfLife};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("v", "verbose", "enable debug logging");
        opts.optopt("o", "output", "write a snapshot of the last generation", "FILE");
        opts.optopt("i", "input", "load the starting pattern", "FILE");
        opts.optopt("w", "width", "set grid width (columns)", "WIDTH");
        opts.optopt("h", "height", "set grid height (rows)", "HEIGHT");
        opts.optopt("f", "fill", "random, alternating, all or empty", "TYPE");
        opts.optopt("p", "percent", "live cell percentage for random fill", "PERCENT");
        opts.optopt("d", "display", "basic, block or dots", "MODE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");

        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: gridlife [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn get<T>(&self, name: &str) -> anyhow::Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.matches
            .opt_get(name)
            .with_context(|| format!("invalid value for --{name}"))
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn verbose(&self) -> bool {
        self.matches.opt_present("verbose")
    }

    pub fn generations(&self) -> anyhow::Result<u64> {
        // kinda hacky way of saying "infinity"
        Ok(self.get("gens")?.unwrap_or(u64::MAX))
    }
    pub fn sleep(&self) -> anyhow::Result<Option<Duration>> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        })
    }

    /// `(rows, columns)`
    pub fn grid_size(&self) -> anyhow::Result<(usize, usize)> {
        let default = if self.console() {
            let (cols, rows) = crossterm::terminal::size()?;
            // leave the last line for the report footer
            ((rows as usize).saturating_sub(1), cols as usize)
        } else {
            (500, 500)
        };

        Ok((
            self.get("height")?.unwrap_or(default.0),
            self.get("width")?.unwrap_or(default.1),
        ))
    }
    pub fn fill_mode(&self) -> anyhow::Result<FillMode> {
        let mode_str = self.matches.opt_str("fill");
        let mode_str = mode_str.as_deref().unwrap_or("random");
        FillMode::new(mode_str).ok_or_else(|| anyhow!("invalid fill mode `{mode_str}`"))
    }
    pub fn percent(&self) -> anyhow::Result<u8> {
        Ok(self.get("percent")?.unwrap_or(50))
    }
    pub fn display_mode(&self) -> anyhow::Result<DisplayMode> {
        Ok(self.get("display")?.unwrap_or_default())
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }

    pub fn stats_file(&self) -> Option<String> {
        self.matches.opt_str("stats")
    }
}

#[derive(Debug, Clone, Copy)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FillMode {
    fn new<S: AsRef<str>>(s: S) -> Option<Self> {
        match s.as_ref() {
            "random" => Some(Self::Random),
            "alternating" => Some(Self::Alternating),
            "all" => Some(Self::All),
            "empty" => Some(Self::Empty),
            _ => None,
        }
    }

    /// Seeds a freshly created grid
    pub fn apply(self, game: &mut GameOfLife, percent: u8) -> gridlife::Result<()> {
        let fill: fn(usize, usize) -> bool = match self {
            Self::Random => return game.randomize(percent),
            Self::Empty => return Ok(()),
            Self::All => |_, _| true,
            Self::Alternating => |row, column| (row + column) % 2 == 0,
        };
        for row in 0..game.rows() {
            for column in 0..game.columns() {
                if fill(row, column) {
                    game.set_cell(row, column, true)?;
                }
            }
        }
        Ok(())
    }
}
