use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

use tracing::info;

use crate::{DisplayMode, Error, GameOfLife, Result};

pub trait GridCodec {
    fn encode(&self, game: &GameOfLife) -> String;
    fn decode(&self, value: &str) -> Result<GameOfLife>;
}

/// Line-per-row, character-per-cell text
///
/// Always written in [`DisplayMode::Basic`]. When reading, the live marker
/// is the only significant character and anything else is a dead cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;
impl PlainText {
    const MODE: DisplayMode = DisplayMode::Basic;
}

impl GridCodec for PlainText {
    fn encode(&self, game: &GameOfLife) -> String {
        game.view(Self::MODE).to_string()
    }

    fn decode(&self, value: &str) -> Result<GameOfLife> {
        let mut lines: Vec<&str> = value.lines().collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let Some(first) = lines.first() else {
            return Err(Error::EmptyPattern);
        };

        // validate every row before building anything
        let columns = first.chars().count();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(Error::RaggedRow {
                    row,
                    expected: columns,
                    found,
                });
            }
        }

        let mut game = GameOfLife::new(lines.len(), columns)?;
        for (row, line) in lines.iter().enumerate() {
            for (column, c) in line.chars().enumerate() {
                if c == Self::MODE.live_char() {
                    game.set_cell(row, column, true)?;
                }
            }
        }
        Ok(game)
    }
}

/// Reads a plain text pattern from `reader`
pub fn read_from<R: Read>(mut reader: R) -> Result<GameOfLife> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    PlainText.decode(&text)
}

/// Writes a plain text snapshot of the current generation to `writer`
pub fn write_to<W: Write>(game: &GameOfLife, mut writer: W) -> Result<()> {
    writer.write_all(PlainText.encode(game).as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<GameOfLife> {
    let path = path.as_ref();
    let game = read_from(fs::File::open(path)?)?;
    info!(
        path = %path.display(),
        rows = game.rows(),
        columns = game.columns(),
        living = game.living_count(),
        "loaded pattern"
    );
    Ok(game)
}

pub fn save<P: AsRef<Path>>(game: &GameOfLife, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = fs::File::create(path)?;
    write_to(game, std::io::BufWriter::new(file))?;
    info!(
        path = %path.display(),
        generation = game.generation(),
        "saved snapshot"
    );
    Ok(())
}
