use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use gridlife::{DisplayMode, GameOfLife, Pos};
use std::io::{self, Write};

pub enum ConsoleCommand {
    Exit,
    Handled,
}

pub struct ConsoleRender {
    tl: Pos,
    mode: DisplayMode,
    report: String,
}
impl ConsoleRender {
    pub fn new(mode: DisplayMode) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self {
            tl: Pos::default(),
            mode,
            report: String::new(),
        })
    }

    pub fn render(&self, game: &GameOfLife) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // the last terminal line holds the report
        let grid_rows = rows.saturating_sub(1);
        let view = game
            .view(self.mode)
            .window(self.tl, grid_rows as usize, cols as usize);

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for (i, line) in view.lines().iter().enumerate() {
            queue!(stdout, cursor::MoveTo(0, i as u16))?;
            stdout.write_all(line.trim_end_matches('\n').as_bytes())?;
        }

        // write footer
        queue!(stdout, cursor::MoveTo(0, grid_rows))?;
        stdout.write_all(self.report.as_bytes())?;

        stdout.flush()
    }

    /// Handles pending key presses; scrolling stays inside `game`
    pub fn poll_events(&mut self, game: &GameOfLife) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            // arrows to move grid
            event::Event::Key(KeyEvent { code, .. }) => {
                self.tl = scroll(self.tl, code, game.rows(), game.columns());
            }
            _ => {}
        }
        outp
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
/// Moves the view's top-left corner one cell, keeping it on the grid
fn scroll(tl: Pos, code: KeyCode, rows: usize, columns: usize) -> Pos {
    let mut tl = tl;
    match code {
        KeyCode::Up => tl.row = tl.row.saturating_sub(1),
        KeyCode::Down => tl.row = (tl.row + 1).min(rows.saturating_sub(1)),
        KeyCode::Left => tl.column = tl.column.saturating_sub(1),
        KeyCode::Right => tl.column = (tl.column + 1).min(columns.saturating_sub(1)),
        _ => {}
    }
    tl
}

impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
