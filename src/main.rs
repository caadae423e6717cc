use std::thread;

use anyhow::Context;
use gridlife::{GameOfLife, pattern};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod console;
mod options;
mod stats;

use stats::Census;

fn args_to_game(args: &options::Args) -> anyhow::Result<GameOfLife> {
    if let Some(file_name) = args.input_file() {
        return pattern::load(&file_name).with_context(|| format!("loading pattern {file_name}"));
    }

    // setup the live cells based on args
    let (rows, columns) = args.grid_size()?;
    let mut game = GameOfLife::new(rows, columns)?;
    args.fill_mode()?.apply(&mut game, args.percent()?)?;
    Ok(game)
}

fn main() -> anyhow::Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(match (args.verbose(), args.console()) {
            (true, _) => Level::DEBUG,
            // the console owns the terminal, keep stderr quiet
            (false, true) => Level::WARN,
            (false, false) => Level::INFO,
        })
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut game = args_to_game(&args)?;
    info!(
        rows = game.rows(),
        columns = game.columns(),
        living = game.living_count(),
        "starting simulation"
    );

    // setup the console and reporting metrics
    let mut console = if args.console() {
        Some(console::ConsoleRender::new(args.display_mode()?)?)
    } else {
        None
    };
    let sleep = args.sleep()?;
    let stats_file = args.stats_file();

    let mut census = Census::new(&game, stats_file.is_some());
    'generations: for _ in 0..args.generations()? {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events(&game)? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    console::ConsoleCommand::Handled => {}
                }
            }
            console.render(&game)?;
        }

        // summarize every 500ms, the census logs it as well
        if census.summary_due() {
            let summary = census.summarize();
            if let Some(ref mut console) = console {
                console.set_report(summary);
            }
        }

        game.next_generation()?;
        census.observe(&game);
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);
    info!(
        generation = game.generation(),
        living = game.living_count(),
        "simulation finished"
    );

    if let Some(file_name) = args.output_file() {
        pattern::save(&game, &file_name).with_context(|| format!("writing snapshot {file_name}"))?;
    }
    if let Some(file_name) = stats_file {
        census
            .save(&file_name)
            .with_context(|| format!("writing stats {file_name}"))?;
    }

    Ok(())
}
