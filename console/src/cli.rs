use std::{
    io::{BufRead, Write},
    ops::ControlFlow,
};

use anyhow::{Context, bail};
use colored::Colorize;
use libgame::{
    Game, StopReason,
    board::{GameBoard, TileState},
};

use crate::State;

pub fn run_cli<R, W>(state: &mut State, input: R, mut out: W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line_res in input.lines() {
        let line = line_res.context("Couldn't read command")?;
        let args = line.split_whitespace();

        match handle_cmd(state, args, &mut out) {
            Ok(ControlFlow::Break(())) => break,
            Ok(ControlFlow::Continue(())) => writeln!(out, "{}", "OK".green())?,
            Err(e) => writeln!(out, "{} {e:#}", "!".red())?,
        }
    }

    Ok(())
}

fn handle_cmd<'a, I, W>(state: &mut State, mut args: I, out: &mut W) -> anyhow::Result<ControlFlow<()>>
where
    I: Iterator<Item = &'a str>,
    W: Write,
{
    match args.next().context("No command")? {
        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            for _ in 0..times {
                state.game.step();
            }

            write_status(&state.game, out)?;
        }

        "run" => {
            let budget = match args.next() {
                Some(budget) => budget.parse::<usize>()?,
                None => state.config.step_budget,
            };

            let reason = match state.game.run(budget) {
                StopReason::GenerationLimit => "generation limit reached",
                StopReason::Settled => "population settled",
                StopReason::StepBudget => "step budget used up",
            };

            writeln!(out, "{}", reason.yellow())?;
            write_status(&state.game, out)?;
        }

        "show" => {
            write!(out, "{}", state.game.current())?;
        }

        "status" => {
            write_status(&state.game, out)?;
        }

        "cell" => {
            let (row, col) = parse_position(&mut args)?;

            let tile = state
                .game
                .cell_state(row, col)
                .context("Position outside the grid")?;

            writeln!(out, "{}", if tile.is_alive() { "alive" } else { "dead" })?;
        }

        "set" => {
            let (row, col) = parse_position(&mut args)?;

            let tile = args
                .next()
                .context("missing state")?
                .parse::<char>()
                .ok()
                .and_then(TileState::from_digit)
                .context("state must be 0 or 1")?;

            if !state.game.set_cell(row, col, tile) {
                bail!("Position outside the grid");
            }
        }

        "clear" => {
            let (rows, cols) = state.game.dimensions();
            state.game.replace_current(GameBoard::new(rows, cols))?;
        }

        "random" => {
            let (rows, cols) = state.game.dimensions();

            let board = match args.next() {
                Some(alive_count) => {
                    let alive_count = alive_count.parse::<usize>()?;
                    GameBoard::new_random_population(rows, cols, alive_count, &mut state.rng)
                }
                None => GameBoard::new_random(rows, cols, &mut state.rng),
            };

            state.game.replace_current(board)?;
        }

        "load" => {
            let path = args.next().context("missing path")?;

            state.game = Game::load_with_limit(path, state.config.max_generations)?;
            write_status(&state.game, out)?;
        }

        "save" => {
            let path = args.next().map(str::to_owned).unwrap_or_else(|| {
                format!("life-{}.txt", chrono::Local::now().format("%Y%m%d-%H%M%S"))
            });

            state.game.save(&path)?;
            writeln!(out, "saved to {}", path.cyan())?;
        }

        "exit" => {
            return Ok(ControlFlow::Break(()));
        }

        _ => bail!("Unknown command"),
    }

    Ok(ControlFlow::Continue(()))
}

fn parse_position<'a, I>(args: &mut I) -> anyhow::Result<(usize, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let row = args.next().context("missing row")?.parse::<usize>()?;
    let col = args.next().context("missing col")?.parse::<usize>()?;

    Ok((row, col))
}

fn write_status<W>(game: &Game, out: &mut W) -> anyhow::Result<()>
where
    W: Write,
{
    let limit = game
        .max_generations()
        .map_or_else(|| "-".to_owned(), |limit| limit.to_string());

    writeln!(
        out,
        "generation {}/{} population {} changing {}{}",
        game.generation_count(),
        limit,
        game.population(),
        game.is_population_changing(),
        if game.has_reached_generation_limit() {
            " (limit reached)"
        } else {
            ""
        }
    )?;

    Ok(())
}
