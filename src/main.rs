use std::env;
use std::io::{self, BufRead, Write};

use minesweeper_cli::data::Board;
use minesweeper_cli::input::{Action, Turn};
use minesweeper_cli::render::format_board;

const DEFAULT_BOARD_SIZE: usize = 9;

fn board_size() -> usize {
    env::var("MINESWEEPER_BOARD_SIZE")
        .ok()
        .and_then(|value| value.parse().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(DEFAULT_BOARD_SIZE)
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{text}");
    io::stdout().flush()
}

fn read_mine_count(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    max: usize,
) -> io::Result<Option<usize>> {
    println!("How many mines do you want on the field?");
    loop {
        prompt(&format!("The number of mines should be between 1 and {max}. > "))?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        match line?.trim().parse::<usize>() {
            Ok(count) if (1..=max).contains(&count) => return Ok(Some(count)),
            _ => continue,
        }
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let n = board_size();
    let mut board = Board::new(n);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let Some(count) = read_mine_count(&mut lines, n * n)? else {
        return Ok(());
    };
    board.set_mines(count);
    print!("{}", format_board(&board, false));

    let mut first_command = true;
    while !board.user_win() && !board.user_lose() {
        prompt("Set/unset mines marks or claim a cell as free. > ")?;
        if first_command {
            prompt("\nExamples:\n3 4 mine\n9 2 free\nLet's start! > ")?;
            first_command = false;
        }

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let turn: Turn = match line?.parse() {
            Ok(turn) => turn,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if !(1..=n).contains(&turn.x) || !(1..=n).contains(&turn.y) {
            println!("Each coordinate should be between 1 and {n}.");
            continue;
        }

        // input is column, row; the board takes row, column
        let (i, j) = (turn.y, turn.x);
        match turn.action {
            Action::Mark => {
                board.mark(i, j);
                if !board.user_win() {
                    print!("{}", format_board(&board, false));
                }
            }
            Action::Free => {
                if board.has_explored(i, j) {
                    println!("Position ({}, {}) has already been explored.", turn.x, turn.y);
                    continue;
                }
                board.explore(i, j);
                if !board.user_lose() {
                    print!("{}", format_board(&board, false));
                }
            }
        }
    }

    if board.user_win() {
        print!("{}", format_board(&board, false));
        println!("Congratulations! You found all mines!");
    } else {
        print!("{}", format_board(&board, true));
        println!("You stepped on a mine and failed!");
    }

    Ok(())
}
