//! Terminal shell over a mounted scoreboard
//!
//! Prints the committed tree, numbers its triggers, and fires them
//! from input lines. This is a demo surface over the core; nothing in
//! the state-flow contract depends on it.

use std::io::{self, BufRead, Write};

use trellis::prelude::*;

// ANSI color codes for terminal output
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Read commands from `input` until `q` or end of input. Every
/// printed trigger gets a number; entering the number presses it.
pub fn run<R, W>(
    runtime: &mut Runtime,
    input: R,
    mut output: W,
    interactive: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        let triggers = paint(&runtime.rendered(), &mut output)?;
        if interactive {
            write!(output, "{DIM}press a number, or q to quit>{RESET} ")?;
            output.flush()?;
        }
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let command = line.trim();
        match command {
            "" => continue,
            "q" | "quit" => break,
            _ => match command.parse::<usize>() {
                Ok(index) if index < triggers.len() => {
                    triggers[index].emit(());
                    runtime.flush();
                }
                _ => writeln!(output, "unknown command: {command}")?,
            },
        }
    }
    Ok(())
}

/// Write the tree and return its triggers in display order.
fn paint<W: Write>(ui: &Rendered, output: &mut W) -> io::Result<Vec<Callback<()>>> {
    let mut triggers = Vec::new();
    walk(ui, 0, output, &mut triggers)?;
    Ok(triggers)
}

fn walk<W: Write>(
    node: &Rendered,
    indent: usize,
    output: &mut W,
    triggers: &mut Vec<Callback<()>>,
) -> io::Result<()> {
    let pad = "  ".repeat(indent);
    match node {
        Rendered::Text(content) => writeln!(output, "{pad}{content}"),
        Rendered::Trigger { label, on_press } => {
            let index = triggers.len();
            triggers.push(on_press.clone());
            writeln!(output, "{pad}{DIM}({index}){RESET} [{label}]")
        }
        Rendered::Section { name, children } => {
            writeln!(output, "{pad}{BOLD}{name}{RESET}")?;
            for child in children {
                walk(child, indent + 1, output, triggers)?;
            }
            Ok(())
        }
    }
}
