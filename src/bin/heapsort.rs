// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reads a count and that many integers, then prints them in ascending order.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, LevelFilter};
use min_heap::MinHeap;

#[derive(Parser)]
#[command(version, about = "Sort integers read from stdin with a binary min-heap")]
struct Cli {
    /// Do not print prompts
    #[arg(short, long)]
    quiet: bool,

    /// Log heap statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Whitespace separated tokens pulled from a line-oriented reader, one line at a time.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens { reader, pending: VecDeque::new() }
    }

    fn next_i32(&mut self, what: &str) -> anyhow::Result<i32> {
        while self.pending.is_empty() {
            let mut line = String::new();
            let read = self.reader.read_line(&mut line).context("failed to read stdin")?;
            if read == 0 {
                bail!("input ended before {} was entered", what);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
        let token = self.pending.pop_front().unwrap_or_default();
        token
            .parse()
            .with_context(|| format!("'{}' is not a valid integer for {}", token, what))
    }
}

fn prompt(out: &mut impl Write, quiet: bool, text: &str) -> io::Result<()> {
    if !quiet {
        write!(out, "{}\n>> ", text)?;
        out.flush()?;
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    prompt(&mut out, cli.quiet, "Enter amount of elements in an array:")?;
    let amount = tokens.next_i32("the amount of elements")?;
    if amount <= 0 {
        writeln!(out, "Error: entered value must be positive")?;
        return Ok(());
    }

    prompt(&mut out, cli.quiet, "Enter values in any order:")?;
    let mut values = Vec::new();
    for i in 0..amount {
        values.push(tokens.next_i32(&format!("value #{}", i + 1))?);
    }

    let mut heap = MinHeap::from_bounds(&values, 0, values.len())?;
    debug!("loaded {} values, heap capacity {}", heap.len(), heap.capacity());

    if !cli.quiet {
        write!(out, "Sorted version of your array:\n>> ")?;
    }
    for value in heap.drain_sorted() {
        write!(out, "{} ", value)?;
    }
    writeln!(out)?;
    debug!("heap drained, capacity still {}", heap.capacity());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
