// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs a fixed list of scripted scenarios against `MinHeap` and reports pass/fail counts.

use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;

use anyhow::{anyhow, ensure, Context};
use clap::Parser;
use log::{error, LevelFilter};
use min_heap::{Error, MinHeap};

#[derive(Parser)]
#[command(version, about = "Check the MinHeap public contract")]
struct Cli {
    /// Only run scenarios whose name contains this string
    #[arg(long)]
    filter: Option<String>,

    /// Log each failure to stderr as well
    #[arg(short, long)]
    verbose: bool,
}

type Scenario = fn() -> anyhow::Result<()>;

fn check_len(heap: &MinHeap, expected: usize) -> anyhow::Result<()> {
    ensure!(heap.len() == expected, "len is {}, expected {}", heap.len(), expected);
    Ok(())
}

fn check_capacity(heap: &MinHeap, expected: usize) -> anyhow::Result<()> {
    ensure!(
        heap.capacity() == expected,
        "capacity is {}, expected {}",
        heap.capacity(),
        expected
    );
    Ok(())
}

fn check_push(heap: &mut MinHeap, value: i32, expected_top: i32) -> anyhow::Result<()> {
    heap.push(value).with_context(|| format!("push({})", value))?;
    let top = heap.top()?;
    ensure!(top == expected_top, "top after push({}) is {}, expected {}", value, top, expected_top);
    Ok(())
}

fn check_pop(heap: &mut MinHeap, expected: i32) -> anyhow::Result<()> {
    let popped = heap.pop()?;
    ensure!(popped == expected, "popped {}, expected {}", popped, expected);
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let heap = MinHeap::new();
    check_len(&heap, 0)?;
    check_capacity(&heap, 0)?;

    let heap = MinHeap::with_capacity(5)?;
    check_len(&heap, 0)?;
    check_capacity(&heap, 5)?;

    let nums = [3, 6, -2, 7, 1];
    let mut heap = MinHeap::from_bounds(&nums, 0, nums.len())?;
    check_capacity(&heap, 5)?;
    for (i, &expected) in [-2, 1, 3, 6, 7].iter().enumerate() {
        check_len(&heap, 5 - i)?;
        check_pop(&mut heap, expected)?;
    }
    check_len(&heap, 0)?;
    check_capacity(&heap, 5)
}

fn memory() -> anyhow::Result<()> {
    let mut heap = MinHeap::with_capacity(3)?;
    check_capacity(&heap, 3)?;
    heap.reserve(5)?;
    check_len(&heap, 0)?;
    check_capacity(&heap, 5)?;
    heap.shrink()?;
    check_capacity(&heap, 0)?;
    heap.reserve(10)?;
    check_push(&mut heap, 5, 5)?;
    check_len(&heap, 1)?;
    check_capacity(&heap, 10)?;
    heap.reserve(5)?;
    check_capacity(&heap, 5)?;
    heap.shrink()?;
    check_len(&heap, 1)?;
    check_capacity(&heap, 1)
}

fn push() -> anyhow::Result<()> {
    let mut heap = MinHeap::with_capacity(3)?;
    check_push(&mut heap, 2, 2)?;
    check_push(&mut heap, 3, 2)?;
    check_push(&mut heap, -5, -5)?;
    check_len(&heap, 3)?;
    check_capacity(&heap, 3)?;
    check_push(&mut heap, 7, -5)?;
    check_push(&mut heap, -5, -5)?;
    check_len(&heap, 5)?;
    check_capacity(&heap, 13)
}

fn pop() -> anyhow::Result<()> {
    let nums = [3, -5, 2];
    let mut heap = MinHeap::from_bounds(&nums, 0, nums.len())?;
    check_pop(&mut heap, -5)?;
    check_pop(&mut heap, 2)?;
    check_pop(&mut heap, 3)?;
    check_len(&heap, 0)?;
    check_capacity(&heap, 3)?;
    match heap.pop() {
        Err(Error::EmptyHeap { .. }) => Ok(()),
        other => Err(anyhow!("pop on an empty heap returned {:?}", other)),
    }
}

fn top() -> anyhow::Result<()> {
    let mut heap = MinHeap::new();
    ensure!(heap.top().is_err(), "top on an empty heap succeeded");
    heap.push(4)?;
    heap.push(-1)?;
    ensure!(heap.top()? == -1, "top is not the minimum");
    check_len(&heap, 2)
}

fn reserve_below_length() -> anyhow::Result<()> {
    let mut heap = MinHeap::from(vec![1, 2, 3]);
    let result = heap.reserve(2);
    ensure!(
        matches!(result, Err(ref e) if e.is_invalid_state()),
        "reserve below length returned {:?}",
        result
    );
    check_len(&heap, 3)?;
    check_capacity(&heap, 3)
}

fn growth_policy() -> anyhow::Result<()> {
    let mut heap = MinHeap::with_capacity(10)?;
    for x in 0..11 {
        heap.push(x)?;
    }
    check_capacity(&heap, 20)?;

    let mut heap = MinHeap::with_capacity(1)?;
    heap.push(0)?;
    heap.push(0)?;
    check_capacity(&heap, 11)
}

fn bounds() -> anyhow::Result<()> {
    let nums = [1, 2, 3];
    ensure!(
        matches!(MinHeap::from_bounds(&nums, 2, 1), Err(Error::InvalidArgument { .. })),
        "inverted bounds were accepted"
    );
    let heap = MinHeap::from_bounds(&nums, 1, 1)?;
    check_len(&heap, 0)?;
    check_capacity(&heap, 0)
}

const SCENARIOS: &[(&str, Scenario)] = &[
    ("init", init),
    ("memory", memory),
    ("push", push),
    ("pop", pop),
    ("top", top),
    ("reserve-below-length", reserve_below_length),
    ("growth-policy", growth_policy),
    ("bounds", bounds),
];

fn run_scenario(scenario: Scenario) -> anyhow::Result<()> {
    match panic::catch_unwind(AssertUnwindSafe(scenario)) {
        Ok(result) => result,
        Err(_) => Err(anyhow!("scenario panicked")),
    }
}

fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_env("RUST_LOG")
        .init();

    println!("------------------------------");
    println!("TESTING STARTED");
    println!();

    let mut passed = 0;
    let mut failed = 0;
    for &(name, scenario) in SCENARIOS {
        if let Some(ref filter) = cli.filter {
            if !name.contains(filter.as_str()) {
                continue;
            }
        }
        match run_scenario(scenario) {
            Ok(()) => {
                println!("{}: pass", name);
                passed += 1;
            }
            Err(e) => {
                error!("scenario {} failed: {:#}", name, e);
                println!("{}: failed: {:#}", name, e);
                failed += 1;
            }
        }
    }

    println!();
    println!("{}", if failed == 0 { "TESTING SUCCEEDED" } else { "TESTING FAILED" });
    println!("pass/fail | {}/{}", passed, failed);
    println!("------------------------------");

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
