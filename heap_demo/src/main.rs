mod args;
mod scenario;

use anyhow::Context;
use args::{Args, Format};
use clap::Parser;
use priority_heap::PriorityHeap;
use simple_logger::SimpleLogger;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .context("could not set up logging")?;
    let stdout = io::stdout();
    run(&args, stdout.lock())
}

fn run<W: Write>(args: &Args, mut out: W) -> anyhow::Result<()> {
    let mut heap = PriorityHeap::new(args.initial_capacity);
    log::info!(
        "starting {:?} scenario with capacity {}",
        args.scenario,
        heap.capacity()
    );
    for (value, priority) in scenario::entries(args.scenario, args.count, args.seed) {
        log::debug!("pushing {}({})", value, priority);
        heap.push(value, priority);
    }
    log::info!(
        "pushed {} entries, capacity is now {}",
        heap.size(),
        heap.capacity()
    );

    match args.format {
        Format::Tree => heap.write_tree(&mut out),
        Format::Array => heap.write_array(&mut out),
        Format::Json => serde_json::to_writer_pretty(&mut out, &heap)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(out)),
    }
    .context("could not print heap")?;

    writeln!(out, "pop order:")?;
    while !heap.empty() {
        let (value, priority) = heap.pop();
        writeln!(out, "{value}({priority})")?;
    }
    Ok(())
}
