use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Slots allocated before the first push (0 is treated as 1)
    #[arg(short, long, default_value_t = 1)]
    pub initial_capacity: usize,

    /// Which entries to push
    #[arg(short, long, value_enum, default_value_t = Scenario::Basic)]
    pub scenario: Scenario,

    /// How many entries the random scenario pushes
    #[arg(short, long, default_value_t = 10)]
    pub count: usize,

    /// Seed for the random scenario
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// How to print the heap once everything is pushed
    #[arg(short, long, value_enum, default_value_t = Format::Tree)]
    pub format: Format,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// (A,5) (B,3) (C,8)
    Basic,
    /// five distinct priorities
    Growth,
    /// three entries sharing priority 10
    Ties,
    /// `count` entries with random priorities
    Random,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Tree,
    Array,
    Json,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
