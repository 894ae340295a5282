use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "funarray")]
#[command(version, about = "Run dynamic array operations over a list of integers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Bubble-sort in place; descending unless --ascending is given
    Sort {
        #[arg(long)]
        ascending: bool,
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print the source next to a sorted copy
    Sorted {
        #[arg(long)]
        ascending: bool,
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Add a constant to every value
    Map {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        add: i64,
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Sum the values, starting from --init
    Reduce {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        init: i64,
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Keep the values equal to --eq
    Where {
        #[arg(long, allow_negative_numbers = true)]
        eq: i64,
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Remove the last value
    Pop {
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Remove the first value
    Shift {
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Remove the value at --index
    RemoveAt {
        #[arg(long)]
        index: usize,
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print the values as handed over by the producer thread
    Stream {
        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter implied by the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
