use std::io::{BufWriter, Read, Write, stdout};

use crate::{
    common::error::AppError,
    domain::bank::Bank,
    io::{reader, writer},
    worker::processor::Processor,
};

/// What to print once every operation has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Accounts,
    AverageReport,
}

/// Command-line configuration: `bank_ledger <operations.csv> [--report]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: String,
    pub output: OutputMode,
}

impl Config {
    /// Parses the full argument list, program name included.
    pub fn from_args<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut input_path = None;
        let mut output = OutputMode::default();

        for arg in args.into_iter().skip(1) {
            let arg: String = arg.into();
            match arg.as_str() {
                "--report" => output = OutputMode::AverageReport,
                flag if flag.starts_with("--") => return Err(AppError::UnknownArg(arg)),
                _ if input_path.is_none() => input_path = Some(arg),
                _ => return Err(AppError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            input_path: input_path.ok_or(AppError::MissingArg)?,
            output,
        })
    }
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = Config::from_args(args)?;
    let file = std::fs::File::open(&config.input_path)?;

    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    process(file, out, config.output)
}

/// Replays the operations read from `input` against a fresh bank and writes
/// the requested output.
pub fn process<R: Read, W: Write>(input: R, output: W, mode: OutputMode) -> Result<(), AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    let commands = reader::read_commands(&mut reader);

    let bank = Bank::new();
    let mut processor = Processor::new();

    for command in commands {
        let command = command.map_err(AppError::Parse)?;
        processor.process(&bank, command);
    }
    tracing::info!(
        accounts = bank.len(),
        rejected = processor.rejected(),
        "operations applied"
    );

    match mode {
        OutputMode::Accounts => writer::write_accounts(output, &bank.accounts())?,
        OutputMode::AverageReport => writer::write_report(output, &bank.average_balance_report())?,
    }

    Ok(())
}
