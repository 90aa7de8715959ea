//! Subcommand bodies. Each writes its result to the supplied writer.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use inflammation_db::{close_database, connect_to_database, query_database};
use inflammation_ingest::load_csv;
use inflammation_model::{
    DailyStatistics, InflammationTable, PatientSummary, patient_normalise, patient_summaries,
};

use crate::cli::{Command, OutputFormatArg, PatientArgs, QueryArgs, TableArgs};
use crate::logging::redact_value;
use crate::render::{
    daily_statistics_table, format_reading, patient_summaries_table, patient_table,
    records_table, table_csv,
};

#[derive(Serialize)]
struct PatientReport<'a> {
    readings: Vec<f64>,
    #[serde(flatten)]
    summary: &'a PatientSummary,
}

/// Dispatch a parsed subcommand.
pub fn run_command<W: Write>(
    command: &Command,
    format: OutputFormatArg,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Stats(args) => run_stats(args, format, out),
        Command::Patients(args) => run_patients(args, format, out),
        Command::Patient(args) => run_patient(args, format, out),
        Command::Normalise(args) => run_normalise(args, format, out),
        Command::Query(args) => run_query(args, format, out),
    }
}

pub fn run_stats<W: Write>(
    args: &TableArgs,
    format: OutputFormatArg,
    out: &mut W,
) -> Result<()> {
    let table = load(args)?;
    let stats = DailyStatistics::compute(&table);
    match format {
        OutputFormatArg::Table => {
            writeln!(out, "{}", daily_statistics_table(&stats, args.precision))?;
        }
        OutputFormatArg::Json => write_json(out, &stats)?,
    }
    Ok(())
}

pub fn run_patients<W: Write>(
    args: &TableArgs,
    format: OutputFormatArg,
    out: &mut W,
) -> Result<()> {
    let table = load(args)?;
    let summaries = patient_summaries(&table);
    match format {
        OutputFormatArg::Table => {
            writeln!(out, "{}", patient_summaries_table(&summaries, args.precision))?;
        }
        OutputFormatArg::Json => write_json(out, &summaries)?,
    }
    Ok(())
}

pub fn run_patient<W: Write>(
    args: &PatientArgs,
    format: OutputFormatArg,
    out: &mut W,
) -> Result<()> {
    let table = load(&args.table)?;
    let patient = table
        .patient(args.index)
        .with_context(|| format!("select patient in {}", args.table.csv.display()))?;
    let readings = patient
        .data
        .iter()
        .map(|&value| format_reading(value, args.table.precision))
        .collect::<Vec<_>>()
        .join(",");
    debug!(
        patient = patient.id,
        readings = redact_value(&readings),
        "selected patient"
    );
    let summary = patient.summary();
    match format {
        OutputFormatArg::Table => {
            writeln!(out, "{}", patient_table(&patient, args.table.precision))?;
            writeln!(
                out,
                "{}",
                patient_summaries_table(std::slice::from_ref(&summary), args.table.precision)
            )?;
        }
        OutputFormatArg::Json => write_json(
            out,
            &PatientReport {
                readings: patient.data.to_vec(),
                summary: &summary,
            },
        )?,
    }
    Ok(())
}

/// Normalise each row against its peak. The table format writes CSV rows.
pub fn run_normalise<W: Write>(
    args: &TableArgs,
    format: OutputFormatArg,
    out: &mut W,
) -> Result<()> {
    let table = load(args)?;
    let normalised = patient_normalise(&table)
        .with_context(|| format!("normalise {}", args.csv.display()))?;
    info!(patients = normalised.patients(), "normalised readings");
    match format {
        OutputFormatArg::Table => writeln!(out, "{}", table_csv(&normalised, args.precision))?,
        OutputFormatArg::Json => write_json(out, &normalised.to_rows())?,
    }
    Ok(())
}

/// Open the database, run one statement, close it, then write the rows.
pub fn run_query<W: Write>(
    args: &QueryArgs,
    format: OutputFormatArg,
    out: &mut W,
) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;
    let records = runtime
        .block_on(async {
            let mut connection = connect_to_database(&args.database).await?;
            let records = query_database(&args.sql, Some(&mut connection)).await;
            close_database(connection).await?;
            records
        })
        .with_context(|| format!("query {}", args.database.display()))?;
    info!(rows = records.len(), "query complete");
    match format {
        OutputFormatArg::Table => writeln!(out, "{}", records_table(&records))?,
        OutputFormatArg::Json => write_json(out, &records)?,
    }
    Ok(())
}

/// True when the failure is a closed output pipe, e.g. `inflammation ... | head`.
pub fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_error| io_error.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn load(args: &TableArgs) -> Result<InflammationTable> {
    let span = info_span!("load", path = %args.csv.display());
    let _guard = span.enter();
    load_csv(&args.csv).with_context(|| format!("load {}", args.csv.display()))
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    writeln!(out, "{json}")?;
    Ok(())
}
