//! Seat allocation command.

use std::path::Path;

use examseat_core::allocator::allocate;
use examseat_core::import::{load_faculty, load_rooms};
use examseat_core::invigilation::{DutyLedger, RoomAssignment, assign_invigilators};
use examseat_core::models::SeatingPlan;
use examseat_core::palette::PaperPalette;
use examseat_core::report::SeatingReport;
use tracing::{debug, info};

use super::Context;
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{format_grid, format_legend, format_report_csv, format_report_table, to_json};
use crate::util::{load_session_roster, sort_rooms_by_capacity, write_output};

/// Parameters for the allocate command
pub struct AllocateParams<'a> {
    pub students: &'a Path,
    pub rooms: &'a Path,
    pub faculty: Option<&'a Path>,
    pub date: Option<&'a str>,
    pub time: Option<&'a str>,
    pub sort_rooms: bool,
    pub format: Option<OutputFormat>,
    pub output: Option<&'a Path>,
    pub show_grid: bool,
}

/// Allocate command handler
pub fn cmd_allocate(context: &Context, params: &AllocateParams<'_>) -> Result<(), CliError> {
    let settings = &context.settings;
    let format = params
        .format
        .unwrap_or_else(|| settings.output.format.into());

    let roster = load_session_roster(params.students, params.date, params.time)?;
    let mut rooms = load_rooms(params.rooms)?;
    if params.sort_rooms || settings.allocation.sort_rooms_by_capacity {
        sort_rooms_by_capacity(&mut rooms);
        debug!("Rooms ordered by capacity");
    }

    let allocation = allocate(&roster, &rooms)?;
    let assignments = match params.faculty {
        Some(path) => {
            let mut ledger = DutyLedger::new(load_faculty(path)?)?;
            assign_invigilators(&allocation.plan, &mut ledger)?
        }
        None => Vec::new(),
    };

    let report = SeatingReport::build(&allocation.plan, &assignments, allocation.leftover);
    let rendered = match format {
        OutputFormat::Table => format_report_table(&report),
        OutputFormat::Json => to_json(&report)?,
        OutputFormat::Csv => format_report_csv(&report),
    };

    if params.show_grid || settings.output.show_grid {
        // grids share stdout with the report only when it is plain text
        if params.output.is_some() || format == OutputFormat::Table {
            let palette = PaperPalette::from_roster(&roster);
            print_grids(&allocation.plan, &palette, context.color);
        } else if !context.quiet {
            eprintln!("Warning: grid view skipped while writing {format:?} to stdout");
        }
    }

    write_output(params.output, &rendered)?;
    if let Some(path) = params.output
        && !context.quiet
    {
        println!("Seating report written to {}", path.display());
    }

    if allocation.leftover > 0 {
        info!(leftover = allocation.leftover, "Students left without a seat");
        if !context.quiet {
            eprintln!(
                "Warning: {} student(s) could not be seated; add rooms or capacity",
                allocation.leftover
            );
        }
    }

    print_summary(context, &allocation.plan, &assignments);
    Ok(())
}

fn print_grids(plan: &SeatingPlan, palette: &PaperPalette, color: bool) {
    println!("{}\n", format_legend(palette, color));
    for room_plan in plan {
        println!("{}", format_grid(room_plan, palette, color));
    }
}

fn print_summary(context: &Context, plan: &SeatingPlan, assignments: &[RoomAssignment]) {
    if context.quiet {
        return;
    }
    let invigilated = if assignments.is_empty() {
        String::new()
    } else {
        format!(", {} invigilator duties", assignments.len())
    };
    eprintln!(
        "Seated {} students in {} rooms{invigilated}",
        plan.seated_count(),
        plan.len()
    );
}
