use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::{CheckpointExport, ExportLogic, checkpoints_to_table, get_headers};
use crate::models::shift::{ShiftInput, ShiftResult, WorkDuration};
use crate::ui::messages::{header, info, tip};
use crate::utils::colors::{color_for_end_hour, colorize};
use crate::utils::formatting::{bold, minutes_label};
use crate::utils::mins2readable;
use crate::utils::table::Table;
use crate::utils::time::parse_time;
use std::path::PathBuf;

/// Compute and print theoretical end + overtime slots.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        clock_in,
        lunch_out,
        lunch_in,
        work,
        hours,
        minutes,
        ceiling,
        export,
        format,
        force,
    } = cmd
    {
        //
        // 1. Parse the three times
        //
        let clock_in = parse_time(clock_in)?;
        let lunch_out = parse_time(lunch_out)?;
        let lunch_in = parse_time(lunch_in)?;

        //
        // 2. Work duration and ceiling: CLI overrides config
        //
        let daily_work = match work {
            Some(w) => w.parse::<WorkDuration>()?,
            None => WorkDuration::new(
                hours.unwrap_or(cfg.daily_work_hours),
                minutes.unwrap_or(cfg.daily_work_minutes),
            )?,
        };

        let ceiling = match ceiling {
            Some(c) => parse_time(c)?,
            None => cfg.ceiling_time()?,
        };

        let input = ShiftInput {
            clock_in,
            lunch_out,
            lunch_in,
            daily_work,
            ceiling,
        };

        //
        // 3. Compute
        //
        let result = Core::compute_shift(&input)?;

        //
        // 4. Render
        //
        print_result(&input, &result, cfg);

        //
        // 5. Optional export
        //
        if let Some(target) = export {
            let file = target
                .clone()
                .unwrap_or_else(|| PathBuf::from(&cfg.csv_file_name));
            ExportLogic::export(&result, *format, &file, *force)?;
        }
    }

    Ok(())
}

fn print_result(input: &ShiftInput, result: &ShiftResult, cfg: &Config) {
    let end = result.theoretical_end.to_string();
    let end_color = color_for_end_hour(result.theoretical_end.hour(), cfg.late_exit_hour);

    info(format!(
        "Daily work: {}   Slot limit: {}",
        mins2readable(input.daily_work.total_minutes()),
        input.ceiling
    ));

    println!();
    println!("Effective break   : {}", minutes_label(result.effective_break));
    println!("Considered break  : {}", minutes_label(result.normalized_break));
    println!("Theoretical exit  : {}", bold(&colorize(&end, end_color)));

    if result.theoretical_end.hour() >= cfg.late_exit_hour {
        println!();
        tip("\"Dura portarla a casa oggi eh??\"");
    }

    header("Slots every 15'");

    if result.checkpoints.is_empty() {
        println!("No slot within the {} limit.", input.ceiling);
        return;
    }

    let rows: Vec<CheckpointExport> = result.checkpoints.iter().map(Into::into).collect();
    let mut table = Table::with_headers(&get_headers());
    for row in checkpoints_to_table(&rows) {
        table.add_row(row);
    }
    print!("{}", table.render());
}
