use std::fmt::Write as _;

use eyre::WrapErr;

use contracare_advisor::display::DisplayModel;
use contracare_advisor::report::render_report;
use contracare_advisor::selection::SelectionState;
use contracare_core::Method;
use contracare_core::scoring::LEGEND;
use contracare_table::ReferenceTable;

use crate::cli::{Command, ConfigAction, Format, Settings};
use crate::config;

/// Run a command and return what it prints.
///
/// The reference table is loaded once, and only by commands that need it.
pub fn execute(command: &Command, settings: &Settings) -> eyre::Result<String> {
    match command {
        Command::Conditions => {
            let table = load_table(settings)?;
            Ok(lines(table.conditions()))
        }
        Command::SubConditions { condition } => {
            let table = load_table(settings)?;
            Ok(lines(table.sub_conditions(condition)))
        }
        Command::Recommend {
            condition,
            sub_condition,
            format,
            chart_width,
        } => {
            let table = load_table(settings)?;
            let width = chart_width.unwrap_or(settings.config.chart_width);
            recommend(&table, condition, sub_condition, *format, width)
        }
        Command::Methods => Ok(methods()),
        Command::Legend => Ok(legend()),
        Command::Config { action } => run_config(action, settings),
    }
}

pub fn recommend(
    table: &ReferenceTable,
    condition: &str,
    sub_condition: &str,
    format: Format,
    chart_width: usize,
) -> eyre::Result<String> {
    let selection = SelectionState::default()
        .choose_condition(condition)
        .choose_sub_condition(sub_condition);
    let model = DisplayModel::build(table, &selection);

    if !model.has_recommendations() {
        tracing::warn!(condition, sub_condition, "no recommendation for selection");
    }

    match format {
        Format::Text => Ok(render_report(&model, chart_width)?),
        Format::Json => Ok(serde_json::to_string_pretty(&model)?),
    }
}

pub fn methods() -> String {
    let mut out = String::new();
    for method in Method::ALL {
        let _ = writeln!(out, "{}: {}", method.code(), method.description());
    }
    out
}

pub fn legend() -> String {
    let mut out = String::new();
    for entry in LEGEND {
        let _ = writeln!(
            out,
            "{}: {} {}",
            entry.category,
            entry.label.icon(),
            entry.meaning
        );
    }
    out
}

fn run_config(action: &ConfigAction, settings: &Settings) -> eyre::Result<String> {
    match action {
        ConfigAction::Show => Ok(serde_json::to_string_pretty(&settings.config)?),
        ConfigAction::Init { force } => {
            let path = &settings.config_path;
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to replace it)",
                    path.display()
                ));
            }
            config::save_config(path, &config::AdvisorConfig::default())?;
            Ok(format!("wrote {}\n", path.display()))
        }
    }
}

fn load_table(settings: &Settings) -> eyre::Result<ReferenceTable> {
    ReferenceTable::load(&settings.data_path).wrap_err_with(|| {
        format!(
            "cannot start without the reference table at {}",
            settings.data_path.display()
        )
    })
}

fn lines(values: Vec<&str>) -> String {
    values.into_iter().map(|v| format!("{v}\n")).collect()
}
