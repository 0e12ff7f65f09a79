use serde::Serialize;
use tera::{Context, Tera};

use contracare_core::Method;
use contracare_core::scoring::LEGEND;

use crate::display::DisplayModel;
use crate::error::AdvisorError;
use crate::reference;
use crate::selection::SelectionState;

pub const DEFAULT_TEMPLATE_NAME: &str = "report.txt";
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.txt.tera");

/// Default width of a full (category 4) chart bar, in characters.
pub const DEFAULT_CHART_WIDTH: usize = 40;

#[derive(Debug, Serialize)]
struct ReportContext {
    title: &'static str,
    title_rule: String,
    welcome: &'static str,
    source_name: &'static str,
    source_url: &'static str,
    condition: String,
    sub_condition: String,
    recommendations: Vec<RecommendationLine>,
    chart: Vec<String>,
    empty_message: &'static str,
    methods: Vec<MethodLine>,
    legend: Vec<LegendLine>,
    disclaimer: &'static str,
    guidance_url: &'static str,
}

#[derive(Debug, Serialize)]
struct RecommendationLine {
    method: &'static str,
    icon: &'static str,
    text: &'static str,
    score: String,
}

#[derive(Debug, Serialize)]
struct MethodLine {
    code: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct LegendLine {
    category: u8,
    icon: &'static str,
    meaning: &'static str,
}

/// Render a display model with the built-in plain-text template.
pub fn render_report(model: &DisplayModel, chart_width: usize) -> Result<String, AdvisorError> {
    render_report_with(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, model, chart_width)
}

/// Render a display model with a caller-supplied Tera template.
///
/// The template sees `recommendations` (each with `method`, `icon`, `text`
/// and `score`), `chart` (preformatted bar rows), `methods`, `legend` and the
/// static reference strings.
pub fn render_report_with(
    template_name: &str,
    template_content: &str,
    model: &DisplayModel,
    chart_width: usize,
) -> Result<String, AdvisorError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| AdvisorError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report_context(model, chart_width))?;
    let context =
        Context::from_value(value).map_err(|e| AdvisorError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn report_context(model: &DisplayModel, chart_width: usize) -> ReportContext {
    let recommendations = model
        .recommendations
        .iter()
        .map(|rec| RecommendationLine {
            method: rec.method.code(),
            icon: rec.label.icon(),
            text: rec.label.text(),
            score: format!("{:?}", rec.raw_score),
        })
        .collect();

    ReportContext {
        title: reference::TITLE,
        title_rule: "=".repeat(reference::TITLE.len()),
        welcome: reference::WELCOME,
        source_name: reference::SOURCE_NAME,
        source_url: reference::SOURCE_URL,
        condition: model.selection.condition().unwrap_or_default().to_string(),
        sub_condition: model.selection.sub_condition().unwrap_or_default().to_string(),
        recommendations,
        chart: model.chart.bars(chart_width),
        empty_message: empty_message(&model.selection),
        methods: Method::ALL
            .into_iter()
            .map(|m| MethodLine {
                code: m.code(),
                description: m.description(),
            })
            .collect(),
        legend: LEGEND
            .into_iter()
            .map(|e| LegendLine {
                category: e.category,
                icon: e.label.icon(),
                meaning: e.meaning,
            })
            .collect(),
        disclaimer: reference::DISCLAIMER,
        guidance_url: reference::GUIDANCE_URL,
    }
}

fn empty_message(selection: &SelectionState) -> &'static str {
    match selection {
        SelectionState::NoConditionSelected => {
            "No recommendation yet: choose your primary medical condition."
        }
        SelectionState::ConditionSelected { .. } => {
            "No recommendation yet: choose a sub-condition."
        }
        SelectionState::FullySelected { .. } => {
            "No reference data matches this condition and sub-condition."
        }
    }
}
