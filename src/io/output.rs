use crate::aggregate::Assessments;
use crate::assessment::{
    Assessed, BasicRiskAssessment, DetailLevel, RiskAssessment, RiskFactor, RiskLevel,
};
use crate::summary::{action_plan, ActionItem, RiskSummary};
use colored::*;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Everything one `assess` run reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub level: DetailLevel,
    pub summary: RiskSummary,
    pub action_plan: Vec<ActionItem>,
    pub assessments: Assessments,
}

impl Report {
    pub fn new(assessments: Assessments, action_plan_limit: usize) -> Self {
        let (summary, action_plan) = match &assessments {
            Assessments::Basic(list) => (
                RiskSummary::from_assessments(list),
                action_plan(list, action_plan_limit),
            ),
            Assessments::Premium(list) => (
                RiskSummary::from_assessments(list),
                action_plan(list, action_plan_limit),
            ),
        };
        Self {
            level: assessments.level(),
            summary,
            action_plan,
            assessments,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_action_plan(&report.action_plan)?;
        match &report.assessments {
            Assessments::Basic(list) => list
                .iter()
                .try_for_each(|assessment| self.write_basic_section(assessment))?,
            Assessments::Premium(list) => list
                .iter()
                .try_for_each(|assessment| self.write_premium_section(assessment))?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# Cancer Risk Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Assessment: {}", report.level)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &Report) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Cancers assessed | {} |",
            summary.cancers_assessed
        )?;
        writeln!(self.writer, "| Overall level | {} |", summary.overall_level)?;
        for level in RiskLevel::ALL.iter().rev() {
            writeln!(
                self.writer,
                "| {} risk | {} |",
                level,
                summary.level_counts.get(*level)
            )?;
        }
        if report.level == DetailLevel::Premium {
            writeln!(
                self.writer,
                "| Modifiable factors | {} |",
                summary.modifiable_factors
            )?;
        }
        writeln!(
            self.writer,
            "| High-priority recommendations | {} |",
            summary.high_priority_recommendations
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "| Cancer | Level | Figure |")?;
        writeln!(self.writer, "|--------|-------|--------|")?;
        for (cancer_type, level, figure) in overview_rows(&report.assessments) {
            writeln!(self.writer, "| {cancer_type} | {level} | {figure} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_action_plan(&mut self, plan: &[ActionItem]) -> anyhow::Result<()> {
        if plan.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Action Plan")?;
        writeln!(self.writer)?;
        for (i, item) in plan.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. **{}** ({}): {}",
                i + 1,
                item.action,
                item.cancer_type,
                item.description
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_premium_section(&mut self, assessment: &RiskAssessment) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", assessment.cancer_type)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "**{}**", assessment.risk_category)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- 5-year risk: {:.2}%",
            assessment.absolute_risk.five_year
        )?;
        writeln!(
            self.writer,
            "- 10-year risk: {:.2}%",
            assessment.absolute_risk.ten_year
        )?;
        writeln!(
            self.writer,
            "- Lifetime risk: {:.1}%",
            assessment.absolute_risk.lifetime
        )?;
        writeln!(
            self.writer,
            "- Relative risk: {:.2}x",
            assessment.relative_risk
        )?;
        if let Some(potential) = assessment.risk_reduction_potential {
            writeln!(self.writer, "- Risk reduction potential: {potential}%")?;
        }
        writeln!(self.writer)?;

        self.write_factors("Modifiable factors", &assessment.modifiable_factors)?;
        self.write_factors("Non-modifiable factors", &assessment.non_modifiable_factors)?;

        writeln!(self.writer, "### Recommendations")?;
        writeln!(self.writer)?;
        for rec in &assessment.recommendations {
            write!(
                self.writer,
                "- [{}] **{}**: {}",
                rec.priority.as_str(),
                rec.action,
                rec.description
            )?;
            match &rec.potential_impact {
                Some(note) => writeln!(self.writer, " _({note})_")?,
                None => writeln!(self.writer)?,
            }
        }
        writeln!(self.writer)?;

        if !assessment.screening_timeline.is_empty() {
            writeln!(self.writer, "### Screening")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Test | Start age | Frequency |")?;
            writeln!(self.writer, "|------|-----------|-----------|")?;
            for test in &assessment.screening_timeline {
                writeln!(
                    self.writer,
                    "| {} | {} | {} |",
                    test.test, test.start_age, test.frequency
                )?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_factors(&mut self, title: &str, factors: &[RiskFactor]) -> anyhow::Result<()> {
        if factors.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "### {title}")?;
        writeln!(self.writer)?;
        for factor in factors {
            writeln!(
                self.writer,
                "- {} ({:?}): {}",
                factor.factor, factor.impact, factor.description
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_basic_section(&mut self, assessment: &BasicRiskAssessment) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", assessment.cancer_type)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{} risk**, score {}/10",
            assessment.risk_level, assessment.risk_score
        )?;
        if let Some(model) = &assessment.risk_model {
            writeln!(self.writer)?;
            writeln!(self.writer, "Model: {model}")?;
        }
        writeln!(self.writer)?;

        if !assessment.key_factors.is_empty() {
            writeln!(self.writer, "### Key factors")?;
            writeln!(self.writer)?;
            for factor in &assessment.key_factors {
                writeln!(self.writer, "- {factor}")?;
            }
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "### Recommendations")?;
        writeln!(self.writer)?;
        for rec in &assessment.recommendations {
            write!(
                self.writer,
                "- [{}] **{}**: {}",
                rec.priority.as_str(),
                rec.action,
                rec.description
            )?;
            match &rec.impact {
                Some(note) => writeln!(self.writer, " _({note})_")?,
                None => writeln!(self.writer)?,
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// One terminal table, colour unless `plain`.
pub struct TerminalWriter<W: Write> {
    writer: W,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, plain: bool) -> Self {
        Self { writer, plain }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        writeln!(self.writer, "{}", self.overview_table(report))?;
        writeln!(self.writer)?;
        self.write_action_plan(&report.action_plan)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        let title = format!("Cancer Risk Report ({})", report.level);
        if self.plain {
            writeln!(self.writer, "{title}")?;
        } else {
            writeln!(self.writer, "{}", title.bold().blue())?;
        }
        writeln!(self.writer, "{}", "=".repeat(title.len()))?;
        writeln!(
            self.writer,
            "Overall: {}  ({} cancers assessed, {} high-priority recommendations)",
            self.paint(report.summary.overall_level),
            report.summary.cancers_assessed,
            report.summary.high_priority_recommendations
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn overview_table(&self, report: &Report) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.plain {
                presets::ASCII_FULL
            } else {
                presets::UTF8_FULL
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Cancer", "Level", "Figure"]);

        for (cancer_type, level, figure) in overview_rows(&report.assessments) {
            let mut level_cell = Cell::new(level.as_str());
            if !self.plain {
                level_cell = level_cell.fg(level_color(level));
            }
            table.add_row(vec![Cell::new(cancer_type), level_cell, Cell::new(figure)]);
        }
        table
    }

    fn write_action_plan(&mut self, plan: &[ActionItem]) -> anyhow::Result<()> {
        if plan.is_empty() {
            return Ok(());
        }
        if self.plain {
            writeln!(self.writer, "Action plan:")?;
        } else {
            writeln!(self.writer, "{}", "Action plan:".bold())?;
        }
        for (i, item) in plan.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. {} ({})",
                i + 1,
                item.action,
                item.cancer_type
            )?;
            writeln!(self.writer, "     {}", item.description)?;
        }
        Ok(())
    }

    fn paint(&self, level: RiskLevel) -> String {
        if self.plain {
            return level.to_string();
        }
        match level {
            RiskLevel::High => level.as_str().red().bold().to_string(),
            RiskLevel::Elevated => level.as_str().yellow().to_string(),
            RiskLevel::Average => level.as_str().blue().to_string(),
            RiskLevel::Low => level.as_str().green().to_string(),
        }
    }
}

fn level_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::High => Color::Red,
        RiskLevel::Elevated => Color::Yellow,
        RiskLevel::Average => Color::Blue,
        RiskLevel::Low => Color::Green,
    }
}

/// `(cancer type, level, headline figure)` per assessment.
fn overview_rows(assessments: &Assessments) -> Vec<(String, RiskLevel, String)> {
    match assessments {
        Assessments::Basic(list) => list
            .iter()
            .map(|a| {
                (
                    a.cancer_type.clone(),
                    a.risk_level,
                    format!("score {}/10", a.risk_score),
                )
            })
            .collect(),
        Assessments::Premium(list) => list
            .iter()
            .map(|a| {
                (
                    a.cancer_type().to_string(),
                    a.risk_level,
                    format!("{:.1}% lifetime", a.absolute_risk.lifetime),
                )
            })
            .collect(),
    }
}

/// `NO_COLOR` set to anything disables colour like `--plain`.
pub fn color_disabled(plain: bool) -> bool {
    plain || std::env::var_os("NO_COLOR").is_some()
}

pub fn create_writer<'a>(
    format: OutputFormat,
    destination: Box<dyn Write + 'a>,
    plain: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => {
            Box::new(TerminalWriter::new(destination, color_disabled(plain)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::vocabulary::{BiologicalSex, SmokingStatus};
    use crate::answers::{BasicAnswers, PremiumAnswers};
    use crate::aggregate::{calculate_basic_risks, calculate_risks};

    fn premium_report() -> Report {
        let answers = PremiumAnswers {
            age: Some(60.0),
            biological_sex: Some(BiologicalSex::Female),
            smoking_status: Some(SmokingStatus::Current),
            ..Default::default()
        };
        Report::new(Assessments::Premium(calculate_risks(&answers)), 3)
    }

    fn render(writer: &mut dyn OutputWriter, report: &Report) {
        writer.write_report(report).unwrap();
    }

    #[test]
    fn test_json_uses_camel_case() {
        let report = premium_report();
        let mut buffer = Vec::new();
        render(&mut JsonWriter::new(&mut buffer), &report);

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["level"], "premium");
        assert_eq!(value["assessments"][0]["cancerType"], "Lung Cancer");
        assert!(value["assessments"][0]["absoluteRisk"]["lifetime"].is_number());
        assert_eq!(value["actionPlan"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_markdown_has_a_section_per_cancer() {
        let report = premium_report();
        let mut buffer = Vec::new();
        render(&mut MarkdownWriter::new(&mut buffer), &report);
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("# Cancer Risk Report"));
        assert!(text.contains("## Action Plan"));
        assert!(text.contains("## Cervical Cancer"));
        assert!(text.contains("Quit smoking immediately"));
    }

    #[test]
    fn test_plain_terminal_output_has_no_escape_codes() {
        let report = Report::new(
            Assessments::Basic(calculate_basic_risks(&BasicAnswers::default())),
            6,
        );
        let mut buffer = Vec::new();
        render(&mut TerminalWriter::new(&mut buffer, true), &report);
        let text = String::from_utf8(buffer).unwrap();

        assert!(!text.contains('\u{1b}'));
        assert!(text.contains("Skin Cancer/Melanoma"));
        assert!(text.contains("score"));
    }
}
