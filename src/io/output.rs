use crate::analysis::evaluate_style_rules;
use crate::core::{CorrectionRun, ResponseStyle};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::report::CorrectionReport;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a format name as written in `.rescore.toml`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, run: &CorrectionRun, report: &CorrectionReport) -> anyhow::Result<()>;
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
    fn write_report(&mut self, _run: &CorrectionRun, report: &CorrectionReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
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
    fn write_report(&mut self, run: &CorrectionRun, report: &CorrectionReport) -> anyhow::Result<()> {
        self.write_header(run)?;
        self.write_summary(report)?;
        self.write_categories(report)?;
        self.write_statistics(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, run: &CorrectionRun) -> anyhow::Result<()> {
        writeln!(self.writer, "# Response Style Correction Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Detected style: **{}** ({})",
            run.response_style,
            run.response_style.description()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &CorrectionReport) -> anyhow::Result<()> {
        let summary = &report.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Response style", &summary.response_style.to_string())?;
        self.write_row("Global factor", &format!("{:.3}", summary.global_factor))?;
        self.write_row("Categories", &summary.total_categories.to_string())?;
        self.write_row("Items", &summary.total_items.to_string())?;
        self.write_row(
            "Correction applied",
            if summary.correction_applied { "yes" } else { "no" },
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }

    fn write_categories(&mut self, report: &CorrectionReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Categories")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Category | Original | Corrected | Adjustment | Rank | Percentile |"
        )?;
        writeln!(
            self.writer,
            "|----------|----------|-----------|------------|------|------------|"
        )?;
        for category in &report.categories {
            writeln!(
                self.writer,
                "| {} | {:.3} | {:.3} | {} | {} | {} |",
                category.category,
                category.original_score,
                category.corrected_score,
                category.adjustment_percent,
                category.rank,
                category.percentile
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_statistics(&mut self, report: &CorrectionReport) -> anyhow::Result<()> {
        let stats = &report.statistics;
        writeln!(self.writer, "## Statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Original mean: {:.3}", stats.original_mean)?;
        writeln!(self.writer, "- Corrected mean: {:.3}", stats.corrected_mean)?;
        writeln!(
            self.writer,
            "- Largest adjustment: {}",
            stats.largest_adjustment_display()
        )?;
        writeln!(
            self.writer,
            "- Average adjustment: {}",
            stats.average_adjustment_display()
        )?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    unicode: bool,
    verbosity: u8,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig, verbosity: u8) -> Self {
        Self::with_formatter(
            writer,
            formatter_for(config),
            config.glyphs.should_use_unicode(),
            verbosity,
        )
    }

    pub fn with_formatter(
        writer: W,
        formatter: Box<dyn OutputFormatter>,
        unicode: bool,
        verbosity: u8,
    ) -> Self {
        Self {
            writer,
            formatter,
            unicode,
            verbosity,
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, run: &CorrectionRun, report: &CorrectionReport) -> anyhow::Result<()> {
        self.print_header(run)?;
        if self.verbosity > 0 {
            self.print_global_stats(run)?;
            self.print_rule_trace(run)?;
        }
        self.print_categories(run, report)?;
        self.print_statistics(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, run: &CorrectionRun) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("Response Style Correction"))?;
        writeln!(self.writer, "{}", f.header("========================="))?;
        writeln!(self.writer)?;

        let style = if run.response_style == ResponseStyle::Balanced {
            f.success(run.response_style.as_str())
        } else {
            f.warning(run.response_style.as_str())
        };
        writeln!(
            self.writer,
            "  Style: {} {}",
            style,
            f.dim(&format!("({})", run.response_style.description()))
        )?;
        writeln!(
            self.writer,
            "  Global factor: {:.3}",
            run.metadata.global_factor
        )?;
        writeln!(
            self.writer,
            "  Categories: {}  Items: {}",
            run.metadata.total_categories, run.metadata.total_items
        )?;
        if !run.metadata.correction_applied {
            writeln!(self.writer, "  {}", f.dim("No correction applied"))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_global_stats(&mut self, run: &CorrectionRun) -> anyhow::Result<()> {
        let stats = &run.global_stats;
        writeln!(self.writer, "{}", self.formatter.bold("Global statistics:"))?;
        writeln!(self.writer, "  Mean: {:.3}", stats.mean)?;
        writeln!(
            self.writer,
            "  Variance: {:.3}  Std dev: {:.3}",
            stats.variance, stats.standard_deviation
        )?;
        writeln!(
            self.writer,
            "  Top ratings: {} ({:.1}%)  Bottom ratings: {} ({:.1}%)",
            stats.max_rating_count,
            stats.max_rating_proportion * 100.0,
            stats.min_rating_count,
            stats.min_rating_proportion * 100.0
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_rule_trace(&mut self, run: &CorrectionRun) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.bold("Style rules:"))?;
        for rule in evaluate_style_rules(&run.global_stats) {
            let mark = match (rule.selected, rule.matched) {
                (true, _) => self.formatter.success(&self.formatter.marker("▶", ">")),
                (false, true) => self.formatter.dim(&self.formatter.marker("·", ".")),
                (false, false) => " ".to_string(),
            };
            let state = if rule.matched { "matched" } else { "no match" };
            writeln!(self.writer, "  {mark} {:<18} {}", rule.style.as_str(), state)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_categories(&mut self, run: &CorrectionRun, report: &CorrectionReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(if self.unicode { UTF8_FULL } else { ASCII_FULL })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Category",
                "Original",
                "Corrected",
                "Adjustment",
                "Rank",
                "Percentile",
            ]);

        // report rows follow the run's category order
        for (category, result) in report.categories.iter().zip(&run.corrected_categories) {
            let percent = result.adjustment_percent;
            table.add_row(vec![
                Cell::new(&category.category),
                Cell::new(format!("{:.3}", category.original_score)).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.3}", category.corrected_score)).set_alignment(CellAlignment::Right),
                Cell::new(self.formatter.adjustment(percent, &category.adjustment_percent))
                    .set_alignment(CellAlignment::Right),
                Cell::new(category.rank).set_alignment(CellAlignment::Right),
                Cell::new(&category.percentile).set_alignment(CellAlignment::Right),
            ]);
        }

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_statistics(&mut self, report: &CorrectionReport) -> anyhow::Result<()> {
        let stats = &report.statistics;
        writeln!(self.writer, "{}", self.formatter.bold("Statistics:"))?;
        writeln!(
            self.writer,
            "  Mean score: {:.3} -> {:.3}",
            stats.original_mean, stats.corrected_mean
        )?;
        writeln!(
            self.writer,
            "  Largest adjustment: {}",
            stats.largest_adjustment_display()
        )?;
        writeln!(
            self.writer,
            "  Average adjustment: {}",
            stats.average_adjustment_display()
        )?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
    verbosity: u8,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting, verbosity)),
    }
}
