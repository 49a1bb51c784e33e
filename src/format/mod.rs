//! Output formatting for course records (CSV, JSON, markdown, table).

use crate::catalog::models::COLUMNS;
use crate::catalog::CourseRecord;
use crate::config::OutputFormat;

/// Formats course records for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a batch of records, one row per record.
    pub fn format_records(&self, records: &[CourseRecord]) -> String {
        if records.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => self.csv_header(),
                _ => "No courses found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Csv => self.csv_records(records),
            OutputFormat::Json => self.json_records(records),
            OutputFormat::Markdown => self.markdown_records(records),
            OutputFormat::Table => self.table_records(records),
        }
    }

    // JSON formatting

    fn json_records(&self, records: &[CourseRecord]) -> String {
        serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
    }

    // CSV formatting

    fn csv_header(&self) -> String {
        COLUMNS.join(",")
    }

    fn csv_records(&self, records: &[CourseRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(self.csv_header());

        for record in records {
            let cells: Vec<String> = record.cells().iter().map(|c| Self::csv_escape(c)).collect();
            lines.push(cells.join(","));
        }

        lines.join("\n")
    }

    fn csv_escape(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }

    // Markdown formatting

    fn markdown_records(&self, records: &[CourseRecord]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 4);

        lines.push(format!("| {} |", COLUMNS.join(" | ")));
        lines.push(format!("|{}", "---|".repeat(COLUMNS.len())));

        for record in records {
            let cells: Vec<String> = record.cells().iter().map(|c| c.replace('|', "\\|")).collect();
            lines.push(format!("| {} |", cells.join(" | ")));
        }

        lines.push(String::new());
        lines.push(format!("*{} courses*", records.len()));

        lines.join("\n")
    }

    // Table formatting

    fn table_records(&self, records: &[CourseRecord]) -> String {
        let label_width = COLUMNS.iter().map(|c| c.len()).max().unwrap_or(0) + 1;
        let mut blocks = Vec::with_capacity(records.len() + 1);

        for record in records {
            let lines: Vec<String> = COLUMNS
                .iter()
                .zip(record.cells().iter())
                .map(|(name, value)| format!("{:<label_width$} {}", format!("{}:", name), value))
                .collect();
            blocks.push(lines.join("\n"));
        }

        blocks.push(format!("Total: {} courses", records.len()));
        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Prerequisite;

    fn make_record() -> CourseRecord {
        CourseRecord {
            course_id: Some("02.121DH".to_string()),
            course_title: Some("The Question of Being".to_string()),
            description: Some("Being, time, and \"the self\".".to_string()),
            terms_available: Some(vec![5, 7]),
            course_lead: Some("J. Doe".to_string()),
            course_lead_info: Some("https://www.sutd.edu.sg/profile/jdoe".to_string()),
            pillar: Some("HASS".to_string()),
            course_type: Some("Elective".to_string()),
            prerequisites: Some(vec![Prerequisite::new(
                "Intro",
                "https://www.sutd.edu.sg/course/02.001",
            )]),
        }
    }

    #[test]
    fn test_csv_header() {
        let formatter = Formatter::new(OutputFormat::Csv);
        assert_eq!(
            formatter.format_records(&[]),
            "course_id,course_title,description,terms_available,course_lead,course_lead_info,pillar,type,prerequisites,prerequisites_links"
        );
    }

    #[test]
    fn test_csv_record() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let output = formatter.format_records(&[make_record()]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "02.121DH,The Question of Being,\"Being, time, and \"\"the self\"\".\",\"[5, 7]\",J. Doe,https://www.sutd.edu.sg/profile/jdoe,HASS,Elective,['Intro'],['https://www.sutd.edu.sg/course/02.001']"
        );
    }

    #[test]
    fn test_csv_placeholder_record() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let output = formatter.format_records(&[CourseRecord::default()]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[1],
            "no info,no info,no info,['no info'],no info,no info,no info,no info,['no info'],['no info']"
        );
    }

    #[test]
    fn test_csv_row_order() {
        let formatter = Formatter::new(OutputFormat::Csv);
        let first = CourseRecord { course_id: Some("A".to_string()), ..Default::default() };
        let second = CourseRecord { course_id: Some("B".to_string()), ..Default::default() };

        let output = formatter.format_records(&[first, second]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("A,"));
        assert!(lines[2].starts_with("B,"));
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(Formatter::csv_escape("simple"), "simple");
        assert_eq!(Formatter::csv_escape("a,b"), "\"a,b\"");
        assert_eq!(Formatter::csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(Formatter::csv_escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_json_records() {
        let formatter = Formatter::new(OutputFormat::Json);
        let output = formatter.format_records(&[make_record(), CourseRecord::default()]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["course_id"], "02.121DH");
        assert_eq!(parsed[0]["terms_available"], serde_json::json!([5, 7]));
        assert_eq!(parsed[1]["terms_available"], serde_json::json!(["no info"]));
        assert_eq!(parsed[1]["type"], "no info");
    }

    #[test]
    fn test_json_empty() {
        let formatter = Formatter::new(OutputFormat::Json);
        assert_eq!(formatter.format_records(&[]), "[]");
    }

    #[test]
    fn test_markdown_records() {
        let formatter = Formatter::new(OutputFormat::Markdown);
        let mut record = make_record();
        record.pillar = Some("A|B".to_string());

        let output = formatter.format_records(&[record]);
        assert!(output.starts_with("| course_id | course_title |"));
        assert!(output.contains("| 02.121DH | The Question of Being |"));
        assert!(output.contains("A\\|B"));
        assert!(output.contains("*1 courses*"));
    }

    #[test]
    fn test_table_records() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_records(&[make_record()]);
        assert!(output.contains("course_id:"));
        assert!(output.contains("02.121DH"));
        assert!(output.contains("terms_available:"));
        assert!(output.contains("[5, 7]"));
        assert!(output.contains("Total: 1 courses"));
    }

    #[test]
    fn test_empty_non_csv_formats() {
        assert_eq!(Formatter::new(OutputFormat::Markdown).format_records(&[]), "No courses found.");
        assert_eq!(Formatter::new(OutputFormat::Table).format_records(&[]), "No courses found.");
    }
}
