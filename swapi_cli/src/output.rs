use serde::Serialize;
use swapi_lib::{CategorySet, SaveReport};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            "markdown" | "md" => Self::Markdown,
            _ => Self::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    name: String,
    #[tabled(rename = "File")]
    #[serde(rename = "File")]
    file: String,
}

#[derive(Tabled, Serialize)]
struct SaveRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
    #[tabled(rename = "Detail")]
    #[serde(rename = "Detail")]
    detail: String,
}

fn build_category_rows(categories: &CategorySet) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|name| CategoryRow {
            name: name.clone(),
            file: swapi_lib::save::category_file_name(name),
        })
        .collect()
}

fn build_save_rows(report: &SaveReport) -> Vec<SaveRow> {
    let saved = report.saved.iter().map(|path| SaveRow {
        category: path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        status: "saved".to_string(),
        detail: path.display().to_string(),
    });
    let failed = report.failed.iter().map(|(name, err)| SaveRow {
        category: name.clone(),
        status: "failed".to_string(),
        detail: err.to_string(),
    });
    saved.chain(failed).collect()
}

fn render<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

pub fn print_categories(categories: &CategorySet, format: &OutputFormat) {
    let rows = build_category_rows(categories);
    match format {
        OutputFormat::Json => print_json(&rows),
        _ => println!("{}", render(rows, format)),
    }
}

pub fn print_save_report(report: &SaveReport, format: &OutputFormat) {
    let rows = build_save_rows(report);
    match format {
        OutputFormat::Json => print_json(&rows),
        _ => println!("{}", render(rows, format)),
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use swapi_lib::SaveError;

    fn categories() -> CategorySet {
        ["people", "films"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_output_format() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    #[test]
    fn category_rows_are_sorted_with_file_names() {
        let rows = build_category_rows(&categories());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "films");
        assert_eq!(rows[0].file, "films.txt");
        assert_eq!(rows[1].name, "people");
    }

    #[test]
    fn category_table_has_headers() {
        let out = render(build_category_rows(&categories()), &OutputFormat::Table);
        assert!(out.contains("Category"));
        assert!(out.contains("people.txt"));
    }

    #[test]
    fn category_markdown_uses_pipes() {
        let out = render(build_category_rows(&categories()), &OutputFormat::Markdown);
        assert!(out.lines().all(|l| l.starts_with('|')));
    }

    #[test]
    fn category_rows_serialize_with_renamed_keys() {
        let json = serde_json::to_value(build_category_rows(&categories())).unwrap();
        assert_eq!(json[0]["Category"], "films");
        assert_eq!(json[0]["File"], "films.txt");
    }

    #[test]
    fn save_rows_list_saved_then_failed() {
        let report = SaveReport {
            out_dir: PathBuf::from("data"),
            saved: vec![PathBuf::from("data/films.txt")],
            failed: vec![(
                "people".to_string(),
                SaveError::InvalidInput("nope".to_string()),
            )],
        };
        let rows = build_save_rows(&report);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "films");
        assert_eq!(rows[0].status, "saved");
        assert_eq!(rows[1].category, "people");
        assert_eq!(rows[1].status, "failed");
        assert!(rows[1].detail.contains("nope"));
    }
}
