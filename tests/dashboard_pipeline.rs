use rust_xlsxwriter::Workbook;
use siege_dashboard::data::{AgeBucket, CaseLoader, DataProcessor, GenderAgeCount, StateCount};
use siege_dashboard::{Dashboard, DashboardSettings};
use std::path::Path;
use tempfile::{tempdir, TempDir};

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

fn write_cases(path: &Path, sheet: &str, rows: &[(&str, &str, Cell)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();

    // extra columns are loaded but ignored
    for (c, name) in ["name", "state", "gender", "agearrest"].iter().enumerate() {
        worksheet.write_string(0, c as u16, *name).unwrap();
    }
    for (i, (state, gender, age)) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        worksheet.write_string(r, 0, format!("Defendant {r}")).unwrap();
        worksheet.write_string(r, 1, *state).unwrap();
        worksheet.write_string(r, 2, *gender).unwrap();
        match age {
            Cell::Text(text) => worksheet.write_string(r, 3, *text).unwrap(),
            Cell::Number(n) => worksheet.write_number(r, 3, *n).unwrap(),
        };
    }
    workbook.save(path).unwrap();
}

fn scenario() -> (TempDir, DashboardSettings) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("CapitolHillTracker11721.xlsx");
    write_cases(
        &path,
        "Capitol Hill",
        &[
            ("VA", "M", Cell::Number(25.0)),
            ("VA", "F", Cell::Text("Unknown")),
            ("NY", "M", Cell::Number(45.0)),
        ],
    );

    let settings = DashboardSettings {
        data_file: path,
        ..Default::default()
    };
    (dir, settings)
}

#[test]
fn spreadsheet_to_summaries() {
    let (_dir, settings) = scenario();
    let dashboard = Dashboard::build(&settings).unwrap();

    assert_eq!(dashboard.summary.total_cases, 3);
    assert_eq!(
        dashboard.summary.states,
        vec![
            StateCount {
                state: "VA".into(),
                count: 2
            },
            StateCount {
                state: "NY".into(),
                count: 1
            },
        ]
    );

    let mut gender_ages = dashboard.summary.gender_ages.clone();
    gender_ages.sort_by(|a, b| a.gender.cmp(&b.gender).then(a.age_bucket.cmp(&b.age_bucket)));
    assert_eq!(
        gender_ages,
        vec![
            GenderAgeCount {
                gender: "F".into(),
                age_bucket: AgeBucket::Unknown,
                count: 1
            },
            GenderAgeCount {
                gender: "M".into(),
                age_bucket: AgeBucket::Twenties,
                count: 1
            },
            GenderAgeCount {
                gender: "M".into(),
                age_bucket: AgeBucket::Forties,
                count: 1
            },
        ]
    );
}

#[test]
fn rendered_page_carries_counts_and_charts() {
    let (_dir, settings) = scenario();
    let dashboard = Dashboard::build(&settings).unwrap();

    assert!(dashboard.page.contains("Number of federal cases: 3"));
    assert!(dashboard.page.contains(r#""locations":["VA","NY"]"#));
    assert!(dashboard.page.contains(r#""z":[2,1]"#));
    assert!(dashboard.page.contains(r#""name":"M""#));
    assert!(dashboard.page.contains(r#""name":"F""#));
}

#[test]
fn rebuilding_from_the_same_file_is_identical() {
    let (_dir, settings) = scenario();

    let first = Dashboard::build(&settings).unwrap();
    let second = Dashboard::build(&settings).unwrap();
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.page, second.page);

    let df = CaseLoader::from_settings(&settings).unwrap();
    assert_eq!(DataProcessor::summarize(&df).unwrap(), first.summary);
}

#[test]
fn missing_file_fails_at_startup() {
    let dir = tempdir().unwrap();
    let settings = DashboardSettings {
        data_file: dir.path().join("absent.xlsx"),
        ..Default::default()
    };

    let err = Dashboard::build(&settings).unwrap_err();
    assert!(format!("{err:#}").contains("absent.xlsx"));
}

#[test]
fn wrong_sheet_name_fails_at_startup() {
    let (_dir, mut settings) = scenario();
    settings.sheet_name = "Sheet1".to_string();

    let err = Dashboard::build(&settings).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Sheet1"));
    assert!(message.contains("Capitol Hill"));
}

#[test]
fn malformed_age_fails_during_summaries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cases.xlsx");
    write_cases(
        &path,
        "Capitol Hill",
        &[
            ("VA", "M", Cell::Number(25.0)),
            ("TX", "M", Cell::Text("about forty")),
        ],
    );
    let settings = DashboardSettings {
        data_file: path,
        ..Default::default()
    };

    let err = Dashboard::build(&settings).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("summarizing cases"));
    assert!(message.contains("about forty"));
}
