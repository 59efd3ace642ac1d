//! Dashboard Page
//! Two text blocks over two charts, laid out on a Bootstrap grid.
//!
//! Layout:
//! 1. Row: title block (8 columns) | attribution block
//! 2. Row: state choropleth | age/gender bar chart

use crate::charts::Figure;
use crate::data::CaseSummary;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use thiserror::Error;

pub const PAGE_TITLE: &str = "THE CAPITOL HILL SIEGE";
pub const THEME_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootswatch@4.5.2/dist/superhero/bootstrap.min.css";
pub const PLOTLY_URL: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

pub const MAP_ID: &str = "map";
pub const BAR_ID: &str = "bar";

const CONTENT_STYLE: &str = "padding: 2rem 1rem; font-family: \"Times New Roman\", Times, serif";
const UNIVERSITY_STYLE: &str = "text-decoration: underline overline solid gold";

const NOTE: &str = "Note: The data depicted were collected from federal cases only. \
A collection of individuals charged in the District of Columbia is available on the \
Program on Extremism's website, but data were not gathered from these cases due to \
inconsistencies in available documents and reporting.";

const PROGRAM: &str = "Program on Extremism";
const UNIVERSITY: &str = "THE GEORGE WASHINGTON UNIVERSITY";
const UPDATED: &str = "Updated: January 17, 2021";

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Failed to serialize chart '{id}': {source}")]
    Json {
        id: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// "Number of federal cases: N"
pub fn overview_message(summary: &CaseSummary) -> String {
    format!("Number of federal cases: {}", summary.total_cases)
}

/// Render the full dashboard page.
pub fn render_page(
    summary: &CaseSummary,
    map: &Figure,
    bar: &Figure,
) -> Result<String, PageError> {
    let map_chart = chart(MAP_ID, map)?;
    let bar_chart = chart(BAR_ID, bar)?;

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                link rel="stylesheet" href=(THEME_URL);
                script src=(PLOTLY_URL) {}
            }
            body {
                div.container-fluid style=(CONTENT_STYLE) {
                    div.row {
                        div class="col-8" { (title_block(summary)) }
                        div.col { (attribution_block()) }
                    }
                    div.row {
                        div.col { (map_chart) }
                        div.col { (bar_chart) }
                    }
                }
            }
        }
    };

    Ok(page.into_string())
}

fn title_block(summary: &CaseSummary) -> Markup {
    html! {
        div {
            h2 { (PAGE_TITLE) }
            h4 { (overview_message(summary)) }
            div { (NOTE) }
        }
    }
}

fn attribution_block() -> Markup {
    html! {
        div {
            h3 { (PROGRAM) }
            h6 style=(UNIVERSITY_STYLE) { (UNIVERSITY) }
            p { (UPDATED) }
        }
    }
}

/// Chart container plus the inline script that draws the figure into it.
fn chart(id: &'static str, figure: &Figure) -> Result<Markup, PageError> {
    let json = figure
        .to_json()
        .map_err(|source| PageError::Json { id, source })?
        // keep the JSON from closing the surrounding <script>
        .replace("</", "<\\/");

    Ok(html! {
        div id=(id) {}
        script {
            (PreEscaped(format!("Plotly.newPlot(\"{id}\", {json});")))
        }
    })
}
