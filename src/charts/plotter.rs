//! Chart Plotter Module
//! Builds the dashboard's two Plotly figures from the case summaries.

use crate::charts::figure::{
    Axis, BarTrace, ChoroplethTrace, ColorBar, ColorScale, Figure, Geo, Layout, Legend, Marker,
    Title, Trace,
};
use crate::data::{GenderAgeCount, StateCount};

pub const MAP_TITLE: &str = "Number of Cases per State of Residence";
pub const BAR_TITLE: &str = "Age at time of arrest";

/// Gender colors, assigned in order of first appearance.
pub const PALETTE: [&str; 2] = ["Grey", "LightGrey"];

/// Sequential greys, light to dark.
const GREYS: [&str; 9] = [
    "rgb(255,255,255)",
    "rgb(240,240,240)",
    "rgb(217,217,217)",
    "rgb(189,189,189)",
    "rgb(150,150,150)",
    "rgb(115,115,115)",
    "rgb(82,82,82)",
    "rgb(37,37,37)",
    "rgb(0,0,0)",
];

/// Creates the dashboard figures.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for the n-th gender trace.
    pub fn get_group_color(group_index: usize) -> &'static str {
        PALETTE[group_index % PALETTE.len()]
    }

    /// Evenly spaced greys colorscale.
    pub fn greys_scale() -> ColorScale {
        let last = (GREYS.len() - 1) as f64;
        GREYS
            .iter()
            .enumerate()
            .map(|(i, color)| (i as f64 / last, color.to_string()))
            .collect()
    }

    /// Choropleth of case counts over US states.
    pub fn state_map(states: &[StateCount]) -> Figure {
        let trace = ChoroplethTrace {
            locations: states.iter().map(|s| s.state.clone()).collect(),
            z: states.iter().map(|s| s.count).collect(),
            locationmode: "USA-states".to_string(),
            colorscale: Self::greys_scale(),
            colorbar: ColorBar {
                title: Title::new("Count"),
            },
            hovertemplate: "State=%{location}<br>Count=%{z}<extra></extra>".to_string(),
        };

        Figure {
            data: vec![Trace::Choropleth(trace)],
            layout: Layout {
                title: Some(Title::new(MAP_TITLE)),
                geo: Some(Geo {
                    scope: "usa".to_string(),
                }),
                ..Default::default()
            },
        }
    }

    /// Horizontal stacked bars of case counts per age range, one trace per gender.
    ///
    /// Rows keep the order of `counts`; the y axis lists age ranges in the
    /// order they first appear.
    pub fn age_gender_bars(counts: &[GenderAgeCount]) -> Figure {
        let mut traces: Vec<BarTrace> = Vec::new();
        let mut categories: Vec<String> = Vec::new();

        for row in counts {
            let label = row.age_bucket.label().to_string();
            if !categories.contains(&label) {
                categories.push(label.clone());
            }

            let idx = match traces.iter().position(|t| t.name == row.gender) {
                Some(idx) => idx,
                None => {
                    traces.push(BarTrace {
                        name: row.gender.clone(),
                        legendgroup: row.gender.clone(),
                        orientation: "h".to_string(),
                        x: Vec::new(),
                        y: Vec::new(),
                        marker: Marker {
                            color: Self::get_group_color(traces.len()).to_string(),
                        },
                    });
                    traces.len() - 1
                }
            };
            traces[idx].x.push(row.count);
            traces[idx].y.push(label);
        }

        Figure {
            data: traces.into_iter().map(Trace::Bar).collect(),
            layout: Layout {
                title: Some(Title::new(BAR_TITLE)),
                barmode: Some("stack".to_string()),
                xaxis: Some(Axis::default()),
                yaxis: Some(Axis {
                    title: Title::default(),
                    categoryorder: Some("array".to_string()),
                    categoryarray: Some(categories),
                }),
                legend: Some(Legend {
                    title: Title::new("Gender"),
                }),
                ..Default::default()
            },
        }
    }
}
