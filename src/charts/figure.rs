//! Plotly Figure Model
//! Serializable subset of the plotly.js figure schema used by the dashboard.

use serde::Serialize;

/// A complete figure: traces plus layout, as passed to `Plotly.newPlot`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Choropleth(ChoroplethTrace),
    Bar(BarTrace),
}

/// Plotly colorscale: (position in 0..=1, css color) stops.
pub type ColorScale = Vec<(f64, String)>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
    pub locations: Vec<String>,
    pub z: Vec<u64>,
    pub locationmode: String,
    pub colorscale: ColorScale,
    pub colorbar: ColorBar,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub name: String,
    pub legendgroup: String,
    pub orientation: String,
    pub x: Vec<u64>,
    pub y: Vec<String>,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
    pub scope: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryorder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoryarray: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn traces_are_tagged_with_plotly_type() {
        let trace = Trace::Bar(BarTrace {
            name: "M".into(),
            legendgroup: "M".into(),
            orientation: "h".into(),
            x: vec![3],
            y: vec!["<20".into()],
            marker: Marker {
                color: "Grey".into(),
            },
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], json!("bar"));
        assert_eq!(value["orientation"], json!("h"));
        assert_eq!(value["marker"]["color"], json!("Grey"));
    }

    #[test]
    fn unset_layout_sections_are_omitted() {
        let layout = Layout {
            title: Some(Title::new("Chart")),
            ..Default::default()
        };

        let value = serde_json::to_value(&layout).unwrap();
        assert_eq!(value, json!({ "title": { "text": "Chart" } }));
    }

    #[test]
    fn colorscale_stops_serialize_as_pairs() {
        let trace = ChoroplethTrace {
            locations: vec!["VA".into()],
            z: vec![2],
            locationmode: "USA-states".into(),
            colorscale: vec![(0.0, "white".into()), (1.0, "black".into())],
            colorbar: ColorBar {
                title: Title::new("Count"),
            },
            hovertemplate: String::new(),
        };

        let value = serde_json::to_value(Trace::Choropleth(trace)).unwrap();
        assert_eq!(value["type"], json!("choropleth"));
        assert_eq!(value["colorscale"], json!([[0.0, "white"], [1.0, "black"]]));
    }
}
