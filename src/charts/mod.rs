//! Charts module - Plotly figure specifications

mod figure;
mod plotter;

pub use figure::{
    Axis, BarTrace, ChoroplethTrace, ColorBar, ColorScale, Figure, Geo, Layout, Legend, Marker,
    Title, Trace,
};
pub use plotter::{ChartPlotter, BAR_TITLE, MAP_TITLE, PALETTE};
