// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the figure model and its PNG/SVG/HTML renderers.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod format;
pub mod error;
pub mod hit;
pub mod pie;
pub mod table;
pub mod figure;
pub mod html;

pub use chart::{Annotation, Band, CategoryAxis, Chart, LegendPos, RefLine, RefOrientation};
pub use series::{Dataset, Fill, LabelPlacement, LineStyle, Marker, Series, SeriesKind};
pub use axis::Axis;
pub use view::ViewState;
pub use theme::{Palette, Theme};
pub use text::{Anchor, HAlign, TextShaper, VAlign};
pub use format::ValueFormat;
pub use error::{ChartError, Result};
pub use hit::{HitRegion, HitShape};
pub use pie::{PieChart, Sunburst};
pub use table::Table;
pub use figure::{Figure, Panel, RenderOptions};
pub use skia_safe::Color;
