//! Relational records held by the chart store

mod chart;
mod dataset;
mod entity;
mod logo;
mod redirect;
mod variable;

pub use chart::{Chart, ChartType};
pub use dataset::{Dataset, DatasetCategory, DatasetSubcategory, Source};
pub use entity::{DataValue, Entity};
pub use logo::Logo;
pub use redirect::ChartSlugRedirect;
pub use variable::{Variable, VariableType};
