#![doc = "Gridmander public API"]
mod grid;
mod plan;

#[doc(inline)]
pub use grid::{Cell, perimeter};

#[doc(inline)]
pub use plan::{CompactnessReport, District, MetricsReport, Plan};
