//! Output surfaces: the concatenated artifact and human/machine views of a build plan.

#![forbid(unsafe_code)]

mod emit;
mod markdown;
mod model;
mod text;

pub use emit::{emit, EmitError, EmitSummary, LINE_SEPARATOR};
pub use markdown::render_order_markdown;
pub use model::{PlanEntry, RenderablePlan};
pub use text::{render_order_json, render_order_text};
