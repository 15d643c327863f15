// Resume analysis: input extraction, the completion call, coercion of the
// reply and the downloadable report.

pub mod analyzer;
pub mod coercion;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod report;
