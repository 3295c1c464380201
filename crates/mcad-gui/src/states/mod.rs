mod analysis;
mod ui;
mod viewport;

pub use analysis::AnalysisState;
pub use ui::{DetailsTab, UIState};
pub use viewport::ViewportState;
