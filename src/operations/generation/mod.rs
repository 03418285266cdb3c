mod boundary;
mod bracing;
mod nogging;
mod openings;
mod panel;
mod studs;

pub use boundary::ExtractBoundary;
pub use bracing::BraceCorners;
pub use nogging::{bay_verticals, LayoutNogging};
pub use openings::FrameOpenings;
pub use panel::BuildPanel;
pub use studs::{bay_count, LayoutStuds, MAX_BAYS};
