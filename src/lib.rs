//! Circular progress indicator widget drawn through femtovg.
//!
//! The widget itself ([`ui::widgets::CircleProgressView`]) only talks to the
//! [`ui::widgets::DrawContext`] trait; [`ui::canvas::FemtovgSurface`] is the
//! femtovg implementation used by the demo host in [`ui::run_ui`].

pub mod logging;
pub mod progress;
pub mod ui;
