//! Alert Collection Loading
//!
//! Reads the desired alert declaration (YAML) and the live-system snapshot
//! (JSON), and renders reconcile plans for output.

mod current;
mod desired;
mod error;
mod render;

pub use current::{load_current_from_file, load_current_from_str, CurrentAlerts};
pub use desired::{load_desired_from_file, load_desired_from_str, DesiredAlerts};
pub use error::LoadError;
pub use render::{render_plan, OutputFormat};
