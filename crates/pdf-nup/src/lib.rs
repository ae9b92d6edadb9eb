pub mod compose;
pub mod constants;
pub mod layout;
pub mod nup;
pub mod overlay;
pub mod render;
mod options;
mod stats;
mod types;

pub use compose::{Canvas, Compositor, compose};
pub use nup::{load_pdf, nup, nup_sync, prepare_output_path, save_pdf};
pub use options::*;
pub use stats::{calculate_statistics, plan_statistics};
pub use types::*;
