pub mod enums;
pub mod models;
pub mod requests;
pub mod stats;
pub mod validation;
pub mod views;

pub use enums::*;
pub use models::*;
pub use requests::*;
pub use stats::{kill_death_ratio, winrate};
pub use validation::{Validate, ValidationResult};
pub use views::*;
