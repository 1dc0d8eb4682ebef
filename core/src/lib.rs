pub mod digits;
pub mod error;
pub mod input;
pub mod model;
pub mod service;
pub mod time;
pub mod usecase;

pub use digits::reduce_to_single_digit;
pub use error::InputError;
pub use input::{expand_key, parse_args, ParsedInput};
pub use model::analysis::{CompatibilityRating, GridAnalysis};
pub use model::numbers::{Calculations, CoreNumbers};
pub use model::report::ReportData;
pub use model::user::{Gender, UserInput};
pub use service::compatibility::classify;
pub use service::core_numbers::calculate_core_numbers;
pub use service::grid::{build_grid, GridFlavor};
pub use time::{normalize_date_input, normalize_mobile_input, parse_birth_date};
pub use usecase::report::generate_report;
