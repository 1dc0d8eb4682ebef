pub mod advisors;
pub mod compatibility;
pub mod core_numbers;
pub mod dasha;
pub mod grid;
pub mod harmony;
pub mod name_table;
pub mod position;
pub mod yog;
