pub mod hive;
pub mod visit_counter;
