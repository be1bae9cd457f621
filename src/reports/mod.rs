mod grid;
mod tables;

pub use self::grid::print_key as print_key_grid;
pub use self::tables::{score as print_score_report, solve_summary as print_solve_summary};
