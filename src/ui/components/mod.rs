pub mod results_table;
pub mod toast;
