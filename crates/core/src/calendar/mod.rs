//! Calendar month-grid construction and item merge/filter logic

mod grid;
mod view;

pub use grid::{build_month_grid, date_key, grid_from_month_data, is_today};
pub use view::{filtered_items, visible_items, MonthIndex, VisibleItems};
