//! Batch renaming of calendar images.
//!
//! Files named `<month>-<size>.<ext>` are renamed to
//! `<year>_<month index>_<top|bottom>.<ext>`. Renames happen immediately,
//! one by one: there is no dry run, and nothing is undone if a later
//! rename fails.

pub mod month;
pub mod plan;

pub use month::{month_index, MONTHS};
pub use plan::{
    apply, plan_directory, target_name, CalendarImage, FileMatcher, PlanOptions, Position,
    RenamePlan,
};
