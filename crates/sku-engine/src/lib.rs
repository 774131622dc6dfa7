pub mod generate;
pub mod recalc;

pub use generate::generate;
pub use recalc::{MemorySheetStore, RecalcOutcome, SheetStore, recalculate_all};
