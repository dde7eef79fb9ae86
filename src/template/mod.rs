pub mod copier;
pub mod operation;
pub mod substitution;

pub use copier::{CopySummary, TemplateCopier};
pub use substitution::{replace_in_file, substitute_targets, SubstitutionMap};
