pub mod skill;
pub mod frequency;
pub mod comparison;
pub mod analysis;

pub use skill::*;
pub use frequency::*;
pub use comparison::*;
pub use analysis::*;
