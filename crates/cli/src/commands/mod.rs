pub mod generate;
pub mod markers;
pub mod package;
pub mod results;
pub mod run;
pub mod util;

pub use generate::*;
pub use markers::*;
pub use package::*;
pub use results::*;
pub use run::*;
pub use util::*;
