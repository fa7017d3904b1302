mod catalog;
mod run;

pub use catalog::Catalog;
pub use run::Run;
