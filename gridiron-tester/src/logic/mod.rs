pub mod checks;
pub mod reports;
pub mod rosters;
pub mod tester;

pub use checks::list_checks;
pub use rosters::Rosters;
pub use tester::*;
