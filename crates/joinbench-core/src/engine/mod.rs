pub mod driver;
pub mod scenario;

pub use driver::Driver;
pub use scenario::ScenarioRunner;
