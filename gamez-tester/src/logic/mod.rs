pub mod data;
pub mod reports;
pub mod tester;

pub use data::{DirData, load_hub_data};
pub use tester::*;
