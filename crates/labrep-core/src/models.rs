pub mod flag;
pub mod organization;
pub mod patient;
pub mod range;
pub mod report;
pub mod result;
pub mod snapshot;
pub mod test_order;
