mod descriptor;
mod satisfaction;

pub use descriptor::CompliancePredicate;
