//! Domain data types exchanged with the outage API

pub mod outage;
pub mod report;
pub mod site;

pub use outage::*;
pub use report::*;
pub use site::*;
