pub mod auth;
pub mod company;
pub mod dashboard;
pub mod employee;
pub mod invoice;
pub mod report;
pub mod role;
pub mod transaction;
