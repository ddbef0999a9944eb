pub mod controller;
pub mod page;
