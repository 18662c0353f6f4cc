pub mod api;
pub mod calendar;
pub mod db;
pub mod paths;
