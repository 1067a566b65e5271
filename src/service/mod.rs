pub mod game_report;
pub mod permission;
pub mod report_setup;
