// Parsing and aggregation pipeline for contention benchmark logs
pub mod averager;
pub mod csv_report;
pub mod grouper;
pub mod profiles;
pub mod record;
pub mod record_parser;
pub mod report_runner;
pub mod segmenter;
