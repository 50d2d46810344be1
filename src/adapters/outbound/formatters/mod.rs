/// Report formatters
mod csv_formatter;

pub use csv_formatter::CsvReportFormatter;
