/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist here: the application core drives
/// the inventory API, the catalog file, report output, and the console
/// through these interfaces.
pub mod outbound;
