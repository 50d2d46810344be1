/// SBOM extraction domain layer
///
/// Pure business logic for the inventory export workflow: catalog grouping,
/// selection resolution, row flattening, and progress milestones.
pub mod domain;
