/// Use cases module containing application business logic orchestration
mod extract_sbom;
mod list_resources;

pub use extract_sbom::ExtractSbomUseCase;
pub use list_resources::ListResourcesUseCase;
