/// Network adapters for the BoostSecurity SBOM inventory API
mod boost_client;
mod queries;

pub use boost_client::BoostApiClient;
