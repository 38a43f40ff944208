use crate::infra::{load_network_records, InMemoryNetworkRepository};
use cardnet::cards::{CardValidationService, IssuingNetworkRecord};
use cardnet::config::NetworkSourceConfig;
use cardnet::error::AppError;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Card number to classify (digits only for a successful classification)
    pub(crate) card_number: String,
    /// Load issuing-network rules from a CSV catalog instead of the built-in seed
    #[arg(long)]
    pub(crate) networks_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct NetworksArgs {
    /// Load issuing-network rules from a CSV catalog instead of the built-in seed
    #[arg(long)]
    pub(crate) networks_csv: Option<PathBuf>,
}

fn records_for(networks_csv: Option<PathBuf>) -> Result<Vec<IssuingNetworkRecord>, AppError> {
    let source = NetworkSourceConfig {
        csv_path: networks_csv,
    };
    load_network_records(&source)
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let records = records_for(args.networks_csv)?;
    let repository = Arc::new(InMemoryNetworkRepository::with_records(records));
    let service = CardValidationService::new(repository);

    let outcome = service.validate(&args.card_number)?;
    let result = outcome.result();

    println!("Outcome: {}", outcome.label());
    println!("Network: {}", result.network);
    println!("Checksum valid: {}", result.checksum_valid);

    Ok(())
}

pub(crate) fn run_networks(args: NetworksArgs) -> Result<(), AppError> {
    let records = records_for(args.networks_csv)?;

    println!("Configured issuing networks (matching precedence order)");
    for record in &records {
        let prefixes = record.starts_with_numbers.as_deref().unwrap_or("-");
        let range = record.in_range.as_deref().unwrap_or("-");
        println!(
            "- [{}] {} | prefixes: {} | range: {} | lengths: {}",
            record.id, record.name, prefixes, range, record.allowed_lengths
        );
    }

    Ok(())
}
