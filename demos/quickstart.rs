// Generate a seed, derive its keys and round-trip it through encryption
use log::{error, LevelFilter};
use std::process;
use waves_wallet_core::{TransferRequest, WalletApi};

fn main() {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    if let Err(e) = run() {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let api = WalletApi::default();

    let seed = api.generate_new_seed(15)?;
    println!("Seed: {seed}");

    let address = api.get_address(&seed)?;
    println!("Address: {address}");
    println!("Public key: {}", api.get_public_key(&seed));

    let password = "test_password";
    let encrypted = api.encrypt_seed_phrase(&seed, password)?;
    println!("Encrypted seed with \"{password}\" : {encrypted}");

    let decrypted = api.decrypt_seed_phrase(&encrypted, password)?;
    println!("Decrypted seed with \"{password}\" : {decrypted}");

    let transfer = api.send_asset(
        &seed,
        &TransferRequest {
            asset_id: None,
            recipient: &address,
            amount: 100_000_000,
            attachment: "quickstart",
        },
    )?;
    println!("Signed transfer: {transfer:?}");

    Ok(())
}
