//! Transaction and order signing
//!
//! Canonical byte layouts for asset transfers and exchange orders, the
//! signer that turns them into Base58 signatures, and the asset id helpers
//! both share. Signed objects are handed back to the caller; broadcasting
//! them is somebody else's job.

pub mod assets;
pub mod order;
pub mod signer;
pub mod transaction;

pub use assets::{
    asset_id_bytes, compare_assets, optional_asset_bytes, required_asset_bytes, ASSET_ID_LEN,
};
pub use order::{post_to_dex, sign_order, AssetPair, Order, OrderPayload, OrderRequest, OrderType};
pub use signer::{sign_bytes, verify_signature};
pub use transaction::{
    send_asset, sign_transfer, TransferPayload, TransferRequest, TransferTransaction,
    TRANSFER_TRANSACTION_TYPE,
};
