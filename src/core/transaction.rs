// Asset transfers: the canonical bytes that get signed and the signed object
// handed to a broadcaster. Nothing here checks balances or talks to a node.

use super::assets::optional_asset_bytes;
use super::signer::sign_bytes;
use crate::account::{decode_public_key, KeyPair};
use crate::error::Result;
use crate::utils::{
    base58_decode, base58_encode, bytes_with_size, concat_bytes, long_to_bytes, RandomSource,
};
use serde::Serialize;

pub const TRANSFER_TRANSACTION_TYPE: u8 = 4;

/// Fields of a transfer in signing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayload<'a> {
    pub sender_public_key: &'a str,
    pub asset_id: Option<&'a str>,
    pub fee_asset_id: Option<&'a str>,
    pub timestamp: u64,
    pub amount: u64,
    pub fee: u64,
    pub recipient: &'a str,
    pub attachment: &'a str,
}

impl TransferPayload<'_> {
    /// `type ++ sender ++ asset ++ fee asset ++ timestamp ++ amount ++ fee ++
    /// recipient ++ sized attachment`
    pub fn signing_bytes(&self) -> Result<Vec<u8>> {
        let sender = decode_public_key(self.sender_public_key)?;
        let asset = optional_asset_bytes(self.asset_id)?;
        let fee_asset = optional_asset_bytes(self.fee_asset_id)?;
        let recipient = base58_decode(self.recipient)?;
        let attachment = bytes_with_size(self.attachment.as_bytes())?;

        Ok(concat_bytes(&[
            &[TRANSFER_TRANSACTION_TYPE][..],
            &sender[..],
            &asset[..],
            &fee_asset[..],
            &long_to_bytes(self.timestamp)[..],
            &long_to_bytes(self.amount)[..],
            &long_to_bytes(self.fee)[..],
            &recipient[..],
            &attachment[..],
        ]))
    }
}

/// What the caller asks to transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferRequest<'a> {
    pub asset_id: Option<&'a str>,
    pub recipient: &'a str,
    pub amount: u64,
    pub attachment: &'a str,
}

/// Signed transfer, ready for an external broadcaster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTransaction {
    pub sender_public_key: String,
    pub asset_id: Option<String>,
    pub timestamp: u64,
    pub amount: u64,
    pub fee: u64,
    pub recipient: String,
    /// Base58 of the attachment bytes
    pub attachment: String,
    pub signature: String,
}

pub fn sign_transfer<R: RandomSource + ?Sized>(
    key_pair: &KeyPair,
    request: &TransferRequest<'_>,
    fee: u64,
    timestamp: u64,
    random: &R,
) -> Result<TransferTransaction> {
    let sender_public_key = key_pair.public_key_base58();
    let asset_id = request.asset_id.filter(|id| !id.is_empty());

    let payload = TransferPayload {
        sender_public_key: &sender_public_key,
        asset_id,
        fee_asset_id: None,
        timestamp,
        amount: request.amount,
        fee,
        recipient: request.recipient,
        attachment: request.attachment,
    };
    let signature = sign_bytes(key_pair, &payload.signing_bytes()?, random)?;

    log::debug!(
        "Signed transfer of {} to {} from {}",
        request.amount,
        request.recipient,
        sender_public_key
    );

    Ok(TransferTransaction {
        sender_public_key,
        asset_id: asset_id.map(str::to_string),
        timestamp,
        amount: request.amount,
        fee,
        recipient: request.recipient.to_string(),
        attachment: base58_encode(request.attachment.as_bytes()),
        signature,
    })
}

/// Derive the sender from `seed_phrase` and sign the transfer
pub fn send_asset<R: RandomSource + ?Sized>(
    seed_phrase: &str,
    request: &TransferRequest<'_>,
    fee: u64,
    timestamp: u64,
    random: &R,
) -> Result<TransferTransaction> {
    let key_pair = KeyPair::from_seed_phrase(seed_phrase);
    sign_transfer(&key_pair, request, fee, timestamp, random)
}
