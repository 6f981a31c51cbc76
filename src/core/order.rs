// Exchange orders destined for an external matcher.

use super::assets::required_asset_bytes;
use super::signer::sign_bytes;
use crate::account::{decode_public_key, KeyPair};
use crate::error::{Result, WalletError};
use crate::utils::{concat_bytes, long_to_bytes, RandomSource};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Buy,
    Sell,
}

impl OrderType {
    pub fn as_byte(self) -> u8 {
        match self {
            OrderType::Buy => 0,
            OrderType::Sell => 1,
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OrderType::Buy => write!(f, "buy"),
            OrderType::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for OrderType {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "buy" => Ok(OrderType::Buy),
            "sell" => Ok(OrderType::Sell),
            other => Err(WalletError::InvalidArgument(format!(
                "Unknown order type: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair {
    pub amount_asset: String,
    pub price_asset: String,
}

/// Fields of an order in signing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPayload<'a> {
    pub sender_public_key: &'a str,
    pub matcher_public_key: &'a str,
    pub amount_asset: &'a str,
    pub price_asset: &'a str,
    pub order_type: OrderType,
    pub price: u64,
    pub amount: u64,
    pub timestamp: u64,
    pub expiration: u64,
    pub matcher_fee: u64,
}

impl OrderPayload<'_> {
    pub fn signing_bytes(&self) -> Result<Vec<u8>> {
        let sender = decode_public_key(self.sender_public_key)?;
        let matcher = decode_public_key(self.matcher_public_key)?;
        let amount_asset = required_asset_bytes(self.amount_asset)?;
        let price_asset = required_asset_bytes(self.price_asset)?;

        Ok(concat_bytes(&[
            &sender[..],
            &matcher[..],
            &amount_asset[..],
            &price_asset[..],
            &[self.order_type.as_byte()][..],
            &long_to_bytes(self.price)[..],
            &long_to_bytes(self.amount)[..],
            &long_to_bytes(self.timestamp)[..],
            &long_to_bytes(self.expiration)[..],
            &long_to_bytes(self.matcher_fee)[..],
        ]))
    }
}

/// What the caller asks the matcher to fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRequest<'a> {
    pub matcher_public_key: &'a str,
    pub amount_asset: &'a str,
    pub price_asset: &'a str,
    pub order_type: OrderType,
    pub price: u64,
    pub amount: u64,
    pub matcher_fee: u64,
}

/// Signed order, ready for an external matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub sender_public_key: String,
    pub matcher_public_key: String,
    pub asset_pair: AssetPair,
    pub order_type: OrderType,
    pub price: u64,
    pub amount: u64,
    pub timestamp: u64,
    pub expiration: u64,
    pub matcher_fee: u64,
    pub signature: String,
}

/// Sign an order valid for `ttl_ms` after `timestamp`
pub fn sign_order<R: RandomSource + ?Sized>(
    key_pair: &KeyPair,
    request: &OrderRequest<'_>,
    timestamp: u64,
    ttl_ms: u64,
    random: &R,
) -> Result<Order> {
    let expiration = timestamp.checked_add(ttl_ms).ok_or_else(|| {
        WalletError::InvalidArgument("Order expiration overflows".to_string())
    })?;
    let sender_public_key = key_pair.public_key_base58();

    let payload = OrderPayload {
        sender_public_key: &sender_public_key,
        matcher_public_key: request.matcher_public_key,
        amount_asset: request.amount_asset,
        price_asset: request.price_asset,
        order_type: request.order_type,
        price: request.price,
        amount: request.amount,
        timestamp,
        expiration,
        matcher_fee: request.matcher_fee,
    };
    let signature = sign_bytes(key_pair, &payload.signing_bytes()?, random)?;

    log::debug!(
        "Signed {} order for {} at {} expiring {}",
        request.order_type,
        request.amount,
        request.price,
        expiration
    );

    Ok(Order {
        sender_public_key,
        matcher_public_key: request.matcher_public_key.to_string(),
        asset_pair: AssetPair {
            amount_asset: request.amount_asset.to_string(),
            price_asset: request.price_asset.to_string(),
        },
        order_type: request.order_type,
        price: request.price,
        amount: request.amount,
        timestamp,
        expiration,
        matcher_fee: request.matcher_fee,
        signature,
    })
}

/// Derive the sender from `seed_phrase` and sign the order
pub fn post_to_dex<R: RandomSource + ?Sized>(
    seed_phrase: &str,
    request: &OrderRequest<'_>,
    timestamp: u64,
    ttl_ms: u64,
    random: &R,
) -> Result<Order> {
    let key_pair = KeyPair::from_seed_phrase(seed_phrase);
    sign_order(&key_pair, request, timestamp, ttl_ms, random)
}
