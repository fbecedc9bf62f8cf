use mintscope::domain::{MintLookup, MintMetadata, PairSnapshot, UnavailableReason};
use rust_decimal_macros::dec;

pub const MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

pub fn make_pair() -> PairSnapshot {
    PairSnapshot {
        symbol: Some("BONK".into()),
        name: Some("Bonk".into()),
        price_usd: Some(dec!(1.2)),
        price_native: Some(dec!(0.0071)),
        liquidity_usd: Some(dec!(1234567.891)),
        volume_24h_usd: Some(dec!(42000)),
        chart_url: url::Url::parse("https://dexscreener.com/solana/pair123").ok(),
        logo_url: None,
    }
}

pub fn make_mint(decimals: u8, raw_supply: u64) -> MintLookup {
    MintLookup::Found(MintMetadata::from_raw(Some(decimals), raw_supply))
}

pub fn unavailable_mint() -> MintLookup {
    MintLookup::Unavailable(UnavailableReason::Transport("connection refused".into()))
}
