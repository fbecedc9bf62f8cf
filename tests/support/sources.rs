use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use mintscope::domain::{CandidateAddress, MintLookup, PairLookup, PairSnapshot};
use mintscope::error::{Error, Result};
use mintscope::port::{MarketDataSource, MintMetadataSource};

#[derive(Clone)]
enum MarketBehavior {
    Found(PairSnapshot),
    NotFound,
    Fail,
}

/// Market data source with a canned answer and a call counter.
#[derive(Clone)]
pub struct StubMarket {
    behavior: MarketBehavior,
    calls: Arc<AtomicUsize>,
}

impl StubMarket {
    fn with(behavior: MarketBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn found(pair: PairSnapshot) -> Self {
        Self::with(MarketBehavior::Found(pair))
    }

    pub fn not_found() -> Self {
        Self::with(MarketBehavior::NotFound)
    }

    pub fn failing() -> Self {
        Self::with(MarketBehavior::Fail)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketDataSource for StubMarket {
    async fn lookup_pair(&self, _address: &CandidateAddress) -> Result<PairLookup> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MarketBehavior::Found(pair) => Ok(PairLookup::found(pair.clone())),
            MarketBehavior::NotFound => Ok(PairLookup::NotFound),
            MarketBehavior::Fail => Err(Error::Upstream("market unavailable".into())),
        }
    }

    fn source_name(&self) -> &'static str {
        "stub"
    }
}

/// Mint metadata source with a canned answer and a call counter.
#[derive(Clone)]
pub struct StubChain {
    lookup: MintLookup,
    calls: Arc<AtomicUsize>,
}

impl StubChain {
    pub fn new(lookup: MintLookup) -> Self {
        Self {
            lookup,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MintMetadataSource for StubChain {
    async fn mint_metadata(&self, _address: &CandidateAddress) -> MintLookup {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.lookup.clone()
    }
}
