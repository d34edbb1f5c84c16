//! The quote term structure supplied by the market-data collaborator.
//!
//! Upstream guarantees the economic sanity of the quotes (rates above −100 %,
//! positive vols); this module only enforces structural completeness and
//! derives the zero-coupon price targets once, at construction.

use std::collections::BTreeMap;

use bdt_core::{
    errors::{Error, Result},
    Price, Rate, Volatility,
};

use crate::zero_coupon::zero_coupon_price;

/// A single market quote: the zero rate and short-rate volatility at a tenor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateVolQuote {
    /// Zero rate as a decimal (0.05 = 5 %).
    pub rate: Rate,
    /// Short-rate volatility as a decimal.
    pub vol: Volatility,
}

/// A contiguous term structure of (zero rate, volatility) quotes.
///
/// Quotes cover integer tenors `1..=max_tenor` with no gaps. The target
/// zero-coupon prices — `100·(1+rate)^(−tenor)` per tenor — are computed at
/// construction and never mutated; they are what the lattice calibration
/// reproduces.
#[derive(Debug, Clone)]
pub struct QuoteTermStructure {
    /// Quote at tenor `i + 1`.
    quotes: Vec<RateVolQuote>,
    /// Target price for the bond maturing at tenor `i + 1`.
    zcb_prices: Vec<Price>,
}

impl QuoteTermStructure {
    /// Build from quotes already laid out on the contiguous grid:
    /// `quotes[i]` is the quote at tenor `i + 1`.
    pub fn new(quotes: Vec<RateVolQuote>) -> Result<Self> {
        if quotes.is_empty() {
            return Err(Error::InvalidInput("quote set is empty".into()));
        }
        for (i, q) in quotes.iter().enumerate() {
            let tenor = i + 1;
            if q.rate <= -1.0 {
                return Err(Error::InvalidInput(format!(
                    "rate {} at tenor {tenor} is at or below -100 %",
                    q.rate
                )));
            }
            if q.vol <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "volatility {} at tenor {tenor} is not positive",
                    q.vol
                )));
            }
        }
        let zcb_prices = quotes
            .iter()
            .enumerate()
            .map(|(i, q)| zero_coupon_price(q.rate, i + 1))
            .collect();
        Ok(Self { quotes, zcb_prices })
    }

    /// Build from a tenor-keyed map, requiring every tenor `1..=max_tenor`.
    pub fn from_map(quotes: &BTreeMap<usize, RateVolQuote>, max_tenor: usize) -> Result<Self> {
        if max_tenor == 0 {
            return Err(Error::InvalidInput("max_tenor must be at least 1".into()));
        }
        let grid = (1..=max_tenor)
            .map(|tenor| {
                quotes.get(&tenor).copied().ok_or_else(|| {
                    Error::InvalidInput(format!("quote set is missing tenor {tenor}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(grid)
    }

    /// The largest quoted tenor (= number of lattice levels to build).
    pub fn max_tenor(&self) -> usize {
        self.quotes.len()
    }

    /// Quote at `tenor`.
    ///
    /// # Panics
    /// Panics if `tenor` is outside `1..=max_tenor`.
    pub fn quote(&self, tenor: usize) -> &RateVolQuote {
        &self.quotes[tenor - 1]
    }

    /// Zero rate at `tenor`.
    ///
    /// # Panics
    /// Panics if `tenor` is outside `1..=max_tenor`.
    pub fn rate(&self, tenor: usize) -> Rate {
        self.quotes[tenor - 1].rate
    }

    /// Short-rate volatility at `tenor`.
    ///
    /// # Panics
    /// Panics if `tenor` is outside `1..=max_tenor`.
    pub fn vol(&self, tenor: usize) -> Volatility {
        self.quotes[tenor - 1].vol
    }

    /// Target zero-coupon price for the bond maturing at `tenor`.
    ///
    /// # Panics
    /// Panics if `tenor` is outside `1..=max_tenor`.
    pub fn zero_coupon_price(&self, tenor: usize) -> Price {
        self.zcb_prices[tenor - 1]
    }
}
