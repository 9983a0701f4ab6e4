//! Companies, currencies and market data.

use crate::data::{self, shared, FinanceData};
use crate::error::ProviderError;
use crate::provider::{bind, operation_names, Operation, OperationSpec, Provider};
use faux_core::{Args, Locale, Value};
use faux_random::Random;
use std::sync::Arc;

/// Provider of business and finance data.
#[derive(Debug, Clone)]
pub struct Finance {
    data: Arc<FinanceData>,
}

impl Finance {
    pub fn new(locale: Locale) -> Result<Self, ProviderError> {
        Ok(Self {
            data: Arc::new(data::finance(locale)?),
        })
    }

    pub fn company(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.company.name)?.clone())
    }

    /// Legal form, spelled out or abbreviated.
    pub fn company_type(&self, random: &mut Random, abbr: bool) -> Result<String, ProviderError> {
        let kinds = &self.data.company.kind;
        let pool = if abbr { &kinds.abbr } else { &kinds.title };
        Ok(random.choice(pool)?.clone())
    }

    /// Currency code of the locale, or any ISO 4217 code with `allow_random`.
    pub fn currency_iso_code(&self, random: &mut Random, allow_random: bool) -> Result<String, ProviderError> {
        if allow_random {
            return Ok(random.choice(shared::CURRENCY_ISO_CODES)?.to_string());
        }
        Ok(self.data.currency_code.clone())
    }

    /// Currency symbol of the locale.
    pub fn currency_symbol(&self) -> String {
        self.data.currency_symbol.clone()
    }

    pub fn cryptocurrency_iso_code(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::CRYPTOCURRENCY_ISO_CODES)?.to_string())
    }

    pub fn cryptocurrency_symbol(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::CRYPTOCURRENCY_SYMBOLS)?.to_string())
    }

    /// Price with two decimals.
    pub fn price(&self, random: &mut Random, minimum: f64, maximum: f64) -> Result<f64, ProviderError> {
        check_bounds(minimum, maximum)?;
        Ok(random.uniform(minimum, maximum, 2))
    }

    /// Price in bitcoin with seven decimals.
    pub fn price_in_btc(&self, random: &mut Random, minimum: f64, maximum: f64) -> Result<f64, ProviderError> {
        check_bounds(minimum, maximum)?;
        Ok(random.uniform(minimum, maximum, 7))
    }

    pub fn stock_ticker(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::STOCK_TICKERS)?.to_string())
    }

    pub fn stock_name(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::STOCK_NAMES)?.to_string())
    }

    pub fn stock_exchange(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::STOCK_EXCHANGES)?.to_string())
    }

    pub fn bank(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.banks)?.clone())
    }

    fn op_company(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.company(random)?.into())
    }

    fn op_company_type(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let abbr = args.bool("abbr")?.unwrap_or(false);
        Ok(self.company_type(random, abbr)?.into())
    }

    fn op_currency_iso_code(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let allow_random = args.bool("allow_random")?.unwrap_or(false);
        Ok(self.currency_iso_code(random, allow_random)?.into())
    }

    fn op_currency_symbol(&self, _random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.currency_symbol().into())
    }

    fn op_cryptocurrency_iso_code(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.cryptocurrency_iso_code(random)?.into())
    }

    fn op_cryptocurrency_symbol(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.cryptocurrency_symbol(random)?.into())
    }

    fn op_price(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let minimum = args.f64("minimum")?.unwrap_or(500.0);
        let maximum = args.f64("maximum")?.unwrap_or(1500.0);
        Ok(self.price(random, minimum, maximum)?.into())
    }

    fn op_price_in_btc(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let minimum = args.f64("minimum")?.unwrap_or(0.0);
        let maximum = args.f64("maximum")?.unwrap_or(2.0);
        Ok(self.price_in_btc(random, minimum, maximum)?.into())
    }

    fn op_stock_ticker(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.stock_ticker(random)?.into())
    }

    fn op_stock_name(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.stock_name(random)?.into())
    }

    fn op_stock_exchange(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.stock_exchange(random)?.into())
    }

    fn op_bank(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.bank(random)?.into())
    }
}

static FINANCE_OPERATIONS: &[OperationSpec<Finance>] = &[
    OperationSpec { name: "company", params: &[], method: Finance::op_company },
    OperationSpec { name: "company_type", params: &["abbr"], method: Finance::op_company_type },
    OperationSpec {
        name: "currency_iso_code",
        params: &["allow_random"],
        method: Finance::op_currency_iso_code,
    },
    OperationSpec { name: "currency_symbol", params: &[], method: Finance::op_currency_symbol },
    OperationSpec {
        name: "cryptocurrency_iso_code",
        params: &[],
        method: Finance::op_cryptocurrency_iso_code,
    },
    OperationSpec {
        name: "cryptocurrency_symbol",
        params: &[],
        method: Finance::op_cryptocurrency_symbol,
    },
    OperationSpec { name: "price", params: &["minimum", "maximum"], method: Finance::op_price },
    OperationSpec { name: "price_in_btc", params: &["minimum", "maximum"], method: Finance::op_price_in_btc },
    OperationSpec { name: "stock_ticker", params: &[], method: Finance::op_stock_ticker },
    OperationSpec { name: "stock_name", params: &[], method: Finance::op_stock_name },
    OperationSpec { name: "stock_exchange", params: &[], method: Finance::op_stock_exchange },
    OperationSpec { name: "bank", params: &[], method: Finance::op_bank },
];

impl Provider for Finance {
    fn name(&self) -> &str {
        "finance"
    }

    fn operations(&self) -> Vec<&'static str> {
        operation_names(FINANCE_OPERATIONS)
    }

    fn operation(&self, name: &str) -> Option<Operation> {
        bind(self, FINANCE_OPERATIONS, name)
    }
}

fn check_bounds(minimum: f64, maximum: f64) -> Result<(), ProviderError> {
    if minimum > maximum {
        return Err(ProviderError::invalid(
            "minimum",
            format!("{minimum} exceeds maximum {maximum}"),
        ));
    }
    Ok(())
}
