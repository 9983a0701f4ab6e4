//! Dutch identifiers.

use crate::error::ProviderError;
use crate::provider::{bind, operation_names, Operation, OperationSpec, Provider};
use faux_core::{Args, Value};
use faux_random::Random;

const BSN_RANGE: (i64, i64) = (100_000_000, 999_999_999);

/// Provider named `netherlands_provider`.
#[derive(Debug, Clone, Default)]
pub struct NetherlandsProvider;

impl NetherlandsProvider {
    pub fn new() -> Self {
        Self
    }

    /// Burgerservicenummer passing the 11-proof.
    pub fn bsn(&self, random: &mut Random) -> Result<String, ProviderError> {
        loop {
            let candidate = random.randint(BSN_RANGE.0, BSN_RANGE.1)?.to_string();
            if is_valid_bsn(&candidate) {
                return Ok(candidate);
            }
        }
    }

    fn op_bsn(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.bsn(random)?.into())
    }
}

static NETHERLANDS_OPERATIONS: &[OperationSpec<NetherlandsProvider>] = &[
    OperationSpec { name: "bsn", params: &[], method: NetherlandsProvider::op_bsn },
    OperationSpec { name: "burgerservicenummer", params: &[], method: NetherlandsProvider::op_bsn },
];

impl Provider for NetherlandsProvider {
    fn name(&self) -> &str {
        "netherlands_provider"
    }

    fn operations(&self) -> Vec<&'static str> {
        operation_names(NETHERLANDS_OPERATIONS)
    }

    fn operation(&self, name: &str) -> Option<Operation> {
        bind(self, NETHERLANDS_OPERATIONS, name)
    }
}

/// Weights 9 down to 2 for the first eight digits, -1 for the last.
fn is_valid_bsn(number: &str) -> bool {
    let digits: Vec<i64> = number.chars().filter_map(|c| c.to_digit(10)).map(i64::from).collect();
    if digits.len() != 9 {
        return false;
    }
    let total: i64 = digits
        .iter()
        .zip([9, 8, 7, 6, 5, 4, 3, 2, -1])
        .map(|(d, w)| d * w)
        .sum();
    total % 11 == 0
}
