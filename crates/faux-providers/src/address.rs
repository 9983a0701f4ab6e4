//! Addresses and geographic coordinates.

use crate::data::{self, shared, AddressData};
use crate::error::ProviderError;
use crate::provider::{bind, operation_names, Operation, OperationSpec, Provider};
use faux_core::{Args, Locale, Record, Value};
use faux_random::Random;
use std::sync::Arc;

const COORDINATE_PRECISION: u32 = 6;

/// Provider of address data.
#[derive(Debug, Clone)]
pub struct Address {
    data: Arc<AddressData>,
}

impl Address {
    pub fn new(locale: Locale) -> Result<Self, ProviderError> {
        Ok(Self {
            data: Arc::new(data::address(locale)?),
        })
    }

    /// Country of the locale, or any country with `allow_random`.
    pub fn country(&self, random: &mut Random, allow_random: bool) -> Result<String, ProviderError> {
        if allow_random {
            return Ok(random.choice(&self.data.country.name)?.clone());
        }
        Ok(self.data.country.current_locale.clone())
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn country_code(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::COUNTRY_CODES)?.to_string())
    }

    pub fn city(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.city)?.clone())
    }

    pub fn street_name(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.street.name)?.clone())
    }

    pub fn street_number(&self, random: &mut Random, maximum: i64) -> Result<i64, ProviderError> {
        Ok(random.randint(1, maximum)?)
    }

    pub fn street_suffix(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(&self.data.street.suffix)?.clone())
    }

    /// Street address laid out by the locale's address format.
    pub fn address(&self, random: &mut Random) -> Result<String, ProviderError> {
        let number = self.street_number(random, 1400)?;
        let name = self.street_name(random)?;
        let suffix = self.street_suffix(random)?;
        Ok(self
            .data
            .address_fmt
            .replace("{st_num}", &number.to_string())
            .replace("{st_name}", &name)
            .replace("{st_sfx}", &suffix))
    }

    pub fn postal_code(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.custom_code(&self.data.postal_code_fmt, '@', '#')?)
    }

    pub fn latitude(&self, random: &mut Random) -> f64 {
        random.uniform(-90.0, 90.0, COORDINATE_PRECISION)
    }

    pub fn longitude(&self, random: &mut Random) -> f64 {
        random.uniform(-180.0, 180.0, COORDINATE_PRECISION)
    }

    /// Longitude and latitude as one record.
    pub fn coordinates(&self, random: &mut Random) -> Record {
        Record::new()
            .with("longitude", self.longitude(random))
            .with("latitude", self.latitude(random))
    }

    fn op_country(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let allow_random = args.bool("allow_random")?.unwrap_or(false);
        Ok(self.country(random, allow_random)?.into())
    }

    fn op_country_code(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.country_code(random)?.into())
    }

    fn op_city(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.city(random)?.into())
    }

    fn op_street_name(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.street_name(random)?.into())
    }

    fn op_street_number(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let maximum = args.i64("maximum")?.unwrap_or(1400);
        Ok(self.street_number(random, maximum)?.into())
    }

    fn op_street_suffix(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.street_suffix(random)?.into())
    }

    fn op_address(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.address(random)?.into())
    }

    fn op_postal_code(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.postal_code(random)?.into())
    }

    fn op_latitude(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.latitude(random).into())
    }

    fn op_longitude(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.longitude(random).into())
    }

    fn op_coordinates(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.coordinates(random).into())
    }
}

static ADDRESS_OPERATIONS: &[OperationSpec<Address>] = &[
    OperationSpec { name: "country", params: &["allow_random"], method: Address::op_country },
    OperationSpec { name: "country_code", params: &[], method: Address::op_country_code },
    OperationSpec { name: "city", params: &[], method: Address::op_city },
    OperationSpec { name: "street_name", params: &[], method: Address::op_street_name },
    OperationSpec { name: "street_number", params: &["maximum"], method: Address::op_street_number },
    OperationSpec { name: "street_suffix", params: &[], method: Address::op_street_suffix },
    OperationSpec { name: "address", params: &[], method: Address::op_address },
    OperationSpec { name: "postal_code", params: &[], method: Address::op_postal_code },
    OperationSpec { name: "zip_code", params: &[], method: Address::op_postal_code },
    OperationSpec { name: "latitude", params: &[], method: Address::op_latitude },
    OperationSpec { name: "longitude", params: &[], method: Address::op_longitude },
    OperationSpec { name: "coordinates", params: &[], method: Address::op_coordinates },
];

impl Provider for Address {
    fn name(&self) -> &str {
        "address"
    }

    fn operations(&self) -> Vec<&'static str> {
        operation_names(ADDRESS_OPERATIONS)
    }

    fn operation(&self, name: &str) -> Option<Operation> {
        bind(self, ADDRESS_OPERATIONS, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_uses_locale_format() {
        let address = Address::new(Locale::Ru).unwrap();
        let mut random = Random::new(4u64);
        let text = address.address(&mut random).unwrap();
        assert!(text.contains(", д. "));
        assert!(!text.contains('{'));
    }

    #[test]
    fn test_country_defaults_to_locale() {
        let address = Address::new(Locale::Nl).unwrap();
        let mut random = Random::new(4u64);
        assert_eq!(address.country(&mut random, false).unwrap(), "Nederland");
        let any = address.country(&mut random, true).unwrap();
        assert!(address.data.country.name.contains(&any));
    }

    #[test]
    fn test_postal_code_follows_mask() {
        let address = Address::new(Locale::Nl).unwrap();
        let mut random = Random::new(4u64);
        let code = address.postal_code(&mut random).unwrap();
        let (digits, letters) = code.split_once(' ').unwrap();
        assert!(digits.len() == 4 && digits.chars().all(|c| c.is_ascii_digit()));
        assert!(letters.len() == 2 && letters.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_coordinates_in_range() {
        let address = Address::new(Locale::En).unwrap();
        let mut random = Random::new(4u64);
        for _ in 0..100 {
            let coords = address.coordinates(&mut random);
            let lat = coords.get("latitude").and_then(Value::as_f64).unwrap();
            let lon = coords.get("longitude").and_then(Value::as_f64).unwrap();
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_street_number_maximum() {
        let address = Address::new(Locale::En).unwrap();
        let op = address.operation("street_number").unwrap();
        let mut random = Random::new(4u64);
        for _ in 0..50 {
            let n = op(&mut random, &Args::new().with("maximum", 10)).unwrap();
            assert!((1..=10).contains(&n.as_i64().unwrap()));
        }
    }
}
