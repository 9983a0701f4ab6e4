//! Network artifacts: hosts, URLs, addresses and HTTP metadata.

use crate::data::shared;
use crate::error::ProviderError;
use crate::provider::{bind, operation_names, Operation, OperationSpec, Provider};
use faux_core::{Args, MimeType, PortRange, Record, TldType, UrlScheme, Value};
use faux_random::Random;

const MAX_QUERY_PARAMETERS: usize = 32;
const SLUG_PARTS: (usize, usize) = (2, 12);

/// Provider of internet-related data. Needs no locale data.
#[derive(Debug, Clone, Default)]
pub struct Internet;

impl Internet {
    pub fn new() -> Self {
        Self
    }

    pub fn emoji(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::EMOJI)?.to_string())
    }

    /// `quantity` hashtags such as `#sunset`.
    pub fn hashtags(&self, random: &mut Random, quantity: i64) -> Result<Vec<String>, ProviderError> {
        if quantity < 1 {
            return Err(ProviderError::invalid(
                "quantity",
                format!("must be at least 1, got {quantity}"),
            ));
        }
        (0..quantity)
            .map(|_| Ok(format!("#{}", random.choice(shared::WORDS)?)))
            .collect()
    }

    pub fn top_level_domain(&self, random: &mut Random, tld_type: Option<TldType>) -> Result<String, ProviderError> {
        let tld_type = tld_type.unwrap_or_else(|| random.choose_enum());
        Ok(random.choice(shared::tlds(tld_type))?.to_string())
    }

    /// Host name, prefixed with one of `subdomains` when any are given.
    pub fn hostname(
        &self,
        random: &mut Random,
        tld_type: Option<TldType>,
        subdomains: &[String],
    ) -> Result<String, ProviderError> {
        let domain = random.choice(shared::WORDS)?.to_string();
        let tld = self.top_level_domain(random, tld_type)?;
        if subdomains.is_empty() {
            return Ok(format!("{domain}{tld}"));
        }
        let subdomain = random.choice(subdomains)?;
        Ok(format!("{subdomain}.{domain}{tld}"))
    }

    /// URL ending in `/`, with a port when `port_range` is given.
    pub fn url(
        &self,
        random: &mut Random,
        scheme: UrlScheme,
        port_range: Option<PortRange>,
        tld_type: Option<TldType>,
        subdomains: &[String],
    ) -> Result<String, ProviderError> {
        let host = self.hostname(random, tld_type, subdomains)?;
        match port_range {
            Some(range) => {
                let port = self.port(random, range)?;
                Ok(format!("{scheme}://{host}:{port}/"))
            }
            None => Ok(format!("{scheme}://{host}/")),
        }
    }

    /// URL with a slug path and, optionally, a query string.
    pub fn uri(
        &self,
        random: &mut Random,
        scheme: UrlScheme,
        tld_type: Option<TldType>,
        subdomains: &[String],
        query_params_count: Option<usize>,
    ) -> Result<String, ProviderError> {
        let url = self.url(random, scheme, None, tld_type, subdomains)?;
        let slug = self.slug(random, None)?;
        let uri = format!("{url}{slug}");
        match query_params_count {
            Some(count) => Ok(format!("{uri}?{}", self.query_string(random, Some(count))?)),
            None => Ok(uri),
        }
    }

    /// Distinct query parameter names mapped to random words.
    ///
    /// Without `length` the count is drawn from 1..=10.
    pub fn query_parameters(&self, random: &mut Random, length: Option<usize>) -> Result<Record, ProviderError> {
        let length = match length {
            Some(length) if (1..=MAX_QUERY_PARAMETERS).contains(&length) => length,
            Some(length) => {
                return Err(ProviderError::invalid(
                    "length",
                    format!("must be between 1 and {MAX_QUERY_PARAMETERS}, got {length}"),
                ))
            }
            None => random.randint(1, 10)? as usize,
        };
        let keys = random.sample(shared::WORDS, length)?;
        let mut parameters = Record::new();
        for key in keys {
            parameters.insert(*key, *random.choice(shared::WORDS)?);
        }
        Ok(parameters)
    }

    /// `k=v` pairs joined with `&`.
    pub fn query_string(&self, random: &mut Random, length: Option<usize>) -> Result<String, ProviderError> {
        let parameters = self.query_parameters(random, length)?;
        Ok(parameters
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&"))
    }

    /// Hyphen-joined words; `parts_count` must be in 2..=12.
    pub fn slug(&self, random: &mut Random, parts_count: Option<usize>) -> Result<String, ProviderError> {
        let (low, high) = SLUG_PARTS;
        let parts_count = match parts_count {
            Some(count) if (low..=high).contains(&count) => count,
            Some(count) => {
                return Err(ProviderError::invalid(
                    "parts_count",
                    format!("must be between {low} and {high}, got {count}"),
                ))
            }
            None => random.randint(low as i64, high as i64)? as usize,
        };
        let parts = (0..parts_count)
            .map(|_| random.choice(shared::WORDS).map(|w| w.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join("-"))
    }

    pub fn user_agent(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::USER_AGENTS)?.to_string())
    }

    pub fn ip_v4(&self, random: &mut Random) -> Result<String, ProviderError> {
        let octets = random.randints(4, 0, 255)?;
        Ok(octets
            .iter()
            .map(|o| o.to_string())
            .collect::<Vec<_>>()
            .join("."))
    }

    pub fn ip_v4_with_port(&self, random: &mut Random, port_range: PortRange) -> Result<String, ProviderError> {
        let ip = self.ip_v4(random)?;
        let port = self.port(random, port_range)?;
        Ok(format!("{ip}:{port}"))
    }

    pub fn ip_v6(&self, random: &mut Random) -> Result<String, ProviderError> {
        let groups = random.randints(8, 0, 0xffff)?;
        Ok(groups
            .iter()
            .map(|g| format!("{g:x}"))
            .collect::<Vec<_>>()
            .join(":"))
    }

    /// MAC address in the Xen OUI range.
    pub fn mac_address(&self, random: &mut Random) -> Result<String, ProviderError> {
        let tail = [random.randint(0, 0x7f)?, random.randint(0, 0xff)?, random.randint(0, 0xff)?];
        Ok(format!(
            "00:16:3e:{:02x}:{:02x}:{:02x}",
            tail[0], tail[1], tail[2]
        ))
    }

    pub fn http_method(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::HTTP_METHODS)?.to_string())
    }

    pub fn content_type(&self, random: &mut Random, mime_type: Option<MimeType>) -> Result<String, ProviderError> {
        let family = mime_type.unwrap_or_else(|| random.choose_enum());
        Ok(random.choice(shared::mime_types(family))?.to_string())
    }

    pub fn http_status_code(&self, random: &mut Random) -> Result<i64, ProviderError> {
        Ok(*random.choice(shared::HTTP_STATUS_CODES)?)
    }

    pub fn http_status_message(&self, random: &mut Random) -> Result<String, ProviderError> {
        Ok(random.choice(shared::HTTP_STATUS_MESSAGES)?.to_string())
    }

    /// Port number within a range.
    pub fn port(&self, random: &mut Random, port_range: PortRange) -> Result<i64, ProviderError> {
        let (low, high) = port_range.bounds();
        Ok(random.randint(i64::from(low), i64::from(high))?)
    }

    fn op_emoji(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.emoji(random)?.into())
    }

    fn op_hashtags(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let quantity = args.i64("quantity")?.unwrap_or(4);
        Ok(self.hashtags(random, quantity)?.into())
    }

    fn op_hostname(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let subdomains = args.str_list("subdomains")?.unwrap_or_default();
        Ok(self
            .hostname(random, args.enumeration("tld_type")?, &subdomains)?
            .into())
    }

    fn op_url(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let scheme = args.enumeration("scheme")?.unwrap_or(UrlScheme::Https);
        let subdomains = args.str_list("subdomains")?.unwrap_or_default();
        let url = self.url(
            random,
            scheme,
            args.enumeration("port_range")?,
            args.enumeration("tld_type")?,
            &subdomains,
        )?;
        Ok(url.into())
    }

    fn op_uri(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let scheme = args.enumeration("scheme")?.unwrap_or(UrlScheme::Https);
        let subdomains = args.str_list("subdomains")?.unwrap_or_default();
        let uri = self.uri(
            random,
            scheme,
            args.enumeration("tld_type")?,
            &subdomains,
            args.usize("query_params_count")?,
        )?;
        Ok(uri.into())
    }

    fn op_query_string(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.query_string(random, args.usize("length")?)?.into())
    }

    fn op_query_parameters(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.query_parameters(random, args.usize("length")?)?.into())
    }

    fn op_slug(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.slug(random, args.usize("parts_count")?)?.into())
    }

    fn op_user_agent(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.user_agent(random)?.into())
    }

    fn op_ip_v4(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.ip_v4(random)?.into())
    }

    fn op_ip_v4_with_port(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let port_range = args.enumeration("port_range")?.unwrap_or(PortRange::All);
        Ok(self.ip_v4_with_port(random, port_range)?.into())
    }

    fn op_ip_v6(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.ip_v6(random)?.into())
    }

    fn op_mac_address(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.mac_address(random)?.into())
    }

    fn op_http_method(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.http_method(random)?.into())
    }

    fn op_content_type(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.content_type(random, args.enumeration("mime_type")?)?.into())
    }

    fn op_http_status_code(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.http_status_code(random)?.into())
    }

    fn op_http_status_message(&self, random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
        Ok(self.http_status_message(random)?.into())
    }

    fn op_top_level_domain(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        Ok(self.top_level_domain(random, args.enumeration("tld_type")?)?.into())
    }

    fn op_port(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
        let port_range = args.enumeration("port_range")?.unwrap_or(PortRange::All);
        Ok(self.port(random, port_range)?.into())
    }
}

static INTERNET_OPERATIONS: &[OperationSpec<Internet>] = &[
    OperationSpec { name: "emoji", params: &[], method: Internet::op_emoji },
    OperationSpec { name: "hashtags", params: &["quantity"], method: Internet::op_hashtags },
    OperationSpec { name: "hostname", params: &["tld_type", "subdomains"], method: Internet::op_hostname },
    OperationSpec {
        name: "url",
        params: &["scheme", "port_range", "tld_type", "subdomains"],
        method: Internet::op_url,
    },
    OperationSpec {
        name: "uri",
        params: &["scheme", "tld_type", "subdomains", "query_params_count"],
        method: Internet::op_uri,
    },
    OperationSpec { name: "query_string", params: &["length"], method: Internet::op_query_string },
    OperationSpec { name: "query_parameters", params: &["length"], method: Internet::op_query_parameters },
    OperationSpec { name: "slug", params: &["parts_count"], method: Internet::op_slug },
    OperationSpec { name: "user_agent", params: &[], method: Internet::op_user_agent },
    OperationSpec { name: "ip_v4", params: &[], method: Internet::op_ip_v4 },
    OperationSpec { name: "ip_v4_with_port", params: &["port_range"], method: Internet::op_ip_v4_with_port },
    OperationSpec { name: "ip_v6", params: &[], method: Internet::op_ip_v6 },
    OperationSpec { name: "mac_address", params: &[], method: Internet::op_mac_address },
    OperationSpec { name: "http_method", params: &[], method: Internet::op_http_method },
    OperationSpec { name: "content_type", params: &["mime_type"], method: Internet::op_content_type },
    OperationSpec { name: "http_status_code", params: &[], method: Internet::op_http_status_code },
    OperationSpec { name: "http_status_message", params: &[], method: Internet::op_http_status_message },
    OperationSpec { name: "top_level_domain", params: &["tld_type"], method: Internet::op_top_level_domain },
    OperationSpec { name: "tld", params: &["tld_type"], method: Internet::op_top_level_domain },
    OperationSpec { name: "port", params: &["port_range"], method: Internet::op_port },
];

impl Provider for Internet {
    fn name(&self) -> &str {
        "internet"
    }

    fn operations(&self) -> Vec<&'static str> {
        operation_names(INTERNET_OPERATIONS)
    }

    fn operation(&self, name: &str) -> Option<Operation> {
        bind(self, INTERNET_OPERATIONS, name)
    }
}
