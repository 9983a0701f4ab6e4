//! Command implementations behind the `fauxgen` binary.
//!
//! Each command writes its textual output to a caller-supplied writer so
//! it can be driven from tests as well as from `main`.

use anyhow::{bail, Context};
use clap::Args as ClapArgs;
use faux_core::{Args, Locale, Value};
use faux_export::{export_file, write_csv, write_json, ExportFormat};
use faux_providers::{builtins, Generic};
use faux_random::Seed;
use faux_schema::{Fieldset, Schema, SchemaTemplate, TemplateSeed};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Options for `fauxgen generate`.
#[derive(ClapArgs, Debug, Clone)]
pub struct GenerateArgs {
    /// Path to the YAML schema template
    #[arg(long)]
    pub schema: PathBuf,

    /// Output format (json, csv or bson)
    #[arg(long, default_value = "json")]
    pub format: ExportFormat,

    /// Output file (stdout when omitted; required for bson)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of records, overriding the template
    #[arg(long, env = "FAUXGEN_ITERATIONS")]
    pub iterations: Option<usize>,

    /// Seed, overriding the template (integer or text)
    #[arg(long, env = "FAUXGEN_SEED")]
    pub seed: Option<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Options for `fauxgen field`.
#[derive(ClapArgs, Debug, Clone)]
pub struct FieldArgs {
    /// Field name, optionally qualified (e.g. person.email)
    pub name: String,

    /// Number of values to print
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Data locale
    #[arg(long, env = "FAUXGEN_LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Seed (integer or text); random when omitted
    #[arg(long, env = "FAUXGEN_SEED")]
    pub seed: Option<String>,

    /// Keyword argument passed to the field, as KEY=VALUE (repeatable)
    #[arg(long = "arg", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub args: Vec<(String, Value)>,

    /// Country-specific provider to register (repeatable)
    #[arg(long = "with", value_name = "PROVIDER")]
    pub with: Vec<String>,
}

/// Options for `fauxgen providers`.
#[derive(ClapArgs, Debug, Clone)]
pub struct ProvidersArgs {
    /// Data locale
    #[arg(long, env = "FAUXGEN_LOCALE", default_value = "en")]
    pub locale: Locale,
}

/// Parse a `KEY=VALUE` argument.
///
/// The value is read as a YAML scalar or flow collection, so `3`, `true`,
/// `[a, b]` and `female` become an integer, a boolean, a list and a string.
pub fn parse_key_value(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing argument name in '{raw}'"));
    }
    let value = serde_yaml::from_str::<serde_yaml::Value>(value)
        .map(|yaml| Value::from_yaml(&yaml))
        .unwrap_or_else(|_| Value::from(value));
    Ok((key.to_string(), value))
}

/// Seed as it would be written in a template.
///
/// Parsed with [`Seed::parse`], so `--seed -5` matches `seed: -5` in a
/// template and `Field::new(locale, -5i64)` in code.
pub fn template_seed(raw: &str) -> TemplateSeed {
    match Seed::parse(raw) {
        Seed::Int(value) => TemplateSeed::Int(value),
        Seed::Text(text) => TemplateSeed::Text(text),
        Seed::Missing => TemplateSeed::Text(raw.to_string()),
    }
}

/// Run `fauxgen generate`; returns the number of records written.
pub fn generate<W: Write>(opts: &GenerateArgs, stdout: W) -> anyhow::Result<usize> {
    let mut template = SchemaTemplate::from_file(&opts.schema)
        .with_context(|| format!("Failed to load schema from '{}'", opts.schema.display()))?;
    if let Some(iterations) = opts.iterations {
        template.iterations = iterations;
    }
    if let Some(seed) = &opts.seed {
        template.seed = Some(template_seed(seed));
    }

    let mut schema = Schema::from_template(&template).context("Invalid schema template")?;
    let records = schema.create().context("Failed to generate records")?;
    let count = records.len();

    match (&opts.output, opts.format) {
        (Some(path), format) => {
            export_file(records, path, format, opts.pretty)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            info!("Wrote {} records to '{}'", count, path.display());
        }
        (None, ExportFormat::Json) => write_json(records, stdout, opts.pretty)?,
        (None, ExportFormat::Csv) => write_csv(records, stdout)?,
        (None, ExportFormat::Bson) => bail!("BSON output requires --output"),
    }
    Ok(count)
}

/// Run `fauxgen field`: one JSON value per line.
pub fn field<W: Write>(opts: &FieldArgs, mut out: W) -> anyhow::Result<()> {
    let seed = opts.seed.as_deref().map(Seed::parse).unwrap_or_default();
    let mut fieldset = Fieldset::new(opts.locale, seed)?;
    for name in &opts.with {
        let provider = builtins::by_name(name)?.with_context(|| {
            format!(
                "Unknown provider '{name}', expected one of: {}",
                builtins::BUILTIN_NAMES.join(", ")
            )
        })?;
        fieldset.add_provider(provider)?;
    }

    let args: Args = opts.args.iter().cloned().collect();
    let values = fieldset
        .perform(&opts.name, None, &args, Some(opts.count))
        .with_context(|| format!("Failed to generate '{}'", opts.name))?;
    for value in values {
        writeln!(out, "{}", serde_json::to_string(&value)?)?;
    }
    Ok(())
}

/// Run `fauxgen providers`: one line per provider.
pub fn providers<W: Write>(opts: &ProvidersArgs, mut out: W) -> anyhow::Result<()> {
    let generic = Generic::new(opts.locale, Seed::Missing)?;
    for provider in generic.providers() {
        writeln!(out, "{}: {}", provider.name(), provider.operations().join(", "))?;
    }
    for name in builtins::BUILTIN_NAMES {
        if let Some(provider) = builtins::by_name(name)? {
            writeln!(
                out,
                "{} (--with): {}",
                provider.name(),
                provider.operations().join(", ")
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(parse_key_value("quantity=3").unwrap(), ("quantity".to_string(), Value::Int(3)));
        assert_eq!(parse_key_value("hashed=true").unwrap().1, Value::Bool(true));
        assert_eq!(parse_key_value("gender=female").unwrap().1, Value::from("female"));
        assert_eq!(
            parse_key_value("domains=[a.com, b.org]").unwrap().1,
            Value::List(vec![Value::from("a.com"), Value::from("b.org")])
        );
        assert_eq!(parse_key_value("mask=@@-{").unwrap().1, Value::from("@@-{"));
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=3").is_err());
    }

    #[test]
    fn test_template_seed() {
        assert_eq!(template_seed("42"), TemplateSeed::Int(42));
        assert_eq!(template_seed("-1"), TemplateSeed::Int(u64::MAX));
        assert_eq!(template_seed("alien"), TemplateSeed::Text("alien".to_string()));
        for raw in ["-5", "1.5", "7", "👽"] {
            assert_eq!(Seed::from(&template_seed(raw)), Seed::parse(raw), "{raw}");
        }
        assert_eq!(Seed::from(&template_seed("-5")), Seed::from(-5i64));
        assert_eq!(Seed::from(&TemplateSeed::Signed(-5)), Seed::from(&template_seed("-5")));
    }
}
