//! CLI command tests driven through the library entry points.

use fauxgen::cli::{self, FieldArgs, GenerateArgs, ProvidersArgs};
use fauxgen::faux_export::read_bson;
use fauxgen::{ExportFormat, Field, Locale, Value};
use std::fs::File;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn generate_args(format: ExportFormat) -> GenerateArgs {
    GenerateArgs {
        schema: fixture("people.yaml"),
        format,
        output: None,
        iterations: None,
        seed: None,
        pretty: false,
    }
}

fn field_args(name: &str) -> FieldArgs {
    FieldArgs {
        name: name.to_string(),
        count: 1,
        locale: Locale::En,
        seed: Some("42".to_string()),
        args: Vec::new(),
        with: Vec::new(),
    }
}

#[test]
fn test_generate_json_to_stdout() {
    let mut out = Vec::new();
    let args = GenerateArgs {
        iterations: Some(3),
        ..generate_args(ExportFormat::Json)
    };
    assert_eq!(cli::generate(&args, &mut out).unwrap(), 3);

    let records: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
    assert_eq!(records.len(), 3);
    assert!(records[0]["email"].as_str().unwrap().contains('@'));
}

#[test]
fn test_generate_csv_to_stdout() {
    let mut out = Vec::new();
    cli::generate(&generate_args(ExportFormat::Csv), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,name,age,email,city,balance,tags"));
    assert_eq!(lines.count(), 25);
}

#[test]
fn test_generate_seed_override() {
    let seeded = |seed: &str| {
        let mut out = Vec::new();
        let args = GenerateArgs {
            seed: Some(seed.to_string()),
            ..generate_args(ExportFormat::Json)
        };
        cli::generate(&args, &mut out).unwrap();
        out
    };
    assert_eq!(seeded("alien"), seeded("alien"));
    assert_ne!(seeded("alien"), seeded("7"));
}

#[test]
fn test_generate_bson_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("people.bson");
    let args = GenerateArgs {
        output: Some(path.clone()),
        ..generate_args(ExportFormat::Bson)
    };
    assert_eq!(cli::generate(&args, Vec::new()).unwrap(), 25);
    assert_eq!(read_bson(File::open(&path).unwrap()).unwrap().len(), 25);
}

#[test]
fn test_generate_errors() {
    let err = cli::generate(&generate_args(ExportFormat::Bson), Vec::new()).unwrap_err();
    assert!(err.to_string().contains("--output"));

    let args = GenerateArgs {
        iterations: Some(0),
        ..generate_args(ExportFormat::Json)
    };
    let err = cli::generate(&args, Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("at least 1"));

    let args = GenerateArgs {
        schema: fixture("missing.yaml"),
        ..generate_args(ExportFormat::Json)
    };
    assert!(cli::generate(&args, Vec::new()).is_err());
}

#[test]
fn test_field_with_arguments() {
    let mut out = Vec::new();
    let args = FieldArgs {
        count: 4,
        args: vec![("quantity".to_string(), Value::Int(3))],
        ..field_args("hashtags")
    };
    cli::field(&args, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    for line in lines {
        let tags: Vec<String> = serde_json::from_str(line).unwrap();
        assert_eq!(tags.len(), 3);
    }
}

#[test]
fn test_field_with_builtin_provider() {
    let mut out = Vec::new();
    let args = FieldArgs {
        locale: Locale::Nl,
        with: vec!["netherlands_provider".to_string()],
        ..field_args("bsn")
    };
    cli::field(&args, &mut out).unwrap();
    let bsn: String = serde_json::from_slice(&out).unwrap();
    assert_eq!(bsn.len(), 9);

    let args = FieldArgs {
        with: vec!["atlantis_provider".to_string()],
        ..field_args("bsn")
    };
    assert!(cli::field(&args, Vec::new()).is_err());
}

#[test]
fn test_field_negative_seed_matches_library() {
    for (raw, name) in [("-5", "full_name"), ("-5", "email"), ("1.5", "city")] {
        let mut out = Vec::new();
        let args = FieldArgs {
            seed: Some(raw.to_string()),
            count: 3,
            ..field_args(name)
        };
        cli::field(&args, &mut out).unwrap();
        let printed: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        let mut field = match raw {
            "-5" => Field::new(Locale::En, -5i64).unwrap(),
            _ => Field::new(Locale::En, 1.5f64).unwrap(),
        };
        let direct: Vec<Value> = (0..3).map(|_| field.call(name).unwrap()).collect();
        assert_eq!(printed, direct, "{raw} {name}");
    }
}

#[test]
fn test_field_errors() {
    let err = cli::field(&field_args("a.b.c"), Vec::new()).unwrap_err();
    assert!(format!("{err:#}").contains("ambiguous"));

    let args = FieldArgs {
        count: 0,
        ..field_args("name")
    };
    assert!(cli::field(&args, Vec::new()).is_err());
}

#[test]
fn test_providers_listing() {
    let mut out = Vec::new();
    cli::providers(&ProvidersArgs { locale: Locale::Ru }, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let names: Vec<&str> = text
        .lines()
        .map(|line| line.split([':', ' ']).next().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["address", "finance", "internet", "path", "person", "russia_provider", "netherlands_provider"]
    );
    assert!(text.contains("full_name"));
}
