use optargs_core::{
    ConversionErrorKind, ConversionPolicy, DescriptorError, NameRules, OptargsConfig,
    OptionDescriptor, OptionTable, OptionType, OptionValue, TableError,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn build_table() -> OptionTable {
    let mut table = OptionTable::new();
    table
        .insert(
            OptionDescriptor::with_long_name('v', "verbose")
                .unwrap()
                .with_type(OptionType::Flag)
                .with_help("print more"),
        )
        .unwrap();
    table
        .insert(
            OptionDescriptor::with_long_name('o', "output")
                .unwrap()
                .with_metavar("FILE")
                .with_default_value("out.txt"),
        )
        .unwrap();
    table
        .insert(
            OptionDescriptor::with_long_name('t', "timeout")
                .unwrap()
                .with_metavar("SECS")
                .with_default_value("2.5"),
        )
        .unwrap();
    table
}

// ---------------------------------------------------------------------------
// Descriptor scenario
// ---------------------------------------------------------------------------

#[test]
fn test_output_descriptor_scenario() {
    let mut desc = OptionDescriptor::with_long_name('o', "output").unwrap();
    desc.set_metavar("FILE")
        .set_default_value("out.txt")
        .set_type(OptionType::Value);

    assert_eq!(desc.short_name(), 'o');
    assert_eq!(desc.long_name(), "output");
    assert_eq!(desc.metavar(), "FILE");
    assert_eq!(desc.default_value(), "out.txt");
    assert_eq!(desc.option_type(), OptionType::Value);
    assert_eq!(desc.help(), "");

    desc.set_help("output path");

    assert_eq!(desc.help(), "output path");
    assert_eq!(desc.short_name(), 'o');
    assert_eq!(desc.long_name(), "output");
    assert_eq!(desc.metavar(), "FILE");
    assert_eq!(desc.default_value(), "out.txt");
    assert_eq!(desc.option_type(), OptionType::Value);
}

#[test]
fn test_descriptor_identity_is_short_name() {
    assert_eq!(
        OptionDescriptor::new('v').unwrap(),
        OptionDescriptor::with_long_name('v', "verbose").unwrap()
    );
}

#[test]
fn test_invalid_names_produce_no_descriptor() {
    assert_eq!(
        OptionDescriptor::new('\0').unwrap_err(),
        DescriptorError::InvalidShortName('\0')
    );
    assert_eq!(
        OptionDescriptor::with_long_name('x', "bad name").unwrap_err(),
        DescriptorError::InvalidLongName("bad name".into())
    );
}

#[test]
fn test_copy_then_mutate_leaves_original() {
    let original = OptionDescriptor::with_long_name('q', "quiet")
        .unwrap()
        .with_help("say less");
    let mut copy = original.try_clone().unwrap();
    copy.set_help("say nothing").set_type(OptionType::Flag);

    assert_eq!(original.help(), "say less");
    assert_eq!(original.option_type(), OptionType::Value);
    assert_eq!(copy.help(), "say nothing");
    assert_eq!(original, copy);
}

// ---------------------------------------------------------------------------
// Value reads
// ---------------------------------------------------------------------------

#[test]
fn test_boolean_reads() {
    assert!(OptionValue::new("true").as_boolean().unwrap());
    assert!(!OptionValue::new("false").as_boolean().unwrap());
    assert!(!OptionValue::new("").as_boolean().unwrap());
    let err = OptionValue::new("yes").as_boolean().unwrap_err();
    assert_eq!(err.kind, ConversionErrorKind::Invalid);
}

#[test]
fn test_numeric_reads() {
    assert_eq!(OptionValue::new("42").as_int32().unwrap(), 42);
    assert_eq!(OptionValue::new("-7").as_int64().unwrap(), -7);
    assert_eq!(OptionValue::new("300").as_uint16().unwrap(), 300);
    assert_eq!(OptionValue::new("1.25").as_float().unwrap(), 1.25);

    let err = OptionValue::new("abc").as_int32().unwrap_err();
    assert_eq!(err.kind, ConversionErrorKind::Invalid);
    assert_eq!(err.raw, "abc");
}

#[test]
fn test_value_equality_is_textual() {
    assert_eq!(OptionValue::new("1"), OptionValue::new("1"));
    assert_ne!(OptionValue::new("1"), OptionValue::new("01"));
}

// ---------------------------------------------------------------------------
// Table + defaults
// ---------------------------------------------------------------------------

#[test]
fn test_table_defaults_feed_values() {
    let table = build_table();
    let defaults: Vec<_> = table.default_values().collect();
    assert_eq!(defaults.len(), 2);
    assert_eq!(defaults[0], ('o', OptionValue::new("out.txt")));
    assert_eq!(defaults[1].1.as_double().unwrap(), 2.5);
}

#[test]
fn test_table_collisions() {
    let mut table = build_table();
    assert_eq!(
        table.insert(OptionDescriptor::new('t').unwrap()).unwrap_err(),
        TableError::DuplicateShortName('t')
    );
    assert_eq!(
        table
            .insert(OptionDescriptor::with_long_name('T', "timeout").unwrap())
            .unwrap_err(),
        TableError::DuplicateLongName("timeout".into())
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_help_generator_view() {
    let table = build_table();
    let lines: Vec<String> = table
        .iter()
        .map(|o| {
            let mut line = format!("-{}", o.short_name());
            if o.has_long_name() {
                line.push_str(&format!(", --{}", o.long_name()));
            }
            if o.takes_value() {
                line.push_str(&format!(" {}", o.metavar()));
            }
            line
        })
        .collect();
    assert_eq!(
        lines,
        vec!["-v, --verbose", "-o, --output FILE", "-t, --timeout SECS"]
    );
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn test_config_drives_validation_and_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("optargs.yml");
    std::fs::write(
        &path,
        r##"
version: "1.0"
conversion:
  policy: lenient
names:
  extra_short_chars: "#"
  min_long_len: 4
"##,
    )
    .unwrap();

    let config = OptargsConfig::load(&path).unwrap();
    assert_eq!(config.policy(), ConversionPolicy::Lenient);

    let rules = config.validator();
    assert!(OptionDescriptor::new_with(rules, '#', "hash").is_ok());
    assert_eq!(
        OptionDescriptor::new_with(rules, '?', "").unwrap_err(),
        DescriptorError::InvalidShortName('?')
    );
    assert_eq!(
        OptionDescriptor::new_with(rules, 'l', "log").unwrap_err(),
        DescriptorError::InvalidLongName("log".into())
    );

    let value = OptionValue::new("not-a-number");
    assert_eq!(value.get_with::<i64>(config.policy()).unwrap(), 0);
}

#[test]
fn test_configured_descriptor_copies_under_its_rules() {
    let config = OptargsConfig::from_yaml_str("names: { extra_short_chars: \"#\", min_long_len: 4 }").unwrap();
    let hash = OptionDescriptor::new_with(config.validator(), '#', "hash")
        .unwrap()
        .with_help("digest input");

    let mut copy = hash.try_clone().unwrap();
    copy.set_help("digest output");
    assert_eq!(copy.short_name(), '#');
    assert_eq!(hash.help(), "digest input");

    let mut table = OptionTable::new();
    table.insert(copy).unwrap();
    assert_eq!(table.get('#').unwrap().try_clone().unwrap().long_name(), "hash");
}

#[test]
fn test_default_config_is_strict() {
    let config = OptargsConfig::default();
    assert_eq!(config.policy(), ConversionPolicy::Strict);
    assert_eq!(config.validator(), &NameRules::default());
    assert!(OptionValue::new("x").get_with::<u16>(config.policy()).is_err());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn test_value_round_trip(s in ".*") {
        let value = OptionValue::new(s.clone());
        prop_assert_eq!(value.value(), s.as_str());
        prop_assert_eq!(value.as_string(), s.clone());
        prop_assert_eq!(value.to_string(), s);
    }

    #[test]
    fn test_integers_read_back(n in any::<i64>()) {
        prop_assert_eq!(OptionValue::new(n.to_string()).as_int64().unwrap(), n);
    }

    #[test]
    fn test_descriptor_equality_tracks_short_name(a in "[a-z]", b in "[a-z]") {
        let ca = a.chars().next().unwrap();
        let cb = b.chars().next().unwrap();
        let da = OptionDescriptor::new(ca).unwrap();
        let db = OptionDescriptor::with_long_name(cb, "long").unwrap();
        prop_assert_eq!(da == db, ca == cb);
    }
}
