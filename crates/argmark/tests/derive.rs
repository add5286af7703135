//! Integration tests for the Args derive macro.
//!
//! These tests inspect the schema generated from struct annotations and the
//! slot table used for binding.

use argmark::{ArgKind, Args, ValueType};

// =============================================================================
// Schema generation
// =============================================================================

#[derive(Args, Default)]
#[argmark(name = "mytool", about = "Does things", version = "1.2.3", help)]
struct Annotated {
    #[arg(short = 'n', long = "name", desc = "User name")]
    name: String,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long = "max-depth")]
    depth: u8,

    #[arg(required, desc = "Input file")]
    file: String,

    ratio: Option<f64>,

    #[arg(skip)]
    history: Vec<String>,
}

#[test]
fn test_container_metadata() {
    let meta = Annotated::schema().unwrap().meta();
    assert_eq!(meta.name.as_deref(), Some("mytool"));
    assert_eq!(meta.about.as_deref(), Some("Does things"));
    assert_eq!(meta.version.as_deref(), Some("1.2.3"));
    assert!(meta.version_enabled);
    assert!(meta.help_enabled);
}

#[test]
fn test_declaration_order_and_skip() {
    let schema = Annotated::schema().unwrap();
    let names: Vec<&str> = schema.declarations().iter().map(|d| d.name()).collect();
    assert_eq!(names, ["name", "verbose", "depth", "file", "ratio"]);
}

#[test]
fn test_explicit_forms() {
    let schema = Annotated::schema().unwrap();
    let name = &schema.declarations()[0];
    assert_eq!(name.short_form(), Some('n'));
    assert_eq!(name.long_form(), Some("name"));
    assert_eq!(name.description_text(), Some("User name"));
    assert_eq!(name.kind(), ArgKind::Named);
}

#[test]
fn test_auto_forms_from_field_name() {
    let schema = Annotated::schema().unwrap();
    let verbose = &schema.declarations()[1];
    assert_eq!(verbose.short_form(), Some('v'));
    assert_eq!(verbose.long_form(), Some("verbose"));
    assert_eq!(verbose.value_type(), ValueType::Bool);
}

#[test]
fn test_long_only() {
    let schema = Annotated::schema().unwrap();
    let depth = &schema.declarations()[2];
    assert_eq!(depth.short_form(), None);
    assert_eq!(depth.spellings(), ["--max-depth"]);
    assert_eq!(depth.value_type(), ValueType::Int);
}

#[test]
fn test_positional_fields() {
    let schema = Annotated::schema().unwrap();
    let positionals: Vec<&str> = schema.positionals().map(|d| d.name()).collect();
    assert_eq!(positionals, ["file", "ratio"]);

    let file = &schema.declarations()[3];
    assert!(file.is_required());
    assert!(file.spellings().is_empty());

    let ratio = &schema.declarations()[4];
    assert!(!ratio.is_required());
    assert_eq!(ratio.value_type(), ValueType::Float);
}

#[test]
fn test_schema_is_cached() {
    let first = Annotated::schema().unwrap();
    let second = Annotated::schema().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_skipped_field_is_untouched() {
    let mut cli = Annotated {
        history: vec!["kept".into()],
        ..Default::default()
    };
    argmark::parse_from(&mut cli, ["in.txt", "0.5", "--max-depth", "3"]).unwrap();

    assert_eq!(cli.file, "in.txt");
    assert_eq!(cli.ratio, Some(0.5));
    assert_eq!(cli.depth, 3);
    assert_eq!(cli.history, ["kept"]);
}

#[test]
fn test_slot_table() {
    let mut cli = Annotated::default();
    assert!(cli.slot_mut("name").is_some());
    assert!(cli.slot_mut("ratio").is_some());
    assert!(cli.slot_mut("history").is_none());
    assert!(cli.slot_mut("missing").is_none());
}

// =============================================================================
// Defaults
// =============================================================================

#[derive(Args, Default)]
struct MyTool {
    #[arg(short)]
    quiet: bool,
}

#[test]
fn test_default_name_is_lowercased_struct_name() {
    let meta = MyTool::schema().unwrap().meta();
    assert_eq!(meta.name.as_deref(), Some("mytool"));
    assert!(!meta.help_enabled);
    assert!(!meta.version_enabled);
}

#[test]
fn test_short_only() {
    let decl = &MyTool::schema().unwrap().declarations()[0];
    assert_eq!(decl.short_form(), Some('q'));
    assert_eq!(decl.long_form(), None);

    let mut cli = MyTool::default();
    argmark::parse_from(&mut cli, ["-q"]).unwrap();
    assert!(cli.quiet);
}

#[derive(Args, Default)]
#[argmark(version)]
struct Unversioned {}

#[test]
fn test_bare_version_flag() {
    let meta = Unversioned::schema().unwrap().meta();
    assert!(meta.version_enabled);
    assert_eq!(meta.version, None);
}

// =============================================================================
// Shared spellings
// =============================================================================

#[derive(Args, Default)]
struct SharedShort {
    #[arg(short)]
    alpha: String,

    #[arg(short)]
    all: bool,
}

#[test]
fn test_shared_auto_short_binds_both() {
    let schema = SharedShort::schema().unwrap();
    assert_eq!(schema.declarations()[0].short_form(), Some('a'));
    assert_eq!(schema.declarations()[1].short_form(), Some('a'));

    let mut cli = SharedShort::default();
    argmark::parse_from(&mut cli, ["-a", "true"]).unwrap();
    assert_eq!(cli.alpha, "true");
    assert!(cli.all);
}
