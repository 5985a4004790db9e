use lodeforge_core::{CompileError, MaterialCatalog, MaterialLookup, RestrictionMode};
use lodeforge_rules::{
    CompileContext, FeatureKind, GeneratorKind, IssueSeverity, ResourceSpec, RuleFile,
    parse_material_list, resolve_template, rule_file_json_schema, validate_rule,
};
use serde_json::{Value, json};

fn catalog() -> MaterialCatalog {
    MaterialCatalog::from_identifiers(
        ["stone", "core:ore", "iron_ore", "netherrack"],
        "minecraft",
    )
}

fn context() -> CompileContext<MaterialCatalog> {
    CompileContext::new(catalog()).expect("default substrate resolves")
}

fn minimal_rule() -> Value {
    json!({
        "template": "uniform",
        "block": "core:ore",
        "clusterSize": 8,
        "numClusters": 20,
        "minHeight": 0,
        "maxHeight": 64
    })
}

fn with(mut body: Value, key: &str, value: Value) -> Value {
    body.as_object_mut()
        .expect("rule body object")
        .insert(key.to_string(), value);
    body
}

fn without(mut body: Value, key: &str) -> Value {
    body.as_object_mut().expect("rule body object").remove(key);
    body
}

#[test]
fn minimal_rule_uses_defaults() {
    let ctx = context();
    let validated = validate_rule("copper", &minimal_rule(), &ctx).expect("valid rule");
    let rule = validated.rule;

    assert_eq!(rule.name, "copper");
    assert_eq!(rule.cluster_size, 8);
    assert_eq!(rule.num_clusters, 20);
    assert_eq!((rule.min_height, rule.max_height), (0, 64));
    assert!(!rule.retrogen);
    assert_eq!(&rule.material, ctx.default_material());
    assert_eq!(rule.restrictions.biome_mode, RestrictionMode::None);
    assert_eq!(rule.restrictions.dimension_mode, RestrictionMode::None);
    assert!(validated.warnings.is_empty());

    let ore = ctx.lookup().resolve("core", "ore").expect("ore handle");
    assert_eq!(rule.resources.len(), 1);
    assert_eq!(rule.resources.entries()[0].material(), ore);
    assert_eq!(rule.resources.entries()[0].weight(), 100);
}

#[test]
fn non_positive_cluster_parameters_fail() {
    let ctx = context();
    for body in [
        with(minimal_rule(), "clusterSize", json!(0)),
        with(minimal_rule(), "numClusters", json!(0)),
        with(minimal_rule(), "numClusters", json!(-4)),
        without(minimal_rule(), "clusterSize"),
        with(
            with(minimal_rule(), "clusterSize", json!(0)),
            "minHeight",
            json!(90),
        ),
    ] {
        assert!(matches!(
            validate_rule("ore", &body, &ctx),
            Err(CompileError::InvalidClusterParameters { .. })
        ));
    }
}

#[test]
fn invalid_height_range_fails() {
    let ctx = context();
    for (min, max) in [(10, 10), (-1, 64), (70, 64)] {
        let body = with(with(minimal_rule(), "minHeight", json!(min)), "maxHeight", json!(max));
        assert_eq!(
            validate_rule("ore", &body, &ctx).map(|validated| validated.rule),
            Err(CompileError::InvalidHeightRange {
                min_height: min,
                max_height: max
            })
        );
    }
}

#[test]
fn missing_required_fields_are_reported_by_name() {
    let ctx = context();
    assert!(matches!(
        validate_rule("ore", &without(minimal_rule(), "block"), &ctx),
        Err(CompileError::MissingField("block"))
    ));
    assert!(matches!(
        validate_rule("ore", &without(minimal_rule(), "maxHeight"), &ctx),
        Err(CompileError::MissingField("maxHeight"))
    ));
}

#[test]
fn resource_failure_is_reported_before_cluster_check() {
    let ctx = context();
    let body = with(
        with(minimal_rule(), "block", json!("core:missing")),
        "clusterSize",
        json!(0),
    );
    assert_eq!(
        validate_rule("ore", &body, &ctx).map(|validated| validated.rule),
        Err(CompileError::UnknownMaterial {
            namespace: "core".to_string(),
            name: "missing".to_string()
        })
    );
}

#[test]
fn invalid_material_falls_back_to_default_with_warning() {
    let ctx = context();
    let body = with(minimal_rule(), "material", json!(["netherrack", {"weight": 3}]));
    let validated = validate_rule("ore", &body, &ctx).expect("material is recoverable");

    assert_eq!(&validated.rule.material, ctx.default_material());
    assert_eq!(validated.warnings.len(), 1);
    assert_eq!(validated.warnings[0].severity, IssueSeverity::Warning);
    assert_eq!(validated.warnings[0].code, "material_fallback");
}

#[test]
fn explicit_material_list_is_kept() {
    let ctx = context();
    let body = with(
        minimal_rule(),
        "material",
        json!([{"name": "netherrack", "weight": 5}, "stone"]),
    );
    let rule = validate_rule("ore", &body, &ctx).expect("valid rule").rule;
    assert_eq!(rule.material.len(), 2);
    assert_eq!(rule.material.entries()[0].weight(), 5);
}

#[test]
fn restriction_modes_are_lenient() {
    let ctx = context();
    let body = with(
        with(minimal_rule(), "biomeRestriction", json!("WHITELIST")),
        "dimensionRestriction",
        json!("everywhere"),
    );
    let body = with(body, "biomes", json!(["Plains", "Desert", "Plains"]));
    let body = with(body, "dimensions", json!(["not", "numbers"]));
    let rule = validate_rule("ore", &body, &ctx).expect("valid rule").rule;

    assert_eq!(rule.restrictions.biome_mode, RestrictionMode::Whitelist);
    assert_eq!(
        rule.restrictions.biomes,
        Some(vec![
            "Plains".to_string(),
            "Desert".to_string(),
            "Plains".to_string()
        ])
    );
    assert_eq!(rule.restrictions.dimension_mode, RestrictionMode::None);
    assert_eq!(rule.restrictions.dimensions, None);
}

#[test]
fn scalar_restriction_modes_disable_the_list() {
    let ctx = context();
    for mode in [json!(1), json!(true), json!(2.5)] {
        let body = with(minimal_rule(), "biomeRestriction", mode.clone());
        let body = with(body, "biomes", json!(["Plains"]));
        let rule = validate_rule("ore", &body, &ctx).expect("scalar mode is lenient").rule;
        assert_eq!(rule.restrictions.biome_mode, RestrictionMode::None, "{mode}");
        assert_eq!(rule.restrictions.biomes, None);
    }

    for mode in [json!(["whitelist"]), json!({"mode": "whitelist"}), json!(null)] {
        let body = with(minimal_rule(), "dimensionRestriction", mode.clone());
        assert!(
            matches!(
                validate_rule("ore", &body, &ctx),
                Err(CompileError::InvalidField {
                    field: "dimensionRestriction",
                    ..
                })
            ),
            "{mode}"
        );
    }
}

#[test]
fn active_mode_without_entries_keeps_mode() {
    let ctx = context();
    let body = with(minimal_rule(), "dimensionRestriction", json!("blacklist"));
    let rule = validate_rule("ore", &body, &ctx).expect("valid rule").rule;
    assert_eq!(rule.restrictions.dimension_mode, RestrictionMode::Blacklist);
    assert_eq!(rule.restrictions.dimensions, None);
}

#[test]
fn mistyped_restriction_entries_fail_the_rule() {
    let ctx = context();
    let body = with(
        with(minimal_rule(), "dimensionRestriction", json!("whitelist")),
        "dimensions",
        json!([0, "nether"]),
    );
    assert!(matches!(
        validate_rule("ore", &body, &ctx),
        Err(CompileError::InvalidField {
            field: "dimensions",
            ..
        })
    ));

    let body = with(
        with(minimal_rule(), "biomeRestriction", json!("blacklist")),
        "biomes",
        json!("Plains"),
    );
    assert!(matches!(
        validate_rule("ore", &body, &ctx),
        Err(CompileError::InvalidField { field: "biomes", .. })
    ));
}

#[test]
fn resource_lists_are_all_or_nothing() {
    let ctx = context();
    let list = parse_material_list(
        &json!(["stone", {"name": "iron_ore", "metadata": 40, "weight": 0}]),
        &ctx,
    )
    .expect("valid list");
    assert_eq!(list.len(), 2);
    assert_eq!(list.entries()[1].metadata(), 15);
    assert_eq!(list.entries()[1].weight(), 1);

    let list = parse_material_list(
        &json!([
            {"name": "core:ore", "weight": 18446744073709551615_u64},
            {"name": "core:ore", "metadata": 3.0, "weight": -1e30},
        ]),
        &ctx,
    )
    .expect("oversized numbers clamp");
    assert_eq!(list.entries()[0].weight(), 1_000_000);
    assert_eq!(list.entries()[1].metadata(), 3);
    assert_eq!(list.entries()[1].weight(), 1);

    for value in [
        json!(["stone", {"metadata": 2}]),
        json!(["stone", 12]),
        json!(["stone", {"name": "iron_ore", "weight": "heavy"}]),
        json!(["stone", {"name": "iron_ore", "metadata": 2.5}]),
        json!([]),
    ] {
        assert!(matches!(
            parse_material_list(&value, &ctx),
            Err(CompileError::MalformedResourceEntry(_))
        ));
    }
    assert!(matches!(
        parse_material_list(&json!(["stone", "core:gone"]), &ctx),
        Err(CompileError::UnknownMaterial { .. })
    ));
}

#[test]
fn context_requires_resolvable_default_substrate() {
    let empty = MaterialCatalog::new();
    assert!(matches!(
        CompileContext::new(empty),
        Err(CompileError::UnknownMaterial { .. })
    ));
}

#[test]
fn rule_file_model_agrees_with_resolver() {
    let document = json!({
        "copper": minimal_rule(),
        "deep_iron": with(
            minimal_rule(),
            "template",
            json!({"type": "normal", "generator": "sparse-cluster"})
        ),
    });
    let file: RuleFile = serde_json::from_value(document.clone()).expect("parse rule file");

    for (name, body) in &file.0 {
        let resolved = resolve_template(&document[name.as_str()]["template"]).expect("resolves");
        assert_eq!(body.template.feature(), resolved.feature);
        assert_eq!(body.template.generator(), resolved.generator);
    }
    assert_eq!(file.0["deep_iron"].template.feature(), FeatureKind::Normal);
    assert_eq!(
        file.0["deep_iron"].template.generator(),
        GeneratorKind::SparseCluster
    );
    match &file.0["copper"].block {
        ResourceSpec::One(resource) => assert_eq!(resource.name(), "core:ore"),
        ResourceSpec::Many(_) => panic!("expected a single resource"),
    }
}

#[test]
fn rule_schema_describes_rule_fields() {
    let schema = serde_json::to_string(&rule_file_json_schema()).expect("serialize schema");
    for needle in ["clusterSize", "numClusters", "minHeight", "sparse-cluster", "uniform"] {
        assert!(schema.contains(needle), "schema missing {needle}");
    }
}
