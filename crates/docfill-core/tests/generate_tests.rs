//! End-to-end generation tests over the contract fixture

use std::path::Path;

use serde_json::Value;

use docfill_core::document::store::open_document;
use docfill_core::template::{generate, scan_document, AttributeMap, Generator};
use docfill_core::DocfillError;
use docfill_testkit::{
    client_attributes_json, temp_dir_in_workspace, write_attributes, write_template,
};

fn fixture_attributes() -> AttributeMap {
    match serde_json::from_str(&client_attributes_json()).unwrap() {
        Value::Object(map) => map,
        _ => panic!("attribute fixture must be a JSON object"),
    }
}

#[test]
fn test_scan_finds_tokens_in_every_region() {
    let temp = temp_dir_in_workspace();
    let template = write_template(temp.path(), "contract.json");

    let document = open_document(&template).unwrap();
    let tokens = scan_document(&document);

    for expected in [
        "{NUMBER}",
        "{DATE}",
        "{FIO}",
        "{ fio }",
        "{ ADDRESS }",
        "{INN}",
        "{COMPANY}",
        "{PAGE}",
    ] {
        assert!(tokens.contains(expected), "missing token {}", expected);
    }
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_generate_fills_all_regions() {
    let temp = temp_dir_in_workspace();
    let template = write_template(temp.path(), "contract.json");
    let out_dir = temp.path().join("generated");

    let out_path = generate(&template, &fixture_attributes(), &out_dir).unwrap();
    let output = open_document(&out_path).unwrap();

    // Body paragraphs, including the split-run token
    assert_eq!(
        output.body.paragraphs[0].text(),
        "SERVICE AGREEMENT No 42-A of 2026-08-07"
    );
    assert_eq!(output.body.paragraphs[1].text(), "Customer: Ivanov I.I.");
    assert_eq!(
        output.body.paragraphs[2].text(),
        "Address: Moscow, Tverskaya 1"
    );

    // Stray brace survives verbatim
    assert_eq!(
        output.body.paragraphs[3].text(),
        "Stray brace { stays literal"
    );

    // Table cells: both literal variants of the same key
    let row = &output.body.tables[0].rows[0];
    assert_eq!(row.cells[0].paragraphs[0].text(), "Ivanov I.I.");
    assert_eq!(row.cells[1].paragraphs[0].text(), "Ivanov I.I.");

    // Nested table cell had no attribute: default placeholder
    assert_eq!(
        row.cells[1].tables[0].rows[0].cells[0].paragraphs[0].text(),
        "—"
    );

    // Header and footer
    assert_eq!(
        output.sections[0].header.paragraphs[0].text(),
        "Horns and Hooves LLC"
    );
    assert_eq!(output.sections[0].footer.paragraphs[0].text(), "page —");
}

#[test]
fn test_round_trip_leaves_no_resolved_tokens() {
    let temp = temp_dir_in_workspace();
    let template = write_template(temp.path(), "contract.json");

    let document = open_document(&template).unwrap();
    let before = scan_document(&document);

    // Mapping covering every discovered token's normalized key
    let mut attributes = AttributeMap::new();
    for token in &before {
        let inner = &token[1..token.len() - 1];
        attributes.insert(
            inner.trim().to_lowercase(),
            Value::String("filled".to_string()),
        );
    }

    let out_path = generate(&template, &attributes, temp.path().join("out")).unwrap();
    let output = open_document(&out_path).unwrap();
    let after = scan_document(&output);

    for token in &before {
        assert!(
            !after.contains(token),
            "token {} survived substitution",
            token
        );
    }
}

#[test]
fn test_empty_mapping_defaults_everything() {
    let temp = temp_dir_in_workspace();
    let template = write_template(temp.path(), "contract.json");

    let out_path = generate(&template, &AttributeMap::new(), temp.path().join("out")).unwrap();
    let output = open_document(&out_path).unwrap();

    assert_eq!(output.body.paragraphs[0].text(), "SERVICE AGREEMENT No — of —");
    assert_eq!(output.body.paragraphs[1].text(), "Customer: —");
    // Non-token text untouched
    assert_eq!(
        output.body.paragraphs[3].text(),
        "Stray brace { stays literal"
    );
}

#[test]
fn test_sequential_runs_never_collide() {
    let temp = temp_dir_in_workspace();
    let template = write_template(temp.path(), "contract.json");
    let out_dir = temp.path().join("out");
    let generator = Generator::new(&out_dir);

    let attributes = fixture_attributes();
    let first = generator.generate(&template, &attributes).unwrap();
    let second = generator.generate(&template, &attributes).unwrap();
    let third = generator.generate(&template, &attributes).unwrap();

    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_ne!(first, third);
    assert!(first.exists() && second.exists() && third.exists());
}

#[test]
fn test_concurrent_runs_are_independent() {
    let temp = temp_dir_in_workspace();
    let template = write_template(temp.path(), "contract.json");
    let out_dir = temp.path().join("out");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let template = template.clone();
            let out_dir = out_dir.clone();
            std::thread::spawn(move || {
                generate(&template, &fixture_attributes(), &out_dir).unwrap()
            })
        })
        .collect();

    let mut paths: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), 4, "concurrent runs must not collide");
}

#[test]
fn test_unreadable_template_produces_no_output() {
    let temp = temp_dir_in_workspace();
    let out_dir = temp.path().join("out");

    let result = generate(
        Path::new("/nonexistent/contract.json"),
        &AttributeMap::new(),
        &out_dir,
    );

    assert!(matches!(
        result,
        Err(DocfillError::TemplateUnreadable { .. })
    ));
    assert!(!out_dir.exists());
}

#[test]
fn test_attribute_file_round_trip() {
    // The attribute fixture file loads into the exact mapping the engine takes
    let temp = temp_dir_in_workspace();
    let attributes_path = write_attributes(temp.path(), "client.json");

    let content = std::fs::read_to_string(attributes_path).unwrap();
    let parsed: Value = serde_json::from_str(&content).unwrap();
    let map = parsed.as_object().unwrap();

    assert_eq!(map.get("fio").unwrap(), "Ivanov I.I.");
    assert_eq!(map.len(), 5);
}
