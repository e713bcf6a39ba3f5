use std::collections::HashSet;
use std::path::Path;

const VALID_RESULTS: [&str; 3] = ["success", "mixed", "failure"];
const SYNTHETIC_ID_PREFIX: &str = "CS-GEN-";

fn main() {
    let archive_path = Path::new("archives/curated_cases.json");
    validate_archive_file(archive_path);
    set_build_dependencies();
}

fn validate_archive_file(archive_path: &Path) {
    // Ensure archive exists at build time
    assert!(
        archive_path.exists(),
        "\n\nARCHIVE BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the curated archive file before building.\n",
        archive_path.display()
    );

    let archive_contents = std::fs::read_to_string(archive_path).unwrap_or_else(|e| {
        panic!(
            "\n\nARCHIVE BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            archive_path.display()
        );
    });

    let archive: serde_json::Value = serde_json::from_str(&archive_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nARCHIVE BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            archive_path.display()
        );
    });

    validate_archive_structure(&archive);
}

fn validate_archive_structure(archive: &serde_json::Value) {
    assert!(
        archive.is_object(),
        "\n\nARCHIVE BUILD ERROR: Root must be a JSON object\n\
         Got: {archive}\n"
    );

    let cases = archive.get("cases").unwrap_or_else(|| {
        panic!(
            "\n\nARCHIVE BUILD ERROR: Missing 'cases' field\n\
             The archive must have a top-level 'cases' array.\n"
        );
    });

    let cases = cases.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nARCHIVE BUILD ERROR: 'cases' must be an array\n\
             Got: {cases}\n"
        );
    });

    let mut seen = HashSet::new();
    for (i, case) in cases.iter().enumerate() {
        let case_id = case
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_case_fields(case, case_id, i);
        validate_case_outcomes(case, case_id);

        assert!(
            seen.insert(case_id.to_string()),
            "\n\nARCHIVE BUILD ERROR: Duplicate case id '{case_id}' (index {i})\n"
        );
        assert!(
            !case_id.starts_with(SYNTHETIC_ID_PREFIX),
            "\n\nARCHIVE BUILD ERROR: Curated case '{case_id}' uses the reserved \
             synthetic prefix '{SYNTHETIC_ID_PREFIX}'\n"
        );
    }

    println!(
        "cargo:warning=Validated archive: {} curated cases",
        cases.len()
    );
}

fn validate_case_fields(case: &serde_json::Value, case_id: &str, index: usize) {
    for field in [
        "id", "title", "entity", "sector", "country", "year", "strategy", "outcomes",
    ] {
        assert!(
            case.get(field).is_some(),
            "\n\nARCHIVE BUILD ERROR: Case '{case_id}' (index {index}) missing '{field}' field\n"
        );
    }

    let size = case
        .get("investment_size_million_usd")
        .and_then(serde_json::Value::as_f64);
    assert!(
        size.is_some_and(|s| s >= 0.0),
        "\n\nARCHIVE BUILD ERROR: Case '{case_id}' needs a non-negative \
         'investment_size_million_usd'\n"
    );
}

fn validate_case_outcomes(case: &serde_json::Value, case_id: &str) {
    let Some(outcomes) = case.get("outcomes") else {
        return;
    };

    let result = outcomes
        .get("result")
        .and_then(|v| v.as_str())
        .unwrap_or("<missing>");
    assert!(
        VALID_RESULTS.contains(&result),
        "\n\nARCHIVE BUILD ERROR: Case '{case_id}' has invalid result '{result}'\n\
         Expected one of: {}\n",
        VALID_RESULTS.join(", ")
    );

    let roi = outcomes.get("roi_achieved").and_then(serde_json::Value::as_f64);
    assert!(
        roi.is_some_and(|r| r >= 0.0),
        "\n\nARCHIVE BUILD ERROR: Case '{case_id}' needs a non-negative 'roi_achieved'\n"
    );

    assert!(
        outcomes
            .get("key_learnings")
            .is_some_and(serde_json::Value::is_array),
        "\n\nARCHIVE BUILD ERROR: Case '{case_id}' 'key_learnings' must be an array\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the archive changes
    println!("cargo:rerun-if-changed=archives/curated_cases.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
