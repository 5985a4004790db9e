use lodeforge_rules::rule_file_json_schema;

fn main() {
    let schema = rule_file_json_schema();
    let json = serde_json::to_string_pretty(&schema).expect("serialize rule json schema");
    println!("{json}");
}
