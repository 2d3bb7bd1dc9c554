use crate::config::HarnessProfile;
use crate::model::TestEntry;

/// Assemble the harness program: include directive, untouched source, `main`.
///
/// Pure text assembly; the same inputs always produce the same bytes.
pub fn synthesize(
    profile: &HarnessProfile,
    source: &str,
    budget: u64,
    entries: &[TestEntry],
) -> String {
    let instance = &profile.instance;

    let mut program = String::with_capacity(source.len() + 128 + entries.len() * 64);
    // Header names are not string literals; no escaping applies.
    program.push_str(&format!("#include \"{}\"\n", profile.header));
    program.push_str(source);

    program.push_str("\n\nint main(){\n");
    program.push_str(&format!("    {} {instance}({budget});\n", profile.harness_type));
    program.push_str(&format!("    {instance}.{} = false;\n", profile.auto_interval_field));
    for entry in entries {
        program.push_str(&format!(
            "    {instance}.{}({}, {});\n",
            profile.measure_method,
            c_string_literal(&entry.test_name),
            entry.function_name
        ));
    }
    program.push('}');

    program
}

/// Quote `value` as a C string literal, escaping backslashes and quotes.
pub fn c_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
