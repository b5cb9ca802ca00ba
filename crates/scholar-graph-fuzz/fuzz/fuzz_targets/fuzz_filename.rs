#![no_main]

use libfuzzer_sys::fuzz_target;
use scholar_graph_mcp::pdf::sanitize_filename;

fuzz_target!(|data: &[u8]| {
    let Ok(title) = std::str::from_utf8(data) else {
        return;
    };

    let name = sanitize_filename(title, 100);
    assert!(!name.is_empty());
    assert!(name.chars().count() <= 100);
    assert!(!name.contains(['<', '>', ':', '"', '/', '\\', '|', '?', '*']));
    assert_eq!(sanitize_filename(&name, 100), name);
});
