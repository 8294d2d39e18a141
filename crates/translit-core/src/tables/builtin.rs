//! Sample table set bundled with the crate.

pub(super) fn file(name: &str) -> Option<&'static str> {
    let text = match name {
        "rules-en.txt" => include_str!("../../data/rules-en.txt"),
        "rules-si.txt" => include_str!("../../data/rules-si.txt"),
        "rules-ta.txt" => include_str!("../../data/rules-ta.txt"),
        "phonetic-en.txt" => include_str!("../../data/phonetic-en.txt"),
        "phonetic-si.txt" => include_str!("../../data/phonetic-si.txt"),
        "phonetic-ta.txt" => include_str!("../../data/phonetic-ta.txt"),
        "en-to-si.txt" => include_str!("../../data/en-to-si.txt"),
        "en-to-ta.txt" => include_str!("../../data/en-to-ta.txt"),
        "si-to-ta.txt" => include_str!("../../data/si-to-ta.txt"),
        _ => return None,
    };
    Some(text)
}
