use tracing::{trace, warn};

use super::{DictEntry, DictionaryTable};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DictRecordError {
    #[error("line {line}: expected 4 fields, found {found}")]
    MissingFields { line: usize, found: usize },
    #[error("line {line}: empty word")]
    EmptyWord { line: usize },
}

/// Both directions of one mapping file.
#[derive(Debug, Default)]
pub struct ParsedMapping {
    pub forward: DictionaryTable,
    pub reverse: DictionaryTable,
    pub rejected: Vec<DictRecordError>,
}

/// Parse `source,dest,nameFlagA,nameFlagB` records.
///
/// A record is a person name when either flag is `1` or `true`. Every
/// record feeds the forward table and, swapped, the reverse table; in both
/// the first occurrence of a key wins.
pub fn parse_mapping(text: &str) -> ParsedMapping {
    let mut parsed = ParsedMapping::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match parse_record(line, raw) {
            Ok(entry) => {
                let reversed = entry.reversed();
                if !parsed.forward.insert(entry) {
                    trace!(line, "duplicate forward key dropped");
                }
                if !parsed.reverse.insert(reversed) {
                    trace!(line, "duplicate reverse key dropped");
                }
            }
            Err(e) => {
                warn!("rejected dictionary record: {e}");
                parsed.rejected.push(e);
            }
        }
    }

    parsed
}

fn parse_record(line: usize, raw: &str) -> Result<DictEntry, DictRecordError> {
    let lowered = raw.to_lowercase();
    let fields: Vec<&str> = lowered.split(',').collect();
    if fields.len() < 4 {
        return Err(DictRecordError::MissingFields {
            line,
            found: fields.len(),
        });
    }
    let (source, dest) = (fields[0].trim(), fields[1].trim());
    if source.is_empty() || dest.is_empty() {
        return Err(DictRecordError::EmptyWord { line });
    }
    let is_person_name = is_truthy(fields[2]) || is_truthy(fields[3]);
    Ok(DictEntry::new(source, dest, is_person_name))
}

fn is_truthy(flag: &str) -> bool {
    matches!(flag.trim(), "1" | "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_by_name_flags() {
        let parsed = parse_mapping("Perera,පෙරේරා,1,0\nAsankha,අසංඛ,0,1\nColombo,කොළඹ,0,0\n");
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.forward.lookup("perera", true), Some("පෙරේරා"));
        assert_eq!(parsed.forward.lookup("asankha", true), Some("අසංඛ"));
        assert_eq!(parsed.forward.lookup("colombo", false), Some("කොළඹ"));
        assert_eq!(parsed.forward.lookup("colombo", true), None);
    }

    #[test]
    fn fills_reverse_direction() {
        let parsed = parse_mapping("Perera,පෙරේරා,1,0");
        assert_eq!(parsed.reverse.lookup("පෙරේරා", true), Some("perera"));
    }

    #[test]
    fn duplicates_keep_first() {
        let parsed = parse_mapping("Galle,ගාල්ල,0,0\ngalle,ගාලු,0,0\n");
        assert_eq!(parsed.forward.lookup("galle", false), Some("ගාල්ල"));
        assert_eq!(parsed.forward.other_len(), 1);
        // Distinct destinations both map back.
        assert_eq!(parsed.reverse.lookup("ගාලු", false), Some("galle"));
        assert_eq!(parsed.reverse.other_len(), 2);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn words_are_trimmed() {
        let parsed = parse_mapping("  Kandy , මහනුවර\t,0,0\r\n");
        assert!(parsed.rejected.is_empty());
        assert_eq!(parsed.forward.lookup("kandy", false), Some("මහනුවර"));
        assert_eq!(parsed.reverse.lookup("මහනුවර", false), Some("kandy"));
    }

    #[test]
    fn true_flag_is_truthy() {
        let parsed = parse_mapping("Nimal,නිමල්,true,0");
        assert_eq!(parsed.forward.lookup("nimal", true), Some("නිමල්"));
    }

    #[test]
    fn malformed_records_are_rejected() {
        let parsed = parse_mapping("Perera,පෙරේරා\n,x,0,0\nKandy,මහනුවර,0,0");
        assert_eq!(
            parsed.rejected,
            vec![
                DictRecordError::MissingFields { line: 1, found: 2 },
                DictRecordError::EmptyWord { line: 2 },
            ]
        );
        assert_eq!(parsed.forward.lookup("kandy", false), Some("මහනුවර"));
    }
}
