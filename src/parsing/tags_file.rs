//! Reader for the ctags "tags" file format.
//!
//! Each data line is `symbol<TAB>path<TAB>address[<TAB>extension fields...]`.
//! The address is read as a decimal, one-based line number, optionally
//! terminated by `;"` when extension fields follow (the shape Universal Ctags
//! writes with `--excmd=number`). Search-pattern addresses are not resolved;
//! such a line is still usable when it carries a `line:N` extension field
//! (`--fields=+n`).
//!
//! Parsing is lenient. The file comes from an external generator, so a line
//! that does not fit the grammar is dropped on its own and the rest of the
//! file is still read. Lines starting with `!` are pseudo-tags and are
//! skipped the same way.

use std::str::Lines;

use crate::types::TagRecord;

const PSEUDO_TAG_PREFIX: char = '!';
const FIELD_SEPARATOR: char = '\t';
const EXCMD_TERMINATOR: &str = ";\"";
const LINE_FIELD_PREFIX: &str = "line:";

/// Lazy iterator over the records of a tags file.
///
/// Cheap to construct; calling [`parse_tags`] again on the same text yields
/// the same sequence.
#[derive(Debug, Clone)]
pub struct TagsFileParser<'a> {
    lines: Lines<'a>,
    line_number: usize,
}

impl<'a> TagsFileParser<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines(),
            line_number: 0,
        }
    }
}

impl Iterator for TagsFileParser<'_> {
    type Item = TagRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let line = line.trim_end_matches('\r');

            if line.is_empty() || line.starts_with(PSEUDO_TAG_PREFIX) {
                continue;
            }

            match parse_line(line) {
                Some(record) => return Some(record),
                None => {
                    tracing::trace!(
                        "[tags] skipping malformed line {}: {line:?}",
                        self.line_number
                    );
                }
            }
        }
        None
    }
}

/// Parse tags-file text into records, in source order.
pub fn parse_tags(content: &str) -> TagsFileParser<'_> {
    TagsFileParser::new(content)
}

/// Parse a single data line.
///
/// Returns `None` for pseudo-tags and for anything that does not match the
/// `symbol<TAB>path<TAB>lineno` grammar.
pub fn parse_line(line: &str) -> Option<TagRecord> {
    if line.starts_with(PSEUDO_TAG_PREFIX) {
        return None;
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let symbol = fields.next().filter(|s| !s.is_empty())?;
    let path = fields.next().filter(|s| !s.is_empty())?;
    let address = fields.next()?;
    // Pattern addresses may themselves contain tabs, so scan every remaining field.
    let lineno = parse_line_number(address).or_else(|| {
        fields
            .filter_map(|field| field.strip_prefix(LINE_FIELD_PREFIX))
            .find_map(parse_line_number)
    })?;

    Some(TagRecord::new(symbol, path, lineno))
}

/// Convert a one-based address field into a zero-based line number.
fn parse_line_number(address: &str) -> Option<u32> {
    let digits = address.strip_suffix(EXCMD_TERMINATOR).unwrap_or(address);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let one_based: u32 = digits.parse().ok()?;
    one_based.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "!_TAG_FILE_FORMAT\t2\t//\n\
                          foo\tsrc/a.c\t10\n\
                          bar\tsrc/b.c\t5\n\
                          foo\tsrc/c.c\t20\n";

    #[test]
    fn test_parses_records_in_source_order() {
        let records: Vec<_> = parse_tags(SAMPLE).collect();
        assert_eq!(
            records,
            vec![
                TagRecord::new("foo", "src/a.c", 9),
                TagRecord::new("bar", "src/b.c", 4),
                TagRecord::new("foo", "src/c.c", 19),
            ]
        );
    }

    #[test]
    fn test_parsing_is_restartable() {
        let first: Vec<_> = parse_tags(SAMPLE).collect();
        let second: Vec<_> = parse_tags(SAMPLE).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_lines_are_skipped_individually() {
        let content = "alpha\tsrc/a.rs\t1\n\
                       broken line without tabs\n\
                       beta\tsrc/b.rs\n\
                       gamma\tsrc/c.rs\t/^fn gamma() {$/\n\
                       delta\tsrc/d.rs\t4\n";
        let records: Vec<_> = parse_tags(content).collect();
        let symbols: Vec<&str> = records.iter().map(|r| &*r.symbol).collect();
        assert_eq!(symbols, vec!["alpha", "delta"]);
    }

    #[test]
    fn test_accepts_extension_fields_and_excmd_terminator() {
        let record = parse_line("main\tsrc/main.rs\t12;\"\tf\tline:12").unwrap();
        assert_eq!(record, TagRecord::new("main", "src/main.rs", 11));

        let record = parse_line("Point\tgeo.h\t3\tkind:struct").unwrap();
        assert_eq!(record.lineno, 2);
    }

    #[test]
    fn test_pattern_address_falls_back_to_line_field() {
        let record = parse_line("main\tsrc/main.c\t/^int main(void) {$/;\"\tf\tline:12").unwrap();
        assert_eq!(record, TagRecord::new("main", "src/main.c", 11));

        let record = parse_line("tabbed\tsrc/t.c\t/^int\ttabbed(void)$/;\"\tkind:function\tline:3")
            .unwrap();
        assert_eq!(record.lineno, 2);

        // Without a line field a pattern address is unusable.
        assert!(parse_line("helper\tsrc/h.c\t/^void helper(void)$/;\"\tf").is_none());
        assert!(parse_line("helper\tsrc/h.c\t/^void helper(void)$/;\"\tline:0").is_none());
    }

    #[test]
    fn test_default_generator_output_shape() {
        let content = "!_TAG_FILE_FORMAT\t2\t/extended format/\n\
                       main\tsrc/main.c\t/^int main(void) {$/;\"\tf\tline:4\n\
                       helper\tsrc/util.c\t/^static int helper(int x)$/;\"\tf\tline:9\n\
                       MAX\tsrc/util.h\t3;\"\td\tline:3\n";
        let records: Vec<_> = parse_tags(content).collect();
        assert_eq!(
            records,
            vec![
                TagRecord::new("main", "src/main.c", 3),
                TagRecord::new("helper", "src/util.c", 8),
                TagRecord::new("MAX", "src/util.h", 2),
            ]
        );
    }

    #[test]
    fn test_rejects_zero_and_signed_line_numbers() {
        assert!(parse_line("foo\ta.c\t0").is_none());
        assert!(parse_line("foo\ta.c\t+3").is_none());
        assert!(parse_line("foo\ta.c\t-3").is_none());
        assert!(parse_line("foo\ta.c\t;\"").is_none());
        assert!(parse_line("foo\ta.c\t99999999999").is_none());
    }

    #[test]
    fn test_rejects_empty_symbol_or_path() {
        assert!(parse_line("\ta.c\t3").is_none());
        assert!(parse_line("foo\t\t3").is_none());
    }

    #[test]
    fn test_pseudo_tags_and_blank_lines_are_ignored() {
        let content = "!_TAG_PROGRAM_NAME\tUniversal Ctags\t//\n\n\nx\tx.c\t1\n";
        assert_eq!(parse_tags(content).count(), 1);
        assert!(parse_line("!_TAG_FILE_SORTED\t1\t/0=unsorted/").is_none());
    }

    #[test]
    fn test_handles_crlf_line_endings() {
        let content = "foo\tsrc/a.c\t10\r\nbar\tsrc/b.c\t5\r";
        let records: Vec<_> = parse_tags(content).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], TagRecord::new("bar", "src/b.c", 4));
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(parse_tags("").count(), 0);
    }
}
