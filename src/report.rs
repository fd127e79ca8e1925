// src/report.rs
use std::io::{self, Write};

use log::debug;

use crate::args::{Section, SectionOrder};
use crate::longest::find_longest;
use crate::table::UniqueItemTable;
use crate::tally::CharTally;

/// Character statistics plus the byte count reported in the header, which
/// comes from the file length rather than the scan.
#[derive(Debug)]
pub struct CharSection {
    pub tally: CharTally,
    pub total: u64,
}

/// Whatever was built for one invocation. `None` means not built.
#[derive(Debug, Default)]
pub struct AnalysisData {
    pub chars: Option<CharSection>,
    pub words: Option<UniqueItemTable>,
    pub lines: Option<UniqueItemTable>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssemblerState {
    NotStarted,
    Emitting,
    Done,
}

#[derive(Clone, Copy)]
enum Kind {
    Word,
    Line,
}

impl Kind {
    fn singular(self) -> &'static str {
        match self {
            Kind::Word => "Word",
            Kind::Line => "Line",
        }
    }

    fn plural(self) -> &'static str {
        match self {
            Kind::Word => "Words",
            Kind::Line => "Lines",
        }
    }
}

/// Writes sections in request order with one blank line between those
/// actually emitted.
pub struct ReportAssembler<'a, W: Write> {
    out: W,
    data: &'a AnalysisData,
    state: AssemblerState,
}

impl<'a, W: Write> ReportAssembler<'a, W> {
    pub fn new(out: W, data: &'a AnalysisData) -> Self {
        Self {
            out,
            data,
            state: AssemblerState::NotStarted,
        }
    }

    pub fn state(&self) -> AssemblerState {
        self.state
    }

    pub fn emit_all(&mut self, order: &SectionOrder) -> io::Result<()> {
        for section in order.iter() {
            self.emit(section)?;
        }
        self.state = AssemblerState::Done;
        Ok(())
    }

    /// Emits one section. Returns whether anything was written.
    pub fn emit(&mut self, section: Section) -> io::Result<bool> {
        if !self.has_data(section) {
            debug!("skipping {:?} section, nothing to report", section);
            return Ok(false);
        }
        if self.state == AssemblerState::Emitting {
            writeln!(self.out)?;
        }
        self.state = AssemblerState::Emitting;

        let data = self.data;
        match section {
            Section::Chars => {
                if let Some(chars) = &data.chars {
                    self.write_chars(chars)?;
                }
            }
            Section::Words => {
                if let Some(table) = &data.words {
                    self.write_table(Kind::Word, table)?;
                }
            }
            Section::Lines => {
                if let Some(table) = &data.lines {
                    self.write_table(Kind::Line, table)?;
                }
            }
            Section::LongestWord => {
                if let Some(table) = &data.words {
                    self.write_longest(Kind::Word, table)?;
                }
            }
            Section::LongestLine => {
                if let Some(table) = &data.lines {
                    self.write_longest(Kind::Line, table)?;
                }
            }
        }
        Ok(true)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn has_data(&self, section: Section) -> bool {
        match section {
            Section::Chars => self.data.chars.is_some(),
            Section::Words => self.data.words.is_some(),
            Section::Lines => self.data.lines.is_some(),
            Section::LongestWord => self.data.words.as_ref().is_some_and(|t| !t.is_empty()),
            Section::LongestLine => self.data.lines.as_ref().is_some_and(|t| !t.is_empty()),
        }
    }

    fn write_chars(&mut self, chars: &CharSection) -> io::Result<()> {
        writeln!(self.out, "Total Number of Chars = {}", chars.total)?;
        writeln!(self.out, "Total Unique Chars = {}", chars.tally.unique_count())?;
        writeln!(self.out)?;
        for (value, stats) in chars.tally.present() {
            write!(self.out, "Ascii Value: {}, Char: ", value)?;
            self.out.write_all(&[value])?;
            writeln!(
                self.out,
                ", Count: {}, Initial Position: {}",
                stats.count, stats.first_position
            )?;
        }
        Ok(())
    }

    fn write_table(&mut self, kind: Kind, table: &UniqueItemTable) -> io::Result<()> {
        writeln!(
            self.out,
            "Total Number of {}: {}",
            kind.plural(),
            table.total_count()
        )?;
        writeln!(
            self.out,
            "Total Unique {}: {}",
            kind.plural(),
            table.unique_count()
        )?;
        writeln!(self.out)?;
        for (content, stats) in table.iter() {
            write!(self.out, "{}: ", kind.singular())?;
            self.out.write_all(content)?;
            writeln!(
                self.out,
                ", Freq: {}, Initial Position: {}",
                stats.frequency, stats.first_order
            )?;
        }
        Ok(())
    }

    fn write_longest(&mut self, kind: Kind, table: &UniqueItemTable) -> io::Result<()> {
        let Some(longest) = find_longest(table) else {
            return Ok(());
        };
        writeln!(
            self.out,
            "Longest {} is {} characters long:",
            kind.singular(),
            longest.max_len
        )?;
        for item in longest.items {
            self.out.write_all(b"\t")?;
            self.out.write_all(item)?;
            writeln!(self.out)?;
        }
        Ok(())
    }
}

/// Renders the whole report into memory.
pub fn render(order: &SectionOrder, data: &AnalysisData) -> io::Result<Vec<u8>> {
    let mut assembler = ReportAssembler::new(Vec::new(), data);
    assembler.emit_all(order)?;
    Ok(assembler.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::build_analysis;
    use crate::config::Limits;
    use crate::extract::build_word_table;

    fn data_for(input: &[u8], order: &SectionOrder) -> AnalysisData {
        build_analysis(input, input.len() as u64, order, &Limits::default())
    }

    fn report(input: &[u8], sections: &[Section]) -> String {
        let order: SectionOrder = sections.iter().copied().collect();
        let data = data_for(input, &order);
        String::from_utf8(render(&order, &data).unwrap()).unwrap()
    }

    #[test]
    fn word_section() {
        assert_eq!(
            report(b"a bb a", &[Section::Words]),
            "Total Number of Words: 3\n\
             Total Unique Words: 2\n\
             \n\
             Word: a, Freq: 2, Initial Position: 0\n\
             Word: bb, Freq: 1, Initial Position: 1\n"
        );
    }

    #[test]
    fn line_section() {
        assert_eq!(
            report(b"hi\nhi\nbye\n", &[Section::Lines]),
            "Total Number of Lines: 3\n\
             Total Unique Lines: 2\n\
             \n\
             Line: bye, Freq: 1, Initial Position: 2\n\
             Line: hi, Freq: 2, Initial Position: 0\n"
        );
    }

    #[test]
    fn char_section() {
        assert_eq!(
            report(b"aba", &[Section::Chars]),
            "Total Number of Chars = 3\n\
             Total Unique Chars = 2\n\
             \n\
             Ascii Value: 97, Char: a, Count: 2, Initial Position: 0\n\
             Ascii Value: 98, Char: b, Count: 1, Initial Position: 1\n"
        );
    }

    #[test]
    fn longest_sections() {
        assert_eq!(
            report(b"dog cat\nox\n", &[Section::LongestWord, Section::LongestLine]),
            "Longest Word is 3 characters long:\n\
             \tcat\n\
             \tdog\n\
             \n\
             Longest Line is 7 characters long:\n\
             \tdog cat\n"
        );
    }

    #[test]
    fn sections_follow_request_order() {
        let text = report(b"x", &[Section::Words, Section::Chars]);
        assert_eq!(
            text,
            "Total Number of Words: 1\n\
             Total Unique Words: 1\n\
             \n\
             Word: x, Freq: 1, Initial Position: 0\n\
             \n\
             Total Number of Chars = 1\n\
             Total Unique Chars = 1\n\
             \n\
             Ascii Value: 120, Char: x, Count: 1, Initial Position: 0\n"
        );
    }

    #[test]
    fn empty_word_table_prints_zero_totals_and_skips_longest() {
        let text = report(
            b" \n \n",
            &[Section::LongestWord, Section::Words, Section::LongestWord],
        );
        assert_eq!(
            text,
            "Total Number of Words: 0\n\
             Total Unique Words: 0\n\
             \n"
        );
    }

    #[test]
    fn unbuilt_section_is_skipped_without_separator() {
        let order: SectionOrder = [Section::Words, Section::Lines].into_iter().collect();
        let data = AnalysisData {
            words: Some(build_word_table(b"x", &Limits::default())),
            ..AnalysisData::default()
        };
        let mut assembler = ReportAssembler::new(Vec::new(), &data);
        assert_eq!(assembler.state(), AssemblerState::NotStarted);
        assert!(!assembler.emit(Section::Lines).unwrap());
        assert_eq!(assembler.state(), AssemblerState::NotStarted);
        assembler.emit_all(&order).unwrap();
        assert_eq!(assembler.state(), AssemblerState::Done);
        let text = String::from_utf8(assembler.into_inner()).unwrap();
        assert!(text.starts_with("Total Number of Words: 1\n"));
        assert!(text.ends_with("Initial Position: 0\n"));
    }

    #[test]
    fn no_sections_no_output() {
        assert_eq!(report(b"abc", &[]), "");
    }

    #[test]
    fn raw_bytes_are_written_as_is() {
        let order: SectionOrder = [Section::Words].into_iter().collect();
        let data = data_for(b"caf\xe9", &order);
        let bytes = render(&order, &data).unwrap();
        assert!(bytes.windows(5).any(|w| w == b"caf\xe9,"));
    }
}
