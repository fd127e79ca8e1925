// src/args.rs
use crate::error::CounterError;

/// A report section, named after the flag that requests it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Chars,
    Words,
    Lines,
    LongestWord,
    LongestLine,
}

impl Section {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-c" => Some(Section::Chars),
            "-w" => Some(Section::Words),
            "-l" => Some(Section::Lines),
            "-Lw" => Some(Section::LongestWord),
            "-Ll" => Some(Section::LongestLine),
            _ => None,
        }
    }
}

/// Sections in the order their flags first appeared. Repeats are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionOrder(Vec<Section>);

impl SectionOrder {
    pub fn request(&mut self, section: Section) {
        if !self.0.contains(&section) {
            self.0.push(section);
        }
    }

    pub fn contains(&self, section: Section) -> bool {
        self.0.contains(&section)
    }

    pub fn needs_words(&self) -> bool {
        self.contains(Section::Words) || self.contains(Section::LongestWord)
    }

    pub fn needs_lines(&self) -> bool {
        self.contains(Section::Lines) || self.contains(Section::LongestLine)
    }

    pub fn iter(&self) -> impl Iterator<Item = Section> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Section> for SectionOrder {
    fn from_iter<I: IntoIterator<Item = Section>>(iter: I) -> Self {
        let mut order = SectionOrder::default();
        for section in iter {
            order.request(section);
        }
        order
    }
}

/// One validated analyze request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub input: String,
    pub output: Option<String>,
    pub sections: SectionOrder,
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Value following `-f` or `-o`, rejecting a missing one or another flag.
fn take_value<'a, I>(tokens: &mut I, missing: CounterError) -> Result<String, CounterError>
where
    I: Iterator<Item = &'a str>,
{
    match tokens.next() {
        Some(value) if !is_flag(value) => Ok(value.to_string()),
        _ => Err(missing),
    }
}

/// Validates argument tokens, program name excluded. Used for the real
/// command line and for every batch line.
pub fn parse_invocation<S: AsRef<str>>(tokens: &[S]) -> Result<Invocation, CounterError> {
    let mut input = None;
    let mut output = None;
    let mut sections = SectionOrder::default();

    let mut tokens = tokens.iter().map(|token| token.as_ref());
    while let Some(token) = tokens.next() {
        match token {
            "-f" => input = Some(take_value(&mut tokens, CounterError::NoInputFile)?),
            "-o" => output = Some(take_value(&mut tokens, CounterError::NoOutputFile)?),
            flag => match Section::from_flag(flag) {
                Some(section) => sections.request(section),
                None => return Err(CounterError::InvalidFlag),
            },
        }
    }

    let input = input.ok_or(CounterError::NoInputFile)?;
    Ok(Invocation {
        input,
        output,
        sections,
    })
}

/// Splits a batch line on spaces. Runs of spaces yield no empty tokens.
pub fn split_batch_line(line: &str) -> Vec<&str> {
    line.split(' ').filter(|token| !token.is_empty()).collect()
}
