//! Phone number parsing, validation and as-you-type formatting.
//!
//! The form only ever talks to [`PhoneNumbers`]; [`LibPhoneNumber`] is the
//! production implementation backed by the `phonenumber` crate. Numbers are
//! parsed without a default region, so a number is only valid when it carries
//! its own country calling code.

use std::iter::Peekable;
use std::str::Chars;

use phonenumber::metadata::{Format, Metadata, DATABASE};
use phonenumber::Mode;

/// Placeholder shown in front of the phone field when no country is known.
pub const GLOBE: &str = "🌍";

/// Derived view of the current phone input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedPhone {
    /// ISO 3166-1 alpha-2 code of the detected country, if any.
    pub country: Option<String>,
    pub is_valid: bool,
}

/// Phone number capabilities consumed by the form.
pub trait PhoneNumbers {
    /// Reformat a (possibly partial) number for display while it is typed.
    fn format_as_you_type(&self, raw: &str) -> String;

    fn is_valid(&self, raw: &str) -> bool;

    /// `None` when the input cannot be read as a phone number at all.
    fn parse(&self, raw: &str) -> Option<ParsedPhone>;
}

/// [`PhoneNumbers`] on top of the libphonenumber metadata.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LibPhoneNumber;

impl LibPhoneNumber {
    pub fn new() -> Self {
        Self
    }

    fn parse_number(raw: &str) -> Option<phonenumber::PhoneNumber> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        phonenumber::parse(None, raw).ok()
    }
}

impl PhoneNumbers for LibPhoneNumber {
    fn format_as_you_type(&self, raw: &str) -> String {
        // Parse what was typed, so an extension survives formatting.
        if let Some(number) = Self::parse_number(raw) {
            if phonenumber::is_valid(&number) {
                return number.format().mode(Mode::International).to_string();
            }
        }
        let normalized = normalize(raw);
        match normalized.strip_prefix('+') {
            Some(digits) => format_partial(digits),
            None => normalized,
        }
    }

    fn is_valid(&self, raw: &str) -> bool {
        Self::parse_number(raw)
            .map(|number| phonenumber::is_valid(&number))
            .unwrap_or(false)
    }

    fn parse(&self, raw: &str) -> Option<ParsedPhone> {
        let number = Self::parse_number(raw)?;
        Some(ParsedPhone {
            country: number.country().id().map(|id| format!("{id:?}")),
            is_valid: phonenumber::is_valid(&number),
        })
    }
}

/// Keep a leading `+` and every digit, drop everything else.
fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_start();
    let mut out = String::with_capacity(trimmed.len());
    if trimmed.starts_with('+') {
        out.push('+');
    }
    out.extend(trimmed.chars().filter(char::is_ascii_digit));
    out
}

/// `+CC` followed by the national digits typed so far, grouped the way the
/// country's international format groups them.
fn format_partial(digits: &str) -> String {
    let Some((code, national)) = split_calling_code(digits) else {
        return format!("+{digits}");
    };
    if national.is_empty() {
        return format!("+{code}");
    }
    let grouped = national_format(code, national)
        .and_then(|format| group_national(national, format))
        .unwrap_or_else(|| national.to_string());
    format!("+{code} {grouped}")
}

/// Calling codes are prefix-free, so the shortest known prefix is the code.
fn split_calling_code(digits: &str) -> Option<(u16, &str)> {
    (1..=digits.len().min(3)).find_map(|len| {
        let code: u16 = digits[..len].parse().ok()?;
        DATABASE.by_code(&code)?;
        Some((code, &digits[len..]))
    })
}

/// First format of the code's main country whose leading digits fit `national`.
fn national_format(code: u16, national: &str) -> Option<&'static Format> {
    let entries = DATABASE.by_code(&code)?;
    let meta: &'static Metadata = entries
        .iter()
        .copied()
        .find(|meta| meta.is_main_country_for_code())
        .or_else(|| entries.first().copied())?;
    let formats = if meta.international_formats().is_empty() {
        meta.formats()
    } else {
        meta.international_formats()
    };
    formats.iter().find(|format| {
        format.format().contains("$1")
            && format.leading_digits().first().map_or(true, |leading| {
                leading
                    .find(national)
                    .map_or(false, |found| found.start() == 0)
            })
    })
}

/// Split `national` into the format's groups and join them with its
/// separators. Digits past the last group stay in the last group.
fn group_national(national: &str, format: &Format) -> Option<String> {
    let sizes = group_sizes(format.pattern().as_str())?;

    let mut groups = Vec::with_capacity(sizes.len());
    let mut rest = national;
    for (i, size) in sizes.iter().enumerate() {
        if rest.is_empty() {
            break;
        }
        let take = if i + 1 == sizes.len() {
            rest.len()
        } else {
            (*size).min(rest.len())
        };
        let (head, tail) = rest.split_at(take);
        groups.push(head);
        rest = tail;
    }

    let mut out = String::with_capacity(national.len() + groups.len());
    let mut template = format.format();
    for (i, group) in groups.iter().enumerate() {
        let marker = format!("${}", i + 1);
        let at = template.find(&marker)?;
        if i > 0 {
            out.push_str(&template[..at]);
        }
        out.push_str(group);
        template = &template[at + marker.len()..];
    }
    Some(out)
}

/// Minimum digit count of each capture group in a pattern such as
/// `(\d{3})(\d{3,4})`. `None` for anything fancier than digit classes and
/// counted repetition.
fn group_sizes(pattern: &str) -> Option<Vec<usize>> {
    let mut sizes = Vec::new();
    let mut current: Option<usize> = None;
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '(' if current.is_none() => current = Some(0),
            ')' => sizes.push(current.take()?),
            '\\' => {
                chars.next()?;
                *current.as_mut()? += repetition(&mut chars)?;
            }
            '[' => {
                chars.by_ref().find(|c| *c == ']')?;
                *current.as_mut()? += repetition(&mut chars)?;
            }
            '0'..='9' => *current.as_mut()? += repetition(&mut chars)?,
            _ => return None,
        }
    }
    (current.is_none() && !sizes.is_empty()).then_some(sizes)
}

fn repetition(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    if chars.peek() != Some(&'{') {
        return Some(1);
    }
    chars.next();
    let bounds: String = chars.by_ref().take_while(|c| *c != '}').collect();
    bounds.split(',').next()?.trim().parse().ok()
}

/// Flag emoji for a two-letter country code, or [`GLOBE`] when there is none.
pub fn flag_glyph(country: Option<&str>) -> String {
    let Some(code) = country else {
        return GLOBE.to_string();
    };
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return GLOBE.to_string();
    }
    code.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}
