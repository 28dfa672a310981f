// Version string scanner
//
// The string is split on '-' first. The head token is then taken apart in
// stages, each stage working on what the previous one left behind:
//
//   Numeric  head must start with a dotted numeric run, else head becomes a qualifier
//   Beta     first 'b' followed by an integer           "1.1b2"       -> Beta(2)
//   Rc       first "rc" followed by an integer          "1.1.rc1"     -> ReleaseCandidate(1)
//            (only looked for when the head has no 'b' at all)
//   Update   first '_', everything after it             "1.6.0_u24"   -> update marker "u24"
//   Numbers  the numeric run split on '.'               "1.6.0"       -> (1, 6, 0)
//
// Marker scans run on the lower cased head. Any marker that is found
// clears the suffix that followed the numeric run.

use std::sync::LazyLock;

use regex::Regex;

use crate::{PreRelease, VersionError};

static VERSION_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9.]*[0-9]+)(.*)$").unwrap());

/// The fields of a version, as found by the scanner.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Parts {
    pub numbers: Vec<u64>,
    pub suffix: Option<String>,
    pub pre_release: PreRelease,
    pub update_marker: Option<String>,
    pub qualifiers: Vec<String>,
}

pub(crate) fn parse_parts(input: &str) -> Result<Parts, VersionError> {

    // empty tokens are skipped, "1.0--x" has the single qualifier "x"
    let mut tokens = trim(input).split('-').filter(|t| !t.is_empty());

    let Some(head) = tokens.next() else {
        return Err(VersionError::empty(input));
    };

    let qualifiers = tokens.map(String::from).collect();

    Ok(Scanner::new(head, qualifiers).run())
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Numeric,
    Beta,
    ReleaseCandidate,
    UpdateMarker,
    Numbers,
    Done,
}

struct Scanner<'a> {
    head: &'a str,
    stage: Stage,
    // the digits and dots the head started with
    numbered: &'a str,
    // lower cased head, cut short as markers are found
    remaining: String,
    parts: Parts,
}

impl<'a> Scanner<'a> {

    fn new(head: &'a str, qualifiers: Vec<String>) -> Self {
        Self {
            head,
            stage: Stage::Numeric,
            numbered: "",
            remaining: String::new(),
            parts: Parts {
                qualifiers,
                ..Parts::default()
            },
        }
    }

    fn run(mut self) -> Parts {
        loop {
            tracing::trace!(head = self.head, stage = ?self.stage, remaining = self.remaining.as_str(), "scan");
            self.stage = match self.stage {
                Stage::Numeric => self.numeric(),
                Stage::Beta => self.beta(),
                Stage::ReleaseCandidate => self.release_candidate(),
                Stage::UpdateMarker => self.update_marker(),
                Stage::Numbers => self.numbers(),
                Stage::Done => return self.parts,
            };
        }
    }

    fn numeric(&mut self) -> Stage {

        let Some(caps) = VERSION_NUMBER_RE.captures(self.head) else {
            // "r06", "SNAPSHOT": nothing numeric to work with
            self.parts.qualifiers.insert(0, self.head.to_string());
            return Stage::Done;
        };

        self.numbered = caps.get(1).map_or("", |m| m.as_str());
        self.parts.suffix = caps.get(2)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from);
        self.remaining = self.head.to_lowercase();

        Stage::Beta
    }

    fn beta(&mut self) -> Stage {

        let Some(pos) = self.remaining.find('b') else {
            return Stage::ReleaseCandidate;
        };

        // a 'b' that is not followed by a number ("3.0.beta") stays in the suffix,
        // and still keeps us from looking for "rc"
        if let Some(n) = marker_number(&self.remaining[pos + 1..]) {
            self.parts.pre_release = PreRelease::Beta(n);
            self.parts.suffix = None;
            self.remaining.truncate(pos);
        }

        Stage::UpdateMarker
    }

    fn release_candidate(&mut self) -> Stage {

        if let Some(pos) = self.remaining.find("rc") {
            if let Some(n) = marker_number(&self.remaining[pos + 2..]) {
                self.parts.pre_release = PreRelease::ReleaseCandidate(n);
                self.parts.suffix = None;
                self.remaining.truncate(pos);
            }
        }

        Stage::UpdateMarker
    }

    fn update_marker(&mut self) -> Stage {

        if let Some(pos) = self.remaining.find('_') {
            self.parts.update_marker = Some(trim(&self.remaining[pos + 1..]).to_string());
            self.remaining = trim(&self.remaining[..pos]).to_string();
            self.parts.suffix = None;
        }

        Stage::Numbers
    }

    fn numbers(&mut self) -> Stage {

        for token in self.numbered.split('.').map(trim).filter(|t| !t.is_empty()) {
            match token.parse::<u64>() {
                Ok(n) => self.parts.numbers.push(n),
                Err(err) => {
                    tracing::trace!(head = self.head, token, %err, "dropping numeric token");
                }
            }
        }

        Stage::Done
    }
}

fn marker_number(s: &str) -> Option<u64> {
    trim(s).parse::<u64>().ok()
}

/// Strips ASCII spaces and control characters only, a no-break space is kept.
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}
