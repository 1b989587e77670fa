//! Line-oriented input parsers.
//!
//! # Job file
//! ```text
//! 1          <- header, ignored
//! 3          <- number of jobs
//! 0900       <- start
//! 1030       <- end
//! 100        <- profit
//! ...        <- further start/end/profit triples
//! ```
//!
//! # Goodie file
//! ```text
//! Number of employees: 4
//! Goodies and Prices:
//! Fitbit Plus: 7980
//! ...
//! ```

use tracing::{debug, warn};

use crate::error::{ParseError, ParseErrorKind};
use crate::models::{Goodie, Job};

/// Parsed goodie file.
#[derive(Debug, Clone, PartialEq)]
pub struct GoodieInput {
    /// Declared number of employees, as written.
    pub headcount: i64,
    /// Goodies in file order.
    pub goodies: Vec<Goodie>,
}

/// Parses a job file.
///
/// Surrounding whitespace of the whole input is ignored. A trailing
/// incomplete triple is an error; a declared job count that disagrees with
/// the number of triples is only logged.
pub fn parse_jobs(input: &str) -> Result<Vec<Job>, ParseError> {
    let lines: Vec<&str> = input.trim().lines().collect();

    if lines.is_empty() {
        return Err(ParseError::new(1, ParseErrorKind::MissingLine("header")));
    }
    let declared = match lines.get(1) {
        Some(line) => parse_number::<usize>(line, 2)?,
        None => return Err(ParseError::new(2, ParseErrorKind::MissingLine("job count"))),
    };

    let mut jobs = Vec::new();
    for (group, chunk) in lines[2..].chunks(3).enumerate() {
        // 1-based line number of this triple's first line
        let first = 3 + group * 3;
        if chunk.len() < 3 {
            let missing = if chunk.len() == 1 { "end time" } else { "profit" };
            return Err(ParseError::new(
                first + chunk.len(),
                ParseErrorKind::MissingLine(missing),
            ));
        }

        let start = parse_number::<i64>(chunk[0], first)?;
        let end = parse_number::<i64>(chunk[1], first + 1)?;
        let profit = parse_number::<f64>(chunk[2], first + 2)?;
        let job = Job::new(start, end, profit)
            .map_err(|e| ParseError::new(first, ParseErrorKind::InvalidRecord(e)))?;
        jobs.push(job);
    }

    if jobs.len() != declared {
        warn!(
            declared,
            parsed = jobs.len(),
            "job count line disagrees with job records"
        );
    }
    debug!(count = jobs.len(), "parsed jobs");
    Ok(jobs)
}

/// Parses a goodie file.
///
/// Blank lines after the label line are skipped. Each goodie line is split
/// on its last `": "`, so names may themselves contain colons.
pub fn parse_goodies(input: &str) -> Result<GoodieInput, ParseError> {
    let mut lines = input.lines().enumerate();

    let headcount = match lines.next() {
        Some((_, line)) => {
            let (_, value) = split_pair(line, 1)?;
            parse_number::<i64>(value, 1)?
        }
        None => {
            return Err(ParseError::new(
                1,
                ParseErrorKind::MissingLine("number of employees"),
            ))
        }
    };
    if lines.next().is_none() {
        return Err(ParseError::new(
            2,
            ParseErrorKind::MissingLine("goodie list label"),
        ));
    }

    let mut goodies = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let (name, price) = split_pair(line, line_no)?;
        let price = parse_number::<f64>(price, line_no)?;
        let goodie = Goodie::new(name, price)
            .map_err(|e| ParseError::new(line_no, ParseErrorKind::InvalidRecord(e)))?;
        goodies.push(goodie);
    }

    debug!(headcount, count = goodies.len(), "parsed goodies");
    Ok(GoodieInput { headcount, goodies })
}

fn parse_number<T: std::str::FromStr>(text: &str, line: usize) -> Result<T, ParseError> {
    let text = text.trim();
    text.parse::<T>()
        .map_err(|_| ParseError::new(line, ParseErrorKind::InvalidNumber(text.to_string())))
}

fn split_pair(line: &str, line_no: usize) -> Result<(&str, &str), ParseError> {
    line.trim_end().rsplit_once(": ").ok_or_else(|| {
        ParseError::new(
            line_no,
            ParseErrorKind::MissingSeparator(line.trim_end().to_string()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    const JOBS: &str = "1\n3\n0900\n1030\n100\n1000\n1200\n500\n1100\n1200\n300";

    const GOODIES: &str = "Number of employees: 2\n\
                           Goodies and Prices:\n\
                           \n\
                           Fitbit Plus: 7980\n\
                           IPods: 22349\n\
                           Cult Pass: 2799\n";

    #[test]
    fn test_parse_jobs() {
        let jobs = parse_jobs(JOBS).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0], Job::new(900, 1030, 100.0).unwrap());
        assert_eq!(jobs[2], Job::new(1100, 1200, 300.0).unwrap());
    }

    #[test]
    fn test_parse_jobs_crlf_and_trailing_newline() {
        let jobs = parse_jobs("1\r\n1\r\n0900\r\n1000\r\n250\r\n\r\n").unwrap();
        assert_eq!(jobs, vec![Job::new(900, 1000, 250.0).unwrap()]);
    }

    #[test]
    fn test_parse_jobs_count_mismatch_uses_records() {
        let jobs = parse_jobs("1\n5\n0900\n1000\n10").unwrap();
        assert_eq!(jobs.len(), 1);
    }

    #[test]
    fn test_parse_jobs_no_jobs() {
        assert!(parse_jobs("1\n0").unwrap().is_empty());
    }

    #[test]
    fn test_parse_jobs_empty_input() {
        let err = parse_jobs("  \n").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(matches!(err.kind, ParseErrorKind::MissingLine(_)));
    }

    #[test]
    fn test_parse_jobs_incomplete_group() {
        let err = parse_jobs("1\n1\n0900\n1000").unwrap_err();
        assert_eq!(err, ParseError::new(5, ParseErrorKind::MissingLine("profit")));
    }

    #[test]
    fn test_parse_jobs_invalid_number() {
        let err = parse_jobs("1\n1\n09:00\n1000\n10").unwrap_err();
        assert_eq!(err.line, 3);
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("09:00".into()));
    }

    #[test]
    fn test_parse_jobs_end_before_start() {
        let err = parse_jobs("1\n1\n1000\n0900\n10").unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidRecord(RecordError::EndBeforeStart {
                start: 1000,
                end: 900
            })
        );
    }

    #[test]
    fn test_parse_goodies() {
        let input = parse_goodies(GOODIES).unwrap();
        assert_eq!(input.headcount, 2);
        assert_eq!(input.goodies.len(), 3);
        assert_eq!(input.goodies[1].name(), "IPods");
        assert_eq!(input.goodies[1].price(), 22349.0);
    }

    #[test]
    fn test_parse_goodies_name_with_colon() {
        let input = parse_goodies("Number of employees: 1\nlabel\nSize: XL: 300").unwrap();
        assert_eq!(input.goodies[0].name(), "Size: XL");
        assert_eq!(input.goodies[0].price(), 300.0);
    }

    #[test]
    fn test_parse_goodies_negative_headcount_kept() {
        let input = parse_goodies("Number of employees: -1\nlabel\n").unwrap();
        assert_eq!(input.headcount, -1);
        assert!(input.goodies.is_empty());
    }

    #[test]
    fn test_parse_goodies_missing_separator() {
        let err = parse_goodies("Number of employees: 1\nlabel\nMug 300").unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::MissingSeparator(_)));
    }

    #[test]
    fn test_parse_goodies_missing_label() {
        let err = parse_goodies("Number of employees: 1").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_parse_goodies_bad_headcount() {
        let err = parse_goodies("Number of employees: many\nlabel").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidNumber("many".into()));
    }
}
