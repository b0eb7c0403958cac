//! Definition file grammar
//!
//! Both `polygons.ini` and `matrices.ini` are line oriented. Blank lines and
//! lines starting with `#` are dropped first; of what remains, a line whose
//! text before the first colon is `name` opens a record and the next one
//! (matrix) or two (polygon) lines hold its numbers, separated by single
//! spaces.
//!
//! ```text
//! name:square
//! x:0 0 1 1 0 0
//! y:0 0 0 1 1 0
//!
//! name:default
//! 0 1 -1 0
//! ```
//!
//! On a polygon data line the token between the colon and the first space is
//! a shift that is subtracted from every following value, so the named
//! reference point of the outline lands on the origin.
//!
//! Parsing never fails as a whole. A bad record is stored in degraded form
//! with the problem appended to its name.

use linmap_core::{
    GridIssue, GridShape, NamedCollection, NamedGrid, PointSeries, RecordKind, TransformMatrix,
};

/// Retained lines, in file order, with any `\r` line ending removed
fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .collect()
}

/// Name carried by a `name:` marker line, or `None` for any other line
fn record_name(line: &str) -> Option<&str> {
    let mut fields = line.split(':');
    match fields.next() {
        Some("name") => Some(fields.next().unwrap_or("")),
        _ => None,
    }
}

fn parse_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> Option<Vec<f64>> {
    tokens.map(|token| token.trim().parse::<f64>().ok()).collect()
}

/// Mark a record whose `name:` line was empty.
///
/// The grid is built under the file name, which the sentinel text then
/// replaces, so the record carries [`GridIssue::MalformedName`] rather than
/// [`GridIssue::MissingName`].
fn check_name<K: GridShape>(
    grid: impl FnOnce(&str) -> NamedGrid<K>,
    name: &str,
    record: RecordKind,
) -> NamedGrid<K> {
    if name.is_empty() {
        grid(record.file_name()).with_issue(GridIssue::MalformedName { record })
    } else {
        grid(name)
    }
}

/// Read one matrix data line into its four entries.
pub fn parse_matrix_line(line: &str) -> Result<[f64; 4], GridIssue> {
    let values = parse_tokens(line.split(' ')).ok_or(GridIssue::MalformedNumeric {
        record: RecordKind::Matrix,
    })?;
    <[f64; 4]>::try_from(values.as_slice()).map_err(|_| GridIssue::WrongEntryCount {
        found: values.len(),
    })
}

/// Read one polygon data line, subtracting its leading shift value.
pub fn parse_coordinate_line(line: &str) -> Result<Vec<f64>, GridIssue> {
    let malformed = GridIssue::MalformedNumeric {
        record: RecordKind::Polygon,
    };
    let mut tokens = line.split(' ');
    let head = tokens.next().unwrap_or("");
    let (label, shift) = head.split_once(':').ok_or_else(|| malformed.clone())?;
    let shift = shift
        .split(':')
        .next()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or_else(|| malformed.clone())?;
    if label != "x" && label != "y" {
        tracing::warn!(label, "unexpected coordinate label in polygons.ini");
    }
    let values = parse_tokens(tokens).ok_or(malformed)?;
    Ok(values.into_iter().map(|v| v - shift).collect())
}

/// Parse the text of `matrices.ini`.
pub fn parse_matrices(text: &str) -> NamedCollection<TransformMatrix> {
    let lines = content_lines(text);
    let mut matrices = NamedCollection::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(name) = record_name(line) else {
            continue;
        };
        let parsed = lines
            .get(i + 1)
            .ok_or(GridIssue::MalformedNumeric {
                record: RecordKind::Matrix,
            })
            .and_then(|data| parse_matrix_line(data));

        let matrix = check_name(
            |name| match parsed {
                Ok(entries) => TransformMatrix::from_row_major(name, entries),
                Err(issue) => TransformMatrix::degraded(name, issue),
            },
            name,
            RecordKind::Matrix,
        );
        if !matrix.is_valid() {
            tracing::warn!(matrix = matrix.name(), "degraded matrix record");
        }
        tracing::debug!(matrix = matrix.name(), "loaded matrix");
        matrices.add(matrix);
    }
    matrices
}

/// Parse the text of `polygons.ini`.
pub fn parse_polygons(text: &str) -> NamedCollection<PointSeries> {
    let lines = content_lines(text);
    let mut polygons = NamedCollection::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(name) = record_name(line) else {
            continue;
        };
        let row = |offset: usize| {
            lines
                .get(i + offset)
                .ok_or(GridIssue::MalformedNumeric {
                    record: RecordKind::Polygon,
                })
                .and_then(|data| parse_coordinate_line(data))
        };

        let polygon = check_name(
            |name| match row(1).and_then(|xs| Ok((xs, row(2)?))) {
                Ok((xs, ys)) => PointSeries::new(name, xs, ys),
                Err(issue) => PointSeries::degraded(name, issue),
            },
            name,
            RecordKind::Polygon,
        );
        if !polygon.is_valid() {
            tracing::warn!(polygon = polygon.name(), "degraded polygon record");
        }
        tracing::debug!(polygon = polygon.name(), vertices = polygon.len(), "loaded polygon");
        polygons.add(polygon);
    }
    polygons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blank_lines_dropped() {
        let text = "# header\n\nname:a\n   \n# inline\n1 2 3 4\n";
        let matrices = parse_matrices(text);
        assert_eq!(matrices.len(), 1);
        assert_eq!(matrices.get("a").map(|m| m.rows()), Some([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_matrix_too_few_entries() {
        let matrices = parse_matrices("name:short\n1 2 3\n");
        let (name, matrix) = matrices.first().unwrap();
        assert!(name.starts_with("short Error:"));
        assert_eq!(matrix.rows(), [[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(matrix.issues(), &[GridIssue::WrongEntryCount { found: 3 }]);
    }

    #[test]
    fn test_matrix_too_many_entries() {
        let matrices = parse_matrices("name:long\n1 2 3 4 5\n");
        let (_, matrix) = matrices.first().unwrap();
        assert_eq!(matrix.rows(), [[1.0, 0.0], [0.0, 1.0]]);
        assert_eq!(matrix.issues(), &[GridIssue::WrongEntryCount { found: 5 }]);
    }

    #[test]
    fn test_matrix_non_numeric() {
        let matrices = parse_matrices("name:words\none two three four\n");
        let (name, matrix) = matrices.first().unwrap();
        assert!(name.contains("incorrectly formatted in matrices.ini"));
        assert_eq!(matrix.rows(), [[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_matrix_missing_data_line() {
        let matrices = parse_matrices("name:last\n");
        let (_, matrix) = matrices.first().unwrap();
        assert_eq!(
            matrix.validation_error(),
            Some(&GridIssue::MalformedNumeric {
                record: RecordKind::Matrix
            })
        );
    }

    #[test]
    fn test_double_space_is_malformed() {
        assert!(parse_matrix_line("1  2 3 4").is_err());
    }

    #[test]
    fn test_empty_name_gets_sentinel() {
        let matrices = parse_matrices("name:\n1 0 0 1\n");
        assert_eq!(
            matrices.names().collect::<Vec<_>>(),
            vec!["MissingNo Error: this matrix was given an incorrectly formatted name. "]
        );
        let (_, matrix) = matrices.first().unwrap();
        assert!(!matrix.is_valid());
        assert_eq!(
            matrix.issues(),
            &[GridIssue::MalformedName {
                record: RecordKind::Matrix
            }]
        );
        assert_eq!(matrix.rows(), [[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn test_empty_polygon_name_gets_sentinel() {
        let polygons = parse_polygons("name:\nx:0 0 1\ny:0 0 1\n");
        let (name, polygon) = polygons.first().unwrap();
        assert_eq!(
            name,
            "MissingNo Error: this polygon was given an incorrectly formatted name. "
        );
        assert_eq!(
            polygon.validation_error(),
            Some(&GridIssue::MalformedName {
                record: RecordKind::Polygon
            })
        );
        assert_eq!(polygon.xs(), &[0.0, 1.0]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let matrices = parse_matrices("# header\r\nname:shear\r\n1 1 0 1\r\n");
        assert!(matrices.contains("shear"));
        assert_eq!(
            matrices.get("shear").map(|m| m.rows()),
            Some([[1.0, 1.0], [0.0, 1.0]])
        );

        let polygons = parse_polygons("name:tri\r\nx:0 0 1 0\r\ny:0 0 0 1\r\n");
        assert_eq!(polygons.names().collect::<Vec<_>>(), vec!["tri"]);
        assert!(polygons.get("tri").is_some_and(|tri| tri.is_valid()));
    }

    #[test]
    fn test_name_stops_at_second_colon() {
        let matrices = parse_matrices("name:half:turn\n-1 0 0 -1\n");
        assert!(matrices.contains("half"));
    }

    #[test]
    fn test_repeated_name_last_wins() {
        let matrices = parse_matrices("name:m\n1 0 0 1\nname:m\n2 0 0 2\n");
        assert_eq!(matrices.len(), 1);
        assert_eq!(matrices.get("m").map(|m| m.rows()), Some([[2.0, 0.0], [0.0, 2.0]]));
    }

    #[test]
    fn test_polygon_shift_subtracted() {
        let polygons = parse_polygons("name:tri\nx:1 1 2 1\ny:0.5 0.5 0.5 1.5\n");
        let tri = polygons.get("tri").unwrap();
        assert_eq!(tri.xs(), &[0.0, 1.0, 0.0]);
        assert_eq!(tri.ys(), &[0.0, 0.0, 1.0]);
        assert!(tri.is_valid());
    }

    #[test]
    fn test_polygon_mismatched_lengths() {
        let polygons = parse_polygons("name:odd\nx:0 1 2 3\ny:0 1 2 3 4\n");
        let (name, odd) = polygons.first().unwrap();
        assert!(name.starts_with("odd Error:"));
        assert_eq!(odd.xs(), &[0.0, 0.0]);
        assert_eq!(
            odd.validation_error(),
            Some(&GridIssue::LengthMismatch { x_len: 3, y_len: 4 })
        );
    }

    #[test]
    fn test_polygon_non_numeric() {
        let polygons = parse_polygons("name:bad\nx:0 a b\ny:0 1 2\n");
        let (name, bad) = polygons.first().unwrap();
        assert!(name.contains("incorrectly formatted in polygons.ini"));
        assert_eq!(bad.len(), 2);
    }

    #[test]
    fn test_polygon_missing_y_line() {
        let polygons = parse_polygons("name:half\nx:0 1 2\n");
        let (_, half) = polygons.first().unwrap();
        assert!(!half.is_valid());
        assert_eq!(half.ys(), &[0.0, 0.0]);
    }

    #[test]
    fn test_coordinate_line_requires_colon() {
        assert!(parse_coordinate_line("0 1 2").is_err());
        assert_eq!(parse_coordinate_line("x:2 3 4"), Ok(vec![1.0, 2.0]));
    }
}
