//! Textual matrix literals.
//!
//! The grammar is deliberately small:
//!
//! ```text
//! # comment lines start with '#'
//! name = [ 1 2 3 ; 4 5 6 ]
//! ```
//!
//! Elements are separated by whitespace, rows by `;` or a line break. The
//! `name =` prefix and the brackets are optional, blank lines and trailing row
//! separators are ignored, and a decimal comma is read as a decimal point.
//! The first row fixes the number of columns.

use std::{fmt, str::FromStr};

use num_traits::NumCast;

use crate::{Element, Matrix, MatrixError};

impl<T: Element> Matrix<T> {
    /// Parses a matrix literal.
    ///
    /// Empty input (or input made only of comments and separators) yields an empty
    /// matrix.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::IrregularShape`] if a row does not have as many elements as
    ///   the first one.
    /// - [`MatrixError::InvalidElement`] if a token is not a number.
    ///
    /// # Example
    ///
    /// ```
    /// use scanmat_matrix::Matrix;
    ///
    /// let m = Matrix::<f64>::parse("1 2; 3 4").unwrap();
    /// assert_eq!(m.get(1, 0), Ok(2.0));
    /// assert_eq!(m.get(0, 1), Ok(3.0));
    ///
    /// let k = Matrix::<f32>::parse("K = [0,5 1\n2 3]").unwrap();
    /// assert_eq!(k.name(), Some("K"));
    /// assert_eq!(k.get(0, 0), Ok(0.5));
    /// ```
    pub fn parse(text: &str) -> Result<Self, MatrixError> {
        let body = text
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        let (name, body) = split_name(&body);
        let body = strip_brackets(body);

        let mut data = Vec::new();
        let mut cols = None;
        let mut rows = 0;
        for row_text in body.split([';', '\n']) {
            let row_text = row_text.replace(',', ".");
            let tokens = row_text.split_whitespace().collect::<Vec<_>>();
            if tokens.is_empty() {
                continue;
            }
            let expected = *cols.get_or_insert(tokens.len());
            if tokens.len() != expected {
                return Err(MatrixError::IrregularShape {
                    row: rows,
                    expected,
                    found: tokens.len(),
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                data.push(parse_element(token).ok_or_else(|| MatrixError::InvalidElement {
                    token: token.to_string(),
                    row: rows,
                    col,
                })?);
            }
            rows += 1;
        }

        let mut m = Matrix::from_vec(cols.unwrap_or(0), rows, data)?;
        if let Some(name) = name {
            m.set_name(name);
        }
        Ok(m)
    }

    /// Renders the rows as space-separated values joined by `row_separator`.
    ///
    /// A named matrix is prefixed with `name = `. The result parses back with
    /// [`Matrix::parse`] whenever the elements print exactly.
    pub fn to_text(&self, row_separator: &str) -> String {
        let mut out = String::new();
        if let Some(name) = &self.name {
            out.push_str(name);
            out.push_str(" = ");
        }
        out.push_str(&self.rows_text(row_separator));
        out
    }

    fn rows_text(&self, row_separator: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        self.data
            .chunks_exact(self.shape.cols)
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(row_separator)
    }
}

// The name prefix is only recognised on the first line and must be a single word,
// so a stray '=' further down is reported as an invalid element.
fn split_name(text: &str) -> (Option<&str>, &str) {
    let body = text.trim_start();
    let first_line = body.split('\n').next().unwrap_or_default();
    let Some(pos) = first_line.find('=') else {
        return (None, text);
    };
    let name = body[..pos].trim();
    if name.is_empty() || name.contains(char::is_whitespace) || name.contains('[') {
        return (None, text);
    }
    (Some(name), &body[pos + 1..])
}

fn strip_brackets(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(trimmed)
}

// Integer matrices also accept float notation such as `1e3`, as long as the value
// is integral; `1.5` is rejected rather than truncated.
fn parse_element<T: Element>(token: &str) -> Option<T> {
    token.parse::<T>().ok().or_else(|| {
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && v.fract() == 0.0)
            .and_then(<T as NumCast>::from)
    })
}

impl<T: Element> FromStr for Matrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `[1 2; 3 4]`, prefixed with `name = ` for named matrices.
impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} = ")?;
        }
        write!(f, "[{}]", self.rows_text("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Shape;

    #[test]
    fn test_parse_basic() -> Result<(), MatrixError> {
        let m = Matrix::<i32>::parse("1 2; 3 4")?;
        assert_eq!(m.shape(), Shape::new(2, 2));
        assert_eq!(m.get(0, 0)?, 1);
        assert_eq!(m.get(1, 0)?, 2);
        assert_eq!(m.get(0, 1)?, 3);
        assert_eq!(m.get(1, 1)?, 4);
        assert_eq!(m.name(), None);
        Ok(())
    }

    #[test]
    fn test_parse_newlines_comments_and_trailing_separator() -> Result<(), MatrixError> {
        let text = "# calibration\n\n1.5\t2\r\n3   4;\n\n";
        let m: Matrix<f64> = text.parse()?;
        assert_eq!(m.as_slice(), &[1.5, 2.0, 3.0, 4.0]);
        Ok(())
    }

    #[test]
    fn test_parse_decimal_comma() -> Result<(), MatrixError> {
        let m = Matrix::<f32>::parse("0,25 1,5")?;
        assert_eq!(m.as_slice(), &[0.25, 1.5]);
        Ok(())
    }

    #[test]
    fn test_parse_irregular_rows() {
        assert_eq!(
            Matrix::<i32>::parse("1 2 3; 4 5; 6 7 8"),
            Err(MatrixError::IrregularShape {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_parse_invalid_token() {
        assert_eq!(
            Matrix::<u8>::parse("1 2\n3 x"),
            Err(MatrixError::InvalidElement {
                token: "x".to_string(),
                row: 1,
                col: 1
            })
        );
        assert!(Matrix::<u8>::parse("256").is_err());
    }

    #[test]
    fn test_parse_empty() -> Result<(), MatrixError> {
        assert!(Matrix::<f64>::parse("")?.is_empty());
        assert!(Matrix::<f64>::parse("  ;\n# nothing\n")?.is_empty());
        assert!(Matrix::<f64>::parse("[]")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_integer_accepts_float_notation() -> Result<(), MatrixError> {
        let m = Matrix::<i32>::parse("1e3 -2")?;
        assert_eq!(m.as_slice(), &[1000, -2]);
        assert_eq!(Matrix::<u16>::parse("2.0e2")?.as_slice(), &[200]);

        assert_eq!(
            Matrix::<i32>::parse("1.5 2,9"),
            Err(MatrixError::InvalidElement {
                token: "1.5".to_string(),
                row: 0,
                col: 0
            })
        );
        assert!(Matrix::<i32>::parse("4 2,9").is_err());
        assert!(Matrix::<u8>::parse("-1e0").is_err());
        assert!(Matrix::<i64>::parse("inf").is_err());
        Ok(())
    }

    #[test]
    fn test_name_prefix_only_on_first_line() -> Result<(), MatrixError> {
        let m = Matrix::<i32>::parse("# header\nA = 1 2\n3 4")?;
        assert!(m.has_name("A"));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);

        assert_eq!(
            Matrix::<i32>::parse("1 2\n= 4"),
            Err(MatrixError::InvalidElement {
                token: "=".to_string(),
                row: 1,
                col: 0
            })
        );
        assert!(Matrix::<i32>::parse("1 2 = 3 4").is_err());
        Ok(())
    }

    #[test]
    fn test_to_text_roundtrip() -> Result<(), MatrixError> {
        let m = Matrix::<i16>::from_vec(3, 2, vec![1, -2, 3, 40, 50, -600])?;
        assert_eq!(m.to_text("\n"), "1 -2 3\n40 50 -600");
        assert_eq!(Matrix::<i16>::parse(&m.to_text("\n"))?, m);
        assert_eq!(Matrix::<i16>::parse(&m.to_text("; "))?, m);
        Ok(())
    }

    #[test]
    fn test_named_roundtrip() -> Result<(), MatrixError> {
        let m = Matrix::<f64>::from_vec(2, 1, vec![0.5, 2.0])?.with_name("T");
        assert_eq!(m.to_text("; "), "T = 0.5 2");
        assert_eq!(m.to_string(), "T = [0.5 2]");

        let back = Matrix::<f64>::parse(&m.to_string())?;
        assert_eq!(back, m);
        assert!(back.has_name("T"));
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), MatrixError> {
        let m = Matrix::<u8>::identity(2)?;
        assert_eq!(format!("{m}"), "[1 0; 0 1]");
        assert_eq!(Matrix::<u8>::empty().to_string(), "[]");
        Ok(())
    }
}
