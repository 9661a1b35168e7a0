//! Reads the `--input` matrix file format and prints result matrices.
//!
//! `--input` is a JSON array of rows, each row an array of cells, each cell
//! a `[re_num, re_den, im_num, im_den]` quad of integers (`SPEC_FULL.md`
//! §6). Numbers too large for `i64` can be given as decimal strings.

use std::path::Path;

use anyhow::{bail, Context, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use qmb_algebra::{GaussianRational, Matrix};
use serde_json::Value as Json;

/// Read a matrix from a JSON file in the quad-of-integers format.
pub fn read_matrix_json(path: &Path) -> Result<Matrix> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading matrix file {}", path.display()))?;
    let json: Json = serde_json::from_str(&text)
        .with_context(|| format!("parsing {} as JSON", path.display()))?;
    let rows = json
        .as_array()
        .context("matrix JSON must be an array of rows")?;
    if rows.is_empty() {
        bail!("matrix JSON must have at least one row");
    }
    let mut data = Vec::new();
    let mut cols = None;
    for row in rows {
        let cells = row
            .as_array()
            .context("each matrix row must be an array of cells")?;
        match cols {
            None => cols = Some(cells.len()),
            Some(n) if n != cells.len() => bail!("matrix rows have inconsistent lengths"),
            _ => {}
        }
        for cell in cells {
            data.push(parse_quad(cell)?);
        }
    }
    Ok(Matrix::from_row_major(rows.len(), cols.unwrap_or(0), data))
}

fn parse_quad(cell: &Json) -> Result<GaussianRational> {
    let quad = cell
        .as_array()
        .context("each matrix cell must be a [re_num, re_den, im_num, im_den] quad")?;
    if quad.len() != 4 {
        bail!("each matrix cell quad must have exactly 4 elements, got {}", quad.len());
    }
    let [re_num, re_den, im_num, im_den] = [
        parse_bigint(&quad[0])?,
        parse_bigint(&quad[1])?,
        parse_bigint(&quad[2])?,
        parse_bigint(&quad[3])?,
    ];
    Ok(GaussianRational::new(
        BigRational::new(re_num, re_den),
        BigRational::new(im_num, im_den),
    ))
}

fn parse_bigint(v: &Json) -> Result<BigInt> {
    match v {
        Json::Number(n) => Ok(BigInt::from(
            n.as_i64().context("matrix quad numbers must be integers")?,
        )),
        Json::String(s) => s
            .parse::<BigInt>()
            .with_context(|| format!("parsing \"{s}\" as an integer")),
        other => bail!("expected an integer or decimal string, got {other}"),
    }
}

/// Print a matrix in the same `[re_num, re_den, im_num, im_den]` quad shape
/// `--input` accepts, one row per line.
pub fn print_matrix(m: &Matrix) {
    for i in 0..m.rows() {
        let cells: Vec<String> = (0..m.cols())
            .map(|j| {
                let q = m.get(i, j);
                format!(
                    "[{}, {}, {}, {}]",
                    q.re.numer(),
                    q.re.denom(),
                    q.im.numer(),
                    q.im.denom()
                )
            })
            .collect();
        println!("[{}]", cells.join(", "));
    }
}
