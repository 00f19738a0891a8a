use crate::{error::ValueError, utils::check_len};

/// Reads exactly `width` ASCII digits starting at `pos`.
#[inline(always)]
pub fn parse_fixed(b: &[u8], pos: usize, width: usize) -> Result<i64, ValueError> {
    check_len(b, pos, width)?;
    b[pos..pos + width]
        .iter()
        .enumerate()
        .try_fold(0i64, |acc, (i, &c)| {
            if c.is_ascii_digit() {
                Ok(acc * 10 + i64::from(c - b'0'))
            } else {
                Err(ValueError::InvalidChar {
                    value: c,
                    position: pos + i,
                })
            }
        })
}

/// Reads a run of 1 to `max` ASCII digits starting at `pos`.
///
/// Returns the value and the number of digits consumed. A longer run is
/// reported as out of range rather than silently truncated.
#[inline]
pub fn parse_run(
    b: &[u8],
    pos: usize,
    max: usize,
    field: &'static str,
) -> Result<(i64, usize), ValueError> {
    let rest = b.get(pos..).unwrap_or_default();
    let len = rest.iter().take_while(|c| c.is_ascii_digit()).count();
    match len {
        0 => match rest.first() {
            Some(&value) => Err(ValueError::InvalidChar {
                value,
                position: pos,
            }),
            None => Err(ValueError::Incomplete { position: pos }),
        },
        n if n > max => Err(ValueError::OutOfRange {
            field,
            position: pos,
        }),
        n => Ok((parse_fixed(b, pos, n)?, n)),
    }
}
