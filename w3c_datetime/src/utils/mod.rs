use crate::error::ValueError;

pub mod parser_digits;

/// Ensures `expected` bytes are available from `pos`.
#[inline(always)]
pub fn check_len(b: &[u8], pos: usize, expected: usize) -> Result<(), ValueError> {
    if b.len() < pos + expected {
        Err(ValueError::Incomplete {
            position: b.len(),
        })
    } else {
        Ok(())
    }
}

/// Consumes exactly the byte `expected` at `pos`.
#[inline(always)]
pub fn expect_byte(b: &[u8], pos: usize, expected: u8) -> Result<(), ValueError> {
    match b.get(pos) {
        Some(&value) if value == expected => Ok(()),
        Some(_) => Err(ValueError::Expected {
            expected,
            position: pos,
        }),
        None => Err(ValueError::Incomplete { position: pos }),
    }
}
