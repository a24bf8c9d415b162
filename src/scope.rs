//! Block scope exercises
//!
//! A value declared inside a block lives until the closing brace of that block. Whatever has to
//! outlive the block must be moved into a binding of the enclosing scope before the block ends;
//! naming the block's own bindings afterwards is rejected by the compiler, so there is no runtime
//! check to test for.
//!
//! Referencing `coins` after its block fails to build with error E0425 ("cannot find value in
//! this scope"):
//!
//! ```compile_fail,E0425
//! let mut score = 0;
//! {
//!     let coins = 5;
//!     let bonus = 10;
//!     score += coins * bonus;
//! }
//! println!("Final score: {score}");
//! println!("Coins outside block: {coins}");
//! ```

use std::io::{self, Write};

use log::debug;

pub const COINS: i64 = 5;
pub const BONUS: i64 = 10;

/// Runs the block scope exercise, writing `Inside block: 50` and `Final score: 50` to `out`.
/// Returns the final score.
pub fn block_scope<W: Write>(out: &mut W) -> io::Result<i64> {
    let mut score = 0;

    {
        let coins = COINS;
        let bonus = BONUS;

        let total = coins * bonus;
        score += total;

        writeln!(out, "Inside block: {total}")?;
    }

    writeln!(out, "Final score: {score}")?;
    debug!("scope: block scope finished with score {score}");

    Ok(score)
}

/// The same exercise with the inner block moved into a function. Only the score escapes, through
/// the mutable reference; the function's locals are out of reach for the caller:
///
/// ```compile_fail,E0425
/// fn award(score: &mut i64) {
///     let coins = 5;
///     let bonus = 10;
///     *score += coins * bonus;
/// }
///
/// let mut score = 0;
/// award(&mut score);
/// println!("Coins outside block: {coins}");
/// ```
pub fn function_scope<W: Write>(out: &mut W) -> io::Result<i64> {
    let mut score = 0;

    award(&mut score, out)?;

    writeln!(out, "Final score: {score}")?;
    debug!("scope: function scope finished with score {score}");

    Ok(score)
}

fn award<W: Write>(score: &mut i64, out: &mut W) -> io::Result<()> {
    let coins = COINS;
    let bonus = BONUS;

    let total = coins * bonus;
    *score += total;

    writeln!(out, "Inside block: {total}")
}
