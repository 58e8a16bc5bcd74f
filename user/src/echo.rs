use rt::{Argv, RawWrite};

/// Writes the arguments separated by spaces, followed by a newline.
///
/// Returns 1 if any write comes up short.
pub fn run(argv: Argv, out: &mut impl RawWrite) -> i32 {
    let mut put = |bytes: &[u8]| out.raw_write(bytes) == bytes.len() as isize;

    let mut ok = true;
    for (i, arg) in argv.args().enumerate() {
        if i > 0 {
            ok &= put(b" ");
        }
        ok &= put(arg.to_bytes());
    }
    ok &= put(b"\n");

    if ok { 0 } else { 1 }
}
