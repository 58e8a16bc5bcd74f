use rt::{Argv, RawWrite};

const GREETING: &[u8] = b"my name is ";
const BAD_ARGC: &[u8] = b"Incorrect argc\n";

/// Prints `my name is <argv[0]>`. Expects no arguments besides the program
/// name; otherwise complains and returns 1.
pub fn run(argc: usize, argv: Argv, out: &mut impl RawWrite) -> i32 {
    let name = match argv.program() {
        Some(name) if argc == 1 => name,
        _ => {
            out.raw_write(BAD_ARGC);
            return 1;
        }
    };

    out.raw_write(GREETING);
    out.raw_write(name.to_bytes());
    0
}
