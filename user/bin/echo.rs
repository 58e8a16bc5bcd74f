#![no_std]
#![no_main]

use rt::{Argv, Fd};

fn main(_argc: usize, argv: Argv) -> i32 {
    let mut out = Fd::STDOUT;
    user::echo::run(argv, &mut out)
}

rt::entry!(main);
