#![no_std]
#![no_main]

use rt::{Argv, Fd};

fn main(argc: usize, argv: Argv) -> i32 {
    let mut out = Fd::STDOUT;
    user::hello::run(argc, argv, &mut out)
}

rt::entry!(main);
