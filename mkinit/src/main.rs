use std::env::args;
use std::fs::OpenOptions;
use std::io::Write;

use mkinit::{AT_PAGESZ, InitImage};

const PAGE_SIZE: usize = 4096;

fn parse_addr(s: &str) -> Option<usize> {
    match s.strip_prefix("0x") {
        Some(hex) => usize::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}

fn main() {
    let args = args().collect::<Vec<String>>();

    if args.len() < 3 {
        println!("Usage: mkinit <init.img> <stack_top> [args]");
        std::process::exit(1);
    }

    let Some(stack_top) = parse_addr(&args[2]) else {
        println!("mkinit: bad stack top {}", args[2]);
        std::process::exit(1);
    };

    let image = InitImage::new(&args[3..]).aux(AT_PAGESZ, PAGE_SIZE);
    let bytes = match image.serialize(stack_top) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("mkinit: {e}");
            std::process::exit(1);
        }
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&args[1])
        .expect("failed to open file");
    file.write_all(&bytes).expect("failed to write image");

    println!("sp = {:#x}, {} bytes", stack_top - bytes.len(), bytes.len());
}
