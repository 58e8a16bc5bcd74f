fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    if os == "none" && arch == "riscv64" {
        println!("cargo:rustc-link-arg-bins=-T{manifest_dir}/linker-riscv64.ld");
    }
    println!("cargo:rerun-if-changed=linker-riscv64.ld");
}
