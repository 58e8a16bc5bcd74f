use mkinit::{AT_PAGESZ, AT_RANDOM, InitImage, RANDOM_LEN};
use proptest::prelude::*;
use rt::abi::aux;
use rt::InitBlock;

fn decode(image: &mkinit::LoadedImage) -> InitBlock {
    unsafe { InitBlock::from_raw(image.sp()) }
}

#[test]
fn decodes_single_argument() {
    let image = InitImage::new(["./hello"]).load().unwrap();
    let block = decode(&image);

    assert_eq!(block.argc(), 1);
    assert_eq!(block.argv().len(), 1);
    assert_eq!(block.argv().get(0).unwrap().to_bytes(), b"./hello");
    assert!(block.argv().get(1).is_none());
}

#[test]
fn argv_is_a_view_over_the_block() {
    let image = InitImage::new(["./hello", "x"]).load().unwrap();
    let block = decode(&image);

    // argv starts one word past argc, nothing is copied
    assert_eq!(
        block.argv().as_ptr() as usize,
        image.sp() as usize + size_of::<usize>()
    );
    let first = unsafe { *block.argv().as_ptr() };
    assert_eq!(first, block.argv().get(0).unwrap().as_ptr().cast::<u8>());
}

#[test]
fn zero_arguments_give_an_empty_view() {
    let image = InitImage::new(Vec::<&str>::new()).load().unwrap();
    let block = decode(&image);

    assert_eq!(block.argc(), 0);
    assert!(block.argv().is_empty());
    assert!(block.argv().program().is_none());
    assert_eq!(block.argv().iter().count(), 0);
    assert_eq!(block.argv().args().count(), 0);
}

#[test]
fn args_skip_the_program_name() {
    let image = InitImage::new(["echo", "a", "b"]).load().unwrap();
    let argv = decode(&image).argv();

    assert_eq!(argv.program().unwrap().to_bytes(), b"echo");
    assert_eq!(argv.args_as_str().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(argv.iter_as_str().collect::<Vec<_>>(), ["echo", "a", "b"]);
    assert_eq!(argv.iter().len(), 3);
}

#[test]
fn non_utf8_arguments_are_skipped_as_str() {
    let image = InitImage::new([&b"prog"[..], &[0xffu8, 0xfe][..], &b"ok"[..]])
        .load()
        .unwrap();
    let argv = decode(&image).argv();

    assert_eq!(argv.iter().count(), 3);
    assert_eq!(argv.args_as_str().collect::<Vec<_>>(), ["ok"]);
}

#[test]
fn environment_follows_argv() {
    let image = InitImage::new(["prog"])
        .env("HOME=/")
        .env("RT_LOG=debug")
        .load()
        .unwrap();
    let block = decode(&image);

    let env: Vec<_> = block.env().map(|e| e.to_str().unwrap()).collect();
    assert_eq!(env, ["HOME=/", "RT_LOG=debug"]);
    assert_eq!(block.var("RT_LOG").unwrap().to_bytes(), b"debug");
    assert_eq!(block.var("HOME").unwrap().to_bytes(), b"/");
    assert!(block.var("HOM").is_none());
    assert!(block.var("PATH").is_none());
}

#[test]
fn auxv_follows_environment() {
    let image = InitImage::new(["prog", "arg"])
        .env("A=1")
        .aux(AT_PAGESZ, 4096)
        .random([0x5a; RANDOM_LEN])
        .load()
        .unwrap();
    let block = decode(&image);

    assert_eq!(block.aux(aux::AT_PAGESZ), Some(4096));
    assert_eq!(block.aux(aux::AT_ENTRY), None);

    let random = block.aux(AT_RANDOM).unwrap() as *const [u8; RANDOM_LEN];
    assert_eq!(unsafe { *random }, [0x5a; RANDOM_LEN]);

    let keys: Vec<_> = block.auxv().map(|(k, _)| k).collect();
    assert_eq!(keys, [aux::AT_PAGESZ, aux::AT_RANDOM]);
}

proptest! {
    #[test]
    fn argv_round_trips(args in prop::collection::vec(r"[^\x00]{0,16}", 1..8)) {
        let image = InitImage::new(&args).load().unwrap();
        let block = decode(&image);

        prop_assert_eq!(block.argc(), args.len());
        for (i, arg) in args.iter().enumerate() {
            prop_assert_eq!(block.argv().get(i).unwrap().to_bytes(), arg.as_bytes());
        }
        prop_assert!(block.argv().get(args.len()).is_none());
    }
}
