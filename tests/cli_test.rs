use clap::Parser;
use packsmith::cli::{find_pack_root, run_with_args, Args};
use packsmith::error::Error;
use tempfile::TempDir;

fn make_pack(tmp: &TempDir) {
    std::fs::write(
        tmp.path().join("pack.mcmeta"),
        r#"{"pack": {"pack_format": 10, "description": ""}}"#,
    )
    .unwrap();
}

#[test]
fn test_verbose_flag_parses() {
    let args = Args::try_parse_from(["packsmith", "--verbose"]).unwrap();
    assert!(args.verbose);
    assert!(args.pack_dir.is_none());
    assert!(args.output.is_none());

    let args = Args::try_parse_from(["packsmith", "my_pack", "-o", "dist"]).unwrap();
    assert!(!args.verbose);
    assert_eq!(args.pack_dir.unwrap().to_str().unwrap(), "my_pack");
    assert_eq!(args.output.unwrap().to_str().unwrap(), "dist");
}

#[test]
fn test_find_pack_root_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    make_pack(&tmp);
    assert_eq!(find_pack_root(tmp.path()).unwrap(), tmp.path());
}

#[test]
fn test_find_pack_root_from_src_subdirectory() {
    let tmp = TempDir::new().unwrap();
    make_pack(&tmp);
    let src = tmp.path().join("src");
    std::fs::create_dir(&src).unwrap();
    assert_eq!(find_pack_root(&src).unwrap(), tmp.path());
}

#[test]
fn test_find_pack_root_fails_without_marker() {
    let tmp = TempDir::new().unwrap();
    match find_pack_root(tmp.path()) {
        Err(Error::ConfigError(msg)) => assert!(msg.contains("pack.mcmeta")),
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_run_with_args_builds_into_output_dir() {
    let pack = TempDir::new().unwrap();
    make_pack(&pack);
    std::fs::write(pack.path().join("packsmith.json"), r#"{"generated_dir": "gen"}"#)
        .unwrap();
    let out = TempDir::new().unwrap();

    let args = Args {
        pack_dir: Some(pack.path().to_path_buf()),
        output: Some(out.path().to_path_buf()),
        verbose: false,
    };
    run_with_args(&args, |b| {
        b.namespace("cli.test", |b| {
            b.mcfunction("hello", |b| b.write("say hello")).map(|_| ())
        })
    })
    .unwrap();

    let written =
        std::fs::read_to_string(out.path().join("data/cli.test/functions/hello.mcfunction"))
            .unwrap();
    assert_eq!(written, "# Built with packsmith\n\nsay hello\n");
    // the pack root itself stays untouched
    assert!(!pack.path().join("data").exists());
}

#[test]
fn test_run_with_args_defaults_output_to_pack_root() {
    let pack = TempDir::new().unwrap();
    make_pack(&pack);

    let args =
        Args { pack_dir: Some(pack.path().to_path_buf()), output: None, verbose: false };
    run_with_args(&args, |b| {
        b.namespace("cli.test", |b| {
            b.mcfunction("hello", |b| b.write("say hello")).map(|_| ())
        })
    })
    .unwrap();

    assert!(pack.path().join("data/cli.test/functions/hello.mcfunction").is_file());
}
