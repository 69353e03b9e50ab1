use std::path::Path;

use packsmith::builder::{build, Builder};
use packsmith::config::Config;
use packsmith::error::Result;
use serde_json::json;
use tempfile::TempDir;

fn read(root: &Path, rel: &str) -> String {
    std::fs::read_to_string(root.join(rel)).unwrap()
}

/// A small but complete pack exercising files, tags, nested namespaces and
/// conditional blocks together.
fn sample_pack(b: &mut Builder) -> Result<()> {
    b.namespace("py.test", |b| {
        b.mcfunction("myfile", |b| b.write("say hello"))?;

        b.mcfunction("myfile3", |b| {
            b.write("say before execute")?;
            b.execute(&["if score $holder obj matches 1"], |b| {
                b.write("say cmd 1")?;
                b.write("say cmd 2")
            })?;
            b.execute(&["if score $holder obj matches 1"], |b| {
                for i in 1..=5 {
                    b.write(format!("say cmd {}", i))?;
                }
                Ok(())
            })
        })?;

        b.directory("functions", |b| {
            b.json_file("my_json", "tags", |b| {
                b.write(json!({"values": ["test:foo", "test:bar"]}))
            })
        })?;

        b.block_tag("my_blocks", |b| {
            b.write(json!({"values": ["minecraft:glass", "minecraft:air"]}))
        })?;

        b.namespace("py.dev", |b| {
            b.mcfunction("say_hi", |b| b.write("say hello")).map(|_| ())
        })?;
        Ok(())
    })
}

#[test]
fn test_end_to_end_pack() {
    let tmp = TempDir::new().unwrap();
    build(tmp.path(), &Config::default(), sample_pack).unwrap();

    assert!(tmp.path().join("data/py.test").is_dir());

    assert_eq!(
        read(tmp.path(), "data/py.test/functions/myfile.mcfunction"),
        "# Built with packsmith\n\nsay hello\n"
    );

    assert_eq!(
        read(tmp.path(), "data/py.test/functions/myfile3.mcfunction"),
        "# Built with packsmith\n\
         \n\
         say before execute\n\
         execute if score $holder obj matches 1 run say cmd 1\n\
         execute if score $holder obj matches 1 run say cmd 2\n\
         execute if score $holder obj matches 1 run function py.test:__generated__/myfile3_0\n"
    );

    assert_eq!(
        read(tmp.path(), "data/py.test/functions/__generated__/myfile3_0.mcfunction"),
        "# Built with packsmith\n\nsay cmd 1\nsay cmd 2\nsay cmd 3\nsay cmd 4\nsay cmd 5\n"
    );

    let my_json: serde_json::Value =
        serde_json::from_str(&read(tmp.path(), "data/py.test/tags/functions/my_json.json"))
            .unwrap();
    assert_eq!(my_json, json!({"values": ["test:foo", "test:bar"]}));

    let my_blocks: serde_json::Value =
        serde_json::from_str(&read(tmp.path(), "data/py.test/tags/blocks/my_blocks.json"))
            .unwrap();
    assert_eq!(my_blocks, json!({"values": ["minecraft:glass", "minecraft:air"]}));

    assert_eq!(
        read(tmp.path(), "data/py.dev/functions/say_hi.mcfunction"),
        "# Built with packsmith\n\nsay hello\n"
    );
}

#[test]
fn test_fresh_invocations_are_byte_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    build(first.path(), &Config::default(), sample_pack).unwrap();
    build(second.path(), &Config::default(), sample_pack).unwrap();

    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_generated_dir_name_comes_from_config() {
    let tmp = TempDir::new().unwrap();
    let config = Config { generated_dir: "gen".to_string(), ..Config::default() };
    build(tmp.path(), &config, |b| {
        b.namespace("py.test", |b| {
            b.mcfunction("home", |b| {
                b.execute(&["if entity @p"], |b| {
                    for i in 1..=4 {
                        b.write(format!("say cmd {}", i))?;
                    }
                    Ok(())
                })
            })
            .map(|_| ())
        })
    })
    .unwrap();

    assert!(tmp.path().join("data/py.test/functions/gen/home_0.mcfunction").is_file());
    let home = read(tmp.path(), "data/py.test/functions/home.mcfunction");
    assert!(home.contains("run function py.test:gen/home_0\n"));
}
