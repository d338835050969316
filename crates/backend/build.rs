use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let profile = env::var("PROFILE").expect("PROFILE is set by cargo");

    // OUT_DIR is target/<profile>/build/backend-xxx/out; the binary lives in target/<profile>
    let target_dir = Path::new(&out_dir)
        .ancestors()
        .find(|p| p.ends_with(&profile))
        .expect("Could not find target profile directory");

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .expect("Could not find workspace root");

    let source_config = workspace_root.join("config.toml");
    let dest_config = target_dir.join("config.toml");

    if source_config.exists() {
        fs::copy(&source_config, &dest_config)
            .unwrap_or_else(|e| panic!("Failed to copy config.toml: {}", e));
    } else {
        println!("cargo:warning=config.toml not found at {:?}, the embedded default will be used", source_config);
    }
}
